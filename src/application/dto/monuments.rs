use crate::application::error::ApplicationResult;
use crate::domain::monument::{Monument, build_entity_url};
use crate::domain::slug::{SlugLang, SlugPair};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MonumentDto {
    pub id: i64,
    pub name_en: String,
    pub name_ar: Option<String>,
    pub description: Option<String>,
    pub slug_en: Option<String>,
    pub slug_ar: Option<String>,
    /// Canonical public path for the English page.
    pub url_en: String,
    /// Canonical public path for the Arabic page.
    pub url_ar: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MonumentDto {
    pub fn from_monument(monument: Monument, base_url: Option<&str>) -> ApplicationResult<Self> {
        let id = i64::from(monument.id);
        let url_en = build_entity_url(
            id,
            monument.slug(SlugLang::En).map(|s| s.as_str()),
            SlugLang::En,
            base_url,
        )?;
        let url_ar = build_entity_url(
            id,
            monument.slug(SlugLang::Ar).map(|s| s.as_str()),
            SlugLang::Ar,
            base_url,
        )?;

        Ok(Self {
            id,
            name_en: monument.name_en.into_inner(),
            name_ar: monument.name_ar.map(|n| n.into_inner()),
            description: monument.description,
            slug_en: monument.slug_en.map(String::from),
            slug_ar: monument.slug_ar.map(String::from),
            url_en,
            url_ar,
            created_at: monument.created_at,
            updated_at: monument.updated_at,
        })
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MonumentListDto {
    pub items: Vec<MonumentDto>,
}

/// Generator output only; uniqueness is not checked. Empty means no slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SlugPreviewDto {
    pub slug_en: String,
    pub slug_ar: String,
}

impl From<SlugPair> for SlugPreviewDto {
    fn from(pair: SlugPair) -> Self {
        Self {
            slug_en: pair.en,
            slug_ar: pair.ar,
        }
    }
}
