use super::value_objects::{MonumentId, MonumentName, MonumentSlug};
use crate::domain::slug::SlugLang;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Monument {
    pub id: MonumentId,
    pub name_en: MonumentName,
    pub name_ar: Option<MonumentName>,
    pub description: Option<String>,
    pub slug_en: Option<MonumentSlug>,
    pub slug_ar: Option<MonumentSlug>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Monument {
    pub fn slug(&self, lang: SlugLang) -> Option<&MonumentSlug> {
        match lang {
            SlugLang::En => self.slug_en.as_ref(),
            SlugLang::Ar => self.slug_ar.as_ref(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewMonument {
    pub name_en: MonumentName,
    pub name_ar: Option<MonumentName>,
    pub description: Option<String>,
    pub slug_en: Option<MonumentSlug>,
    pub slug_ar: Option<MonumentSlug>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update. Outer `None` leaves a column untouched; for nullable
/// columns `Some(None)` clears it.
#[derive(Debug, Clone)]
pub struct MonumentUpdate {
    pub id: MonumentId,
    pub name_en: Option<MonumentName>,
    pub name_ar: Option<Option<MonumentName>>,
    pub description: Option<Option<String>>,
    pub slug_en: Option<Option<MonumentSlug>>,
    pub slug_ar: Option<Option<MonumentSlug>>,
    pub updated_at: DateTime<Utc>,
}

impl MonumentUpdate {
    pub fn new(id: MonumentId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name_en: None,
            name_ar: None,
            description: None,
            slug_en: None,
            slug_ar: None,
            updated_at,
        }
    }

    pub fn with_name_en(mut self, name: MonumentName) -> Self {
        self.name_en = Some(name);
        self
    }

    pub fn with_name_ar(mut self, name: Option<MonumentName>) -> Self {
        self.name_ar = Some(name);
        self
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_slug(mut self, lang: SlugLang, slug: Option<MonumentSlug>) -> Self {
        match lang {
            SlugLang::En => self.slug_en = Some(slug),
            SlugLang::Ar => self.slug_ar = Some(slug),
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name_en.is_none()
            && self.name_ar.is_none()
            && self.description.is_none()
            && self.slug_en.is_none()
            && self.slug_ar.is_none()
    }
}
