//! `{id}-{slug}` path segments for public monument pages.
//!
//! The id is authoritative. The slug half only exists for readers and search
//! engines, so parsing never checks it against what is stored.

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::monument::value_objects::MonumentId;
use crate::domain::slug::SlugLang;
use serde::Serialize;

const SITES_SEGMENT: &str = "/sites/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityPath {
    pub id: MonumentId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

/// Builds `/{lang}/sites/{id}-{slug}`, or `/{lang}/sites/{id}` without a slug.
/// `base_url` is prefixed as given.
pub fn build_entity_url(
    id: i64,
    slug: Option<&str>,
    lang: SlugLang,
    base_url: Option<&str>,
) -> DomainResult<String> {
    let id = MonumentId::new(id)?;
    let base = base_url.unwrap_or_default();
    Ok(match slug {
        Some(slug) if !slug.is_empty() => format!("{base}/{lang}/sites/{id}-{slug}"),
        _ => format!("{base}/{lang}/sites/{id}"),
    })
}

/// Accepts `{id}`, `{id}-{slug}` or any path whose last `/sites/` segment
/// has that shape.
pub fn parse_entity_url(input: &str) -> DomainResult<EntityPath> {
    let segment = input
        .rsplit_once(SITES_SEGMENT)
        .map_or(input, |(_, tail)| tail);

    let (raw_id, slug) = match segment.split_once('-') {
        Some((raw_id, slug)) => (raw_id, Some(slug).filter(|s| !s.is_empty())),
        None => (segment, None),
    };

    let id = raw_id.parse::<i64>().map_err(|_| {
        DomainError::InvalidIdentifier(format!("`{segment}` does not start with a numeric id"))
    })?;

    Ok(EntityPath {
        id: MonumentId::new(id)?,
        slug: slug.map(str::to_string),
    })
}
