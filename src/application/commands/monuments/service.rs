// src/application/commands/monuments/service.rs
use std::sync::Arc;

use crate::{
    application::{dto::MonumentDto, error::ApplicationResult, ports::time::Clock},
    domain::{
        errors::{DomainError, DomainResult},
        monument::{
            Monument, MonumentId, MonumentName, MonumentReadRepository, MonumentSlug,
            MonumentSlugService, MonumentWriteRepository,
        },
        slug::SlugLang,
    },
};

#[derive(Debug, Clone)]
pub struct MonumentCommandSettings {
    /// Total tries for resolve-then-persist when a concurrent writer grabs
    /// the resolved slug first.
    pub persist_attempts: u32,
    pub public_base_url: Option<String>,
}

impl Default for MonumentCommandSettings {
    fn default() -> Self {
        Self {
            persist_attempts: 3,
            public_base_url: None,
        }
    }
}

pub struct MonumentCommandService {
    pub(super) write_repo: Arc<dyn MonumentWriteRepository>,
    pub(super) read_repo: Arc<dyn MonumentReadRepository>,
    pub(super) slug_service: Arc<MonumentSlugService>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) settings: MonumentCommandSettings,
}

impl MonumentCommandService {
    pub fn new(
        write_repo: Arc<dyn MonumentWriteRepository>,
        read_repo: Arc<dyn MonumentReadRepository>,
        slug_service: Arc<MonumentSlugService>,
        clock: Arc<dyn Clock>,
        settings: MonumentCommandSettings,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slug_service,
            clock,
            settings,
        }
    }

    /// Picks the slug base (a non-empty normalised override wins over the
    /// name) and resolves it against `lang`.
    pub(super) async fn resolve_slug(
        &self,
        lang: SlugLang,
        override_value: Option<&str>,
        name: Option<&MonumentName>,
        self_id: Option<MonumentId>,
    ) -> ApplicationResult<Option<MonumentSlug>> {
        let base = match self.normalized_override(override_value) {
            Some(base) => base,
            None => name
                .map(|name| self.slug_service.slug_for_name(lang, name.as_str()))
                .unwrap_or_default(),
        };
        Ok(self.slug_service.assign(base, lang, self_id).await?)
    }

    pub(super) fn normalized_override(&self, value: Option<&str>) -> Option<String> {
        value
            .map(|value| self.slug_service.normalize_override(value))
            .filter(|slug| !slug.is_empty())
    }

    pub(super) fn should_retry(&self, err: &DomainError, attempt: u32) -> bool {
        match err {
            DomainError::SlugConflict(lang) if attempt < self.settings.persist_attempts => {
                tracing::warn!(%lang, attempt, "slug taken by a concurrent write, resolving again");
                true
            }
            _ => false,
        }
    }

    pub(super) fn to_dto(&self, monument: Monument) -> ApplicationResult<MonumentDto> {
        MonumentDto::from_monument(monument, self.settings.public_base_url.as_deref())
    }
}

/// Blank optional names are treated as absent.
pub(super) fn optional_name(value: Option<String>) -> DomainResult<Option<MonumentName>> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(MonumentName::new)
        .transpose()
}

pub(super) fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
