// src/domain/monument/services/mod.rs
use std::sync::Arc;

use crate::application::ports::util::Transliterator;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::monument::repository::MonumentReadRepository;
use crate::domain::monument::value_objects::{MonumentId, MonumentSlug};
use crate::domain::slug::{self, SlugLang, SlugPair};

/// Bounds the collision-suffix search in [`MonumentSlugService::ensure_unique_slug`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlugPolicy {
    max_suffix: u32,
}

impl SlugPolicy {
    pub const DEFAULT_MAX_SUFFIX: u32 = 1000;

    pub fn new(max_suffix: u32) -> DomainResult<Self> {
        if max_suffix < 2 {
            return Err(DomainError::Validation(
                "slug suffix limit must be at least 2".into(),
            ));
        }
        Ok(Self { max_suffix })
    }

    pub fn max_suffix(&self) -> u32 {
        self.max_suffix
    }
}

impl Default for SlugPolicy {
    fn default() -> Self {
        Self {
            max_suffix: Self::DEFAULT_MAX_SUFFIX,
        }
    }
}

/// Domain service producing per-language slugs that no other monument holds.
pub struct MonumentSlugService {
    read_repo: Arc<dyn MonumentReadRepository>,
    transliterator: Arc<dyn Transliterator>,
    policy: SlugPolicy,
}

impl MonumentSlugService {
    pub fn new(
        read_repo: Arc<dyn MonumentReadRepository>,
        transliterator: Arc<dyn Transliterator>,
        policy: SlugPolicy,
    ) -> Self {
        Self {
            read_repo,
            transliterator,
            policy,
        }
    }

    /// Slug candidate for a display name: English names go through the generic
    /// generator, Arabic names are always transliterated.
    pub fn slug_for_name(&self, lang: SlugLang, name: &str) -> String {
        match lang {
            SlugLang::En => slug::generate_slug(Some(name), self.transliterator.as_ref()),
            SlugLang::Ar => slug::generate_transliterated_slug(name, self.transliterator.as_ref()),
        }
    }

    /// Caller-supplied slugs are normalised the same way generated ones are.
    pub fn normalize_override(&self, value: &str) -> String {
        slug::generate_slug(Some(value), self.transliterator.as_ref())
    }

    pub fn generate_pair(&self, name_en: Option<&str>, name_ar: Option<&str>) -> SlugPair {
        slug::generate_monument_slugs(name_en, name_ar, self.transliterator.as_ref())
    }

    /// Returns `base` when free in `lang`, otherwise the first free
    /// `{base}-{n}` for `n` counting up from 2. `self_id` is never treated as
    /// a collision. The empty slug is exempt and returned without a lookup.
    ///
    /// Read-only; the caller persists the result. Two callers racing on the
    /// same base can both get the same answer, so writers must rely on the
    /// store's unique index.
    pub async fn ensure_unique_slug(
        &self,
        base: &str,
        lang: SlugLang,
        self_id: Option<MonumentId>,
    ) -> DomainResult<String> {
        if base.is_empty() {
            return Ok(String::new());
        }

        if self
            .read_repo
            .find_slug_holder(lang, base, self_id)
            .await?
            .is_none()
        {
            return Ok(base.to_string());
        }

        for counter in 2..=self.policy.max_suffix {
            let candidate = format!("{base}-{counter}");
            match self
                .read_repo
                .find_slug_holder(lang, &candidate, self_id)
                .await?
            {
                None => return Ok(candidate),
                Some(holder) => {
                    tracing::debug!(%lang, %candidate, %holder, "slug candidate taken");
                }
            }
        }

        tracing::warn!(
            %lang,
            base,
            max_suffix = self.policy.max_suffix,
            "slug suffix space exhausted"
        );
        Err(DomainError::SlugExhausted {
            base: base.to_string(),
            lang,
        })
    }

    /// [`Self::ensure_unique_slug`] lifted into the entity's slug type.
    pub async fn assign(
        &self,
        base: String,
        lang: SlugLang,
        self_id: Option<MonumentId>,
    ) -> DomainResult<Option<MonumentSlug>> {
        let unique = self.ensure_unique_slug(&base, lang, self_id).await?;
        MonumentSlug::from_generated(unique)
    }
}
