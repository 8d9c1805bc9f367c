use crate::domain::errors::DomainResult;
use crate::domain::monument::entity::{Monument, MonumentUpdate, NewMonument};
use crate::domain::monument::value_objects::MonumentId;
use crate::domain::slug::SlugLang;
use async_trait::async_trait;

/// Writes must reject a slug already held in the same namespace with
/// `DomainError::SlugConflict`.
#[async_trait]
pub trait MonumentWriteRepository: Send + Sync {
    async fn insert(&self, monument: NewMonument) -> DomainResult<Monument>;
    async fn update(&self, update: MonumentUpdate) -> DomainResult<Monument>;
    async fn delete(&self, id: MonumentId) -> DomainResult<()>;
}

#[async_trait]
pub trait MonumentReadRepository: Send + Sync {
    async fn find_by_id(&self, id: MonumentId) -> DomainResult<Option<Monument>>;

    /// First monument other than `exclude` whose `lang` slug equals `slug`.
    async fn find_slug_holder(
        &self,
        lang: SlugLang,
        slug: &str,
        exclude: Option<MonumentId>,
    ) -> DomainResult<Option<MonumentId>>;

    async fn list(&self, limit: u32) -> DomainResult<Vec<Monument>>;
}
