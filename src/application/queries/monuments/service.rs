use std::sync::Arc;

use crate::{
    application::{dto::MonumentDto, error::ApplicationResult},
    domain::monument::{Monument, MonumentReadRepository, MonumentSlugService},
};

pub struct MonumentQueryService {
    pub(super) read_repo: Arc<dyn MonumentReadRepository>,
    pub(super) slug_service: Arc<MonumentSlugService>,
    pub(super) public_base_url: Option<String>,
}

impl MonumentQueryService {
    pub fn new(
        read_repo: Arc<dyn MonumentReadRepository>,
        slug_service: Arc<MonumentSlugService>,
        public_base_url: Option<String>,
    ) -> Self {
        Self {
            read_repo,
            slug_service,
            public_base_url,
        }
    }

    pub(super) fn to_dto(&self, monument: Monument) -> ApplicationResult<MonumentDto> {
        MonumentDto::from_monument(monument, self.public_base_url.as_deref())
    }
}
