use super::MonumentQueryService;
use crate::application::{dto::MonumentListDto, error::ApplicationResult};

pub const DEFAULT_LIST_LIMIT: u32 = 20;
pub const MAX_LIST_LIMIT: u32 = 100;

pub struct ListMonumentsQuery {
    pub limit: u32,
}

impl Default for ListMonumentsQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIST_LIMIT,
        }
    }
}

impl MonumentQueryService {
    pub async fn list_monuments(
        &self,
        query: ListMonumentsQuery,
    ) -> ApplicationResult<MonumentListDto> {
        let limit = query.limit.clamp(1, MAX_LIST_LIMIT);
        let items = self
            .read_repo
            .list(limit)
            .await?
            .into_iter()
            .map(|monument| self.to_dto(monument))
            .collect::<ApplicationResult<Vec<_>>>()?;
        Ok(MonumentListDto { items })
    }
}
