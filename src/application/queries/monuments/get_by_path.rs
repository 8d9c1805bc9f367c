use super::MonumentQueryService;
use crate::{
    application::{
        dto::MonumentDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{monument::parse_entity_url, slug::SlugLang},
};

/// `path` is `{id}`, `{id}-{slug}` or a full `/…/sites/{id}-{slug}` path.
pub struct GetMonumentByPathQuery {
    pub path: String,
}

impl MonumentQueryService {
    /// Resolves by id alone. A stale or foreign slug in the path still
    /// returns the monument the id names.
    pub async fn get_monument_by_path(
        &self,
        query: GetMonumentByPathQuery,
    ) -> ApplicationResult<MonumentDto> {
        let path = parse_entity_url(&query.path)
            .map_err(|err| ApplicationError::from_route_identifier(err, "monument"))?;

        let monument = self
            .read_repo
            .find_by_id(path.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("monument not found"))?;

        if let Some(requested) = path.slug.as_deref() {
            let current = SlugLang::ALL
                .iter()
                .any(|lang| monument.slug(*lang).is_some_and(|s| s.as_str() == requested));
            if !current {
                tracing::debug!(id = %path.id, requested, "serving monument for outdated slug");
            }
        }

        self.to_dto(monument)
    }
}
