use super::MonumentQueryService;
use crate::application::dto::SlugPreviewDto;

pub struct PreviewSlugsQuery {
    pub name_en: Option<String>,
    pub name_ar: Option<String>,
}

impl MonumentQueryService {
    /// Slugs the generator would derive for a name pair, before uniqueness.
    pub fn preview_slugs(&self, query: PreviewSlugsQuery) -> SlugPreviewDto {
        self.slug_service
            .generate_pair(query.name_en.as_deref(), query.name_ar.as_deref())
            .into()
    }
}
