use crate::application::{dto::SlugPreviewDto, queries::monuments::PreviewSlugsQuery};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SlugPreviewParams {
    pub name_en: Option<String>,
    pub name_ar: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/slugs/preview",
    params(SlugPreviewParams),
    responses(
        (status = 200, description = "Generated slugs before uniqueness is applied.", body = SlugPreviewDto)
    ),
    tag = "Slugs"
)]
pub async fn preview_slugs(
    Extension(state): Extension<HttpState>,
    Query(params): Query<SlugPreviewParams>,
) -> Json<SlugPreviewDto> {
    Json(state.services.monument_queries.preview_slugs(PreviewSlugsQuery {
        name_en: params.name_en,
        name_ar: params.name_ar,
    }))
}
