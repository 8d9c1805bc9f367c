// src/presentation/http/openapi.rs
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::monuments::list_monuments,
        crate::presentation::http::controllers::monuments::get_monument,
        crate::presentation::http::controllers::monuments::create_monument,
        crate::presentation::http::controllers::monuments::update_monument,
        crate::presentation::http::controllers::monuments::delete_monument,
        crate::presentation::http::controllers::slugs::preview_slugs,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::monuments::CreateMonumentRequest,
            crate::presentation::http::controllers::monuments::UpdateMonumentRequest,
            crate::application::dto::MonumentDto,
            crate::application::dto::MonumentListDto,
            crate::application::dto::SlugPreviewDto
        )
    ),
    tags(
        (name = "Monuments", description = "Monument pages addressed by `{id}-{slug}`"),
        (name = "Slugs", description = "Slug generation helpers"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Heritage Portal API",
        description = "Monuments with bilingual SEO slugs",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}
