// src/presentation/http/controllers/monuments.rs
use crate::application::{
    commands::monuments::{CreateMonumentCommand, DeleteMonumentCommand, UpdateMonumentCommand},
    dto::{MonumentDto, MonumentListDto},
    error::ApplicationError,
    queries::monuments::{GetMonumentByPathQuery, ListMonumentsQuery},
};
use crate::domain::monument::parse_entity_url;
use crate::presentation::http::error::{ErrorResponse, HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MonumentListParams {
    /// Page size, clamped to 1..=100. Omitted means the query default.
    pub limit: Option<u32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateMonumentRequest {
    pub name_en: String,
    #[serde(default)]
    pub name_ar: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Explicit English slug; normalised and de-duplicated.
    #[serde(default)]
    pub slug_en: Option<String>,
    /// Explicit Arabic-page slug; normalised and de-duplicated.
    #[serde(default)]
    pub slug_ar: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateMonumentRequest {
    pub name_en: Option<String>,
    pub name_ar: Option<String>,
    pub description: Option<String>,
    pub slug_en: Option<String>,
    pub slug_ar: Option<String>,
}

/// Accepts `{id}` or `{id}-{slug}`; anything else is a missing monument.
fn route_id(raw: &str) -> HttpResult<i64> {
    parse_entity_url(raw)
        .map(|path| i64::from(path.id))
        .map_err(|err| HttpError::from_error(ApplicationError::from_route_identifier(err, "monument")))
}

#[utoipa::path(
    get,
    path = "/api/v1/monuments",
    params(MonumentListParams),
    responses(
        (status = 200, description = "Monuments ordered by id.", body = MonumentListDto)
    ),
    tag = "Monuments"
)]
pub async fn list_monuments(
    Extension(state): Extension<HttpState>,
    Query(params): Query<MonumentListParams>,
) -> HttpResult<Json<MonumentListDto>> {
    state
        .services
        .monument_queries
        .list_monuments(
            params
                .limit
                .map_or_else(ListMonumentsQuery::default, |limit| ListMonumentsQuery { limit }),
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/monuments/{path}",
    params(
        ("path" = String, Path, description = "`{id}` or `{id}-{slug}`; the slug is ignored for lookup.")
    ),
    responses(
        (status = 200, description = "Monument named by the id.", body = MonumentDto),
        (status = 404, description = "Unknown or malformed id.", body = ErrorResponse)
    ),
    tag = "Monuments"
)]
pub async fn get_monument(
    Extension(state): Extension<HttpState>,
    Path(path): Path<String>,
) -> HttpResult<Json<MonumentDto>> {
    state
        .services
        .monument_queries
        .get_monument_by_path(GetMonumentByPathQuery { path })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/monuments",
    request_body = CreateMonumentRequest,
    responses(
        (status = 201, description = "Monument created with unique slugs.", body = MonumentDto),
        (status = 400, description = "Invalid names.", body = ErrorResponse),
        (status = 409, description = "Slug lost to concurrent writers.", body = ErrorResponse)
    ),
    tag = "Monuments"
)]
pub async fn create_monument(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateMonumentRequest>,
) -> HttpResult<(StatusCode, Json<MonumentDto>)> {
    let command = CreateMonumentCommand {
        name_en: payload.name_en,
        name_ar: payload.name_ar,
        description: payload.description,
        slug_en: payload.slug_en,
        slug_ar: payload.slug_ar,
    };

    let created = state
        .services
        .monument_commands
        .create_monument(command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/api/v1/monuments/{path}",
    params(
        ("path" = String, Path, description = "`{id}` or `{id}-{slug}`.")
    ),
    request_body = UpdateMonumentRequest,
    responses(
        (status = 200, description = "Updated monument.", body = MonumentDto),
        (status = 404, description = "Unknown or malformed id.", body = ErrorResponse),
        (status = 409, description = "Slug lost to concurrent writers.", body = ErrorResponse)
    ),
    tag = "Monuments"
)]
pub async fn update_monument(
    Extension(state): Extension<HttpState>,
    Path(path): Path<String>,
    Json(payload): Json<UpdateMonumentRequest>,
) -> HttpResult<Json<MonumentDto>> {
    let command = UpdateMonumentCommand {
        id: route_id(&path)?,
        name_en: payload.name_en,
        name_ar: payload.name_ar,
        description: payload.description,
        slug_en: payload.slug_en,
        slug_ar: payload.slug_ar,
    };

    state
        .services
        .monument_commands
        .update_monument(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/monuments/{path}",
    params(
        ("path" = String, Path, description = "`{id}` or `{id}-{slug}`.")
    ),
    responses(
        (status = 204, description = "Monument removed."),
        (status = 404, description = "Unknown or malformed id.", body = ErrorResponse)
    ),
    tag = "Monuments"
)]
pub async fn delete_monument(
    Extension(state): Extension<HttpState>,
    Path(path): Path<String>,
) -> HttpResult<StatusCode> {
    let command = DeleteMonumentCommand {
        id: route_id(&path)?,
    };

    state
        .services
        .monument_commands
        .delete_monument(command)
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
