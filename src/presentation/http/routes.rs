// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{monuments, slugs},
    openapi::{self, StatusResponse},
};
use axum::{Extension, Router, http::Method, routing::get};
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health))
        .route("/openapi.json", get(openapi::serve_openapi))
        .route(
            "/api/v1/monuments",
            get(monuments::list_monuments).post(monuments::create_monument),
        )
        .route(
            "/api/v1/monuments/{path}",
            get(monuments::get_monument)
                .put(monuments::update_monument)
                .delete(monuments::delete_monument),
        )
        .route("/api/v1/slugs/preview", get(slugs::preview_slugs))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
