use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::errors::DomainError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            ApplicationError::Domain(domain_err) => Self::from_domain(domain_err),
        }
    }

    fn from_domain(err: DomainError) -> Self {
        let message = err.to_string();
        match err {
            DomainError::Validation(_) => Self::new(StatusCode::BAD_REQUEST, message),
            DomainError::NotFound(_) | DomainError::InvalidIdentifier(_) => {
                Self::new(StatusCode::NOT_FOUND, message)
            }
            DomainError::Conflict(_) | DomainError::SlugConflict(_) => {
                Self::new(StatusCode::CONFLICT, message)
            }
            DomainError::SlugExhausted { .. } => {
                tracing::error!(error = %message, "slug assignment gave up");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
            }
            DomainError::Persistence(_) => {
                tracing::error!(error = %message, "persistence failure");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".into(),
                )
            }
        }
    }

    fn new(status: StatusCode, message: String) -> Self {
        Self { status, message }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorResponse {
            error: self
                .status
                .canonical_reason()
                .unwrap_or("error")
                .to_string(),
            message: self.message,
        };
        (self.status, Json(payload)).into_response()
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
