// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("resource not found: {0}")]
    NotFound(String),
}

impl ApplicationError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// A malformed id taken from a URL reads as a missing resource.
    pub fn from_route_identifier(err: DomainError, resource: &str) -> Self {
        match err {
            DomainError::InvalidIdentifier(_) => Self::not_found(format!("{resource} not found")),
            other => Self::Domain(other),
        }
    }
}
