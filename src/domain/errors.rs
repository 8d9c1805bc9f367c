// src/domain/errors.rs
use crate::domain::slug::SlugLang;
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),
    #[error("slug already held in the {0} namespace")]
    SlugConflict(SlugLang),
    #[error("no free slug derived from `{base}` in the {lang} namespace")]
    SlugExhausted { base: String, lang: SlugLang },
}
