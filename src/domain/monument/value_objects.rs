use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::is_valid_slug;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct MonumentId(i64);

impl MonumentId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::InvalidIdentifier(format!(
                "monument id must be positive, got {id}"
            )))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<MonumentId> for i64 {
    fn from(value: MonumentId) -> Self {
        value.0
    }
}

impl fmt::Display for MonumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display name in one language, stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonumentName(String);

impl MonumentName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("name cannot be empty".into()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for MonumentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A slug that has been assigned to a monument. Always canonical and non-empty;
/// "no slug" is represented by `Option::None` at the entity level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonumentSlug(String);

impl MonumentSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if !is_valid_slug(&value) {
            return Err(DomainError::Validation(format!(
                "`{value}` is not a valid slug"
            )));
        }
        Ok(Self(value))
    }

    /// Lifts generator output, where `""` means no slug.
    pub fn from_generated(value: String) -> DomainResult<Option<Self>> {
        if value.is_empty() {
            Ok(None)
        } else {
            Self::new(value).map(Some)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for MonumentSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<MonumentSlug> for String {
    fn from(value: MonumentSlug) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_must_be_positive() {
        assert!(MonumentId::new(1).is_ok());
        assert!(matches!(
            MonumentId::new(0),
            Err(DomainError::InvalidIdentifier(_))
        ));
        assert!(matches!(
            MonumentId::new(-7),
            Err(DomainError::InvalidIdentifier(_))
        ));
    }

    #[test]
    fn name_is_trimmed_and_required() {
        assert_eq!(MonumentName::new("  Karnak ").unwrap().as_str(), "Karnak");
        assert!(MonumentName::new("   ").is_err());
    }

    #[test]
    fn slug_accepts_only_canonical_values() {
        assert!(MonumentSlug::new("temple-of-karnak").is_ok());
        assert!(MonumentSlug::new("Temple").is_err());
        assert!(MonumentSlug::new("").is_err());
    }

    #[test]
    fn empty_generator_output_means_no_slug() {
        assert!(MonumentSlug::from_generated(String::new()).unwrap().is_none());
        let slug = MonumentSlug::from_generated("x-2".into()).unwrap();
        assert_eq!(slug.unwrap().as_str(), "x-2");
    }
}
