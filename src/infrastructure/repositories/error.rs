use crate::domain::{errors::DomainError, slug::SlugLang};

// SQLite reports unique violations as "UNIQUE constraint failed: <table>.<column>".
const COL_MONUMENT_SLUG_EN: &str = "monuments.slug_en";
const COL_MONUMENT_SLUG_AR: &str = "monuments.slug_ar";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            let message = db_err.message();

            if db_err.is_unique_violation() {
                return if message.contains(COL_MONUMENT_SLUG_EN) {
                    DomainError::SlugConflict(SlugLang::En)
                } else if message.contains(COL_MONUMENT_SLUG_AR) {
                    DomainError::SlugConflict(SlugLang::Ar)
                } else {
                    DomainError::Conflict("unique constraint violated".into())
                };
            }

            if db_err.is_foreign_key_violation() {
                return DomainError::NotFound("referenced record not found".into());
            }

            if db_err.is_check_violation() {
                return DomainError::Validation("check constraint violated".into());
            }

            DomainError::Persistence(message.to_string())
        }
        sqlx::Error::RowNotFound => DomainError::NotFound("record not found".into()),
        _ => DomainError::Persistence(err.to_string()),
    }
}
