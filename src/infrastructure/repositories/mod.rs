// src/infrastructure/repositories/mod.rs
mod error;
mod sqlite_monument;

pub use sqlite_monument::{SqliteMonumentReadRepository, SqliteMonumentWriteRepository};
