// src/application/commands/monuments/mod.rs
mod create;
mod delete;
mod service;
mod update;

pub use create::{CreateMonumentCommand, CreateMonumentCommandBuilder};
pub use delete::DeleteMonumentCommand;
pub use service::{MonumentCommandService, MonumentCommandSettings};
pub use update::UpdateMonumentCommand;
