// src/presentation/http/controllers/mod.rs
pub mod monuments;
pub mod slugs;
