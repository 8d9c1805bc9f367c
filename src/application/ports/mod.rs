// src/application/ports/mod.rs
pub mod time;
pub mod util;

// Shorthand for the trait objects handed to the service container.
pub type ClockPort = dyn time::Clock;
pub type TransliteratorPort = dyn util::Transliterator;
