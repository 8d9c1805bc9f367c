// src/application/ports/util.rs

/// Deterministic, locale-free mapping from any script to Latin/ASCII text.
pub trait Transliterator: Send + Sync {
    fn transliterate(&self, input: &str) -> String;
}
