//! Pure slug derivation from display names.
//!
//! Every entry point ends in the same normalisation: lowercase, trim, drop
//! anything that is not `[a-z0-9_]`, whitespace or a hyphen, fold separator
//! runs into one hyphen and trim hyphens from both ends. The result is either
//! empty or matches `^[a-z0-9]+(-[a-z0-9]+)*$`.

use crate::application::ports::util::Transliterator;
use regex::Regex;
use std::sync::LazyLock;

static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9_\s-]").expect("static slug pattern"));
static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_-]+").expect("static separator pattern"));

/// Slugs derived from an (English, Arabic) name pair. Empty means "no slug".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlugPair {
    pub en: String,
    pub ar: String,
}

/// Generic entry point: transliterates when the text carries non-ASCII
/// characters, otherwise normalises directly. `None` and `""` give `""`.
pub fn generate_slug(text: Option<&str>, transliterator: &dyn Transliterator) -> String {
    match text {
        Some(text) if text.is_ascii() => generate_latin_slug(text),
        Some(text) => generate_transliterated_slug(text, transliterator),
        None => String::new(),
    }
}

/// For text already in Latin script. Characters outside ASCII are dropped.
pub fn generate_latin_slug(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    normalize(text)
}

/// For text in another script (Arabic names); transliterates before normalising.
pub fn generate_transliterated_slug(text: &str, transliterator: &dyn Transliterator) -> String {
    if text.is_empty() {
        return String::new();
    }
    normalize(&transliterator.transliterate(text))
}

pub fn generate_monument_slugs(
    name_en: Option<&str>,
    name_ar: Option<&str>,
    transliterator: &dyn Transliterator,
) -> SlugPair {
    SlugPair {
        en: generate_slug(name_en, transliterator),
        ar: name_ar
            .map(|name| generate_transliterated_slug(name, transliterator))
            .unwrap_or_default(),
    }
}

/// True when `value` is a non-empty slug in canonical form.
pub fn is_valid_slug(value: &str) -> bool {
    !value.is_empty()
        && !value.starts_with('-')
        && !value.ends_with('-')
        && !value.contains("--")
        && value
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = DISALLOWED.replace_all(lowered.trim(), "");
    let collapsed = SEPARATORS.replace_all(&stripped, "-");
    collapsed.trim_matches('-').to_string()
}
