// tests/support/mocks/util.rs
use heritage_core::application::ports::util::Transliterator;

/// Known Arabic names map to fixed Latin spellings; anything else keeps only
/// its ASCII characters.
pub struct StubTransliterator;

impl Transliterator for StubTransliterator {
    fn transliterate(&self, input: &str) -> String {
        match input {
            "قلعة المصمك" => "Qalat al-Masmak".into(),
            "مدائن صالح" => "Madain Salih".into(),
            "الدرعية" => "Ad-Diriyah".into(),
            other => other.chars().filter(char::is_ascii).collect(),
        }
    }
}
