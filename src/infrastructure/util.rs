use crate::application::ports::util::Transliterator;
use deunicode::deunicode_with_tofu;

/// Table-driven transliteration backed by `deunicode`. Characters the table
/// does not know become a space so they act as word separators.
#[derive(Default, Clone)]
pub struct DeunicodeTransliterator;

impl Transliterator for DeunicodeTransliterator {
    fn transliterate(&self, input: &str) -> String {
        deunicode_with_tofu(input, " ")
    }
}
