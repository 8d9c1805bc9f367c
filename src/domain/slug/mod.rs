mod generator;
mod lang;

pub use generator::{
    SlugPair, generate_latin_slug, generate_monument_slugs, generate_slug,
    generate_transliterated_slug, is_valid_slug,
};
pub use lang::SlugLang;
