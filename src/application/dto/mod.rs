pub mod monuments;

pub use monuments::{MonumentDto, MonumentListDto, SlugPreviewDto};
