pub mod entity;
pub mod repository;
pub mod services;
pub mod url;
pub mod value_objects;

pub use entity::{Monument, MonumentUpdate, NewMonument};
pub use repository::{MonumentReadRepository, MonumentWriteRepository};
pub use services::{MonumentSlugService, SlugPolicy};
pub use url::{EntityPath, build_entity_url, parse_entity_url};
pub use value_objects::{MonumentId, MonumentName, MonumentSlug};
