mod get_by_path;
mod list;
mod preview;
mod service;

pub use get_by_path::GetMonumentByPathQuery;
pub use list::ListMonumentsQuery;
pub use preview::PreviewSlugsQuery;
pub use service::MonumentQueryService;
