pub mod cache;
pub mod service;

pub use cache::{CatalogCache, CatalogOrigin, CatalogSnapshot};
pub use service::CatalogService;
