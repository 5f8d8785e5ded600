pub mod catalog;

pub use catalog::Catalog;
pub use crate::types::identifiers::CatalogVersion;
