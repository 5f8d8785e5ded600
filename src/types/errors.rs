use thiserror::Error;

/// Every failure in this crate is a rejected input. None are fatal, and a
/// failed operation leaves any catalog it touched exactly as it was.
#[derive(Debug, Error)]
pub enum InvalidInput {
    #[error("Budget must be a positive number, got {0}")]
    NonPositiveBudget(f64),

    #[error("Catalog is empty")]
    EmptyCatalog,

    #[error("Item name must not be empty")]
    EmptyName,

    #[error("Price must be a positive number, got {0}")]
    NonPositivePrice(f64),

    #[error("Value must be a positive number, got {0}")]
    NonPositiveValue(f64),

    #[error("{field} is not a valid number: {text:?}")]
    NotANumber { field: &'static str, text: String },

    #[error("{field} must be finite")]
    NonFinite { field: &'static str },

    #[error("Item index {index} out of range for catalog of {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Capacity unit must be a positive number, got {0}")]
    InvalidUnitSize(f64),

    #[error("DP table of {cells} cells exceeds the limit of {limit}")]
    TableTooLarge { cells: u128, limit: usize },

    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
