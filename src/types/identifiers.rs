use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::item::parse::parse_number;
use crate::item::Item;
use crate::types::errors::InvalidInput;

/// A validated budget: positive and finite.
///
/// Budgets are supplied per optimization call and never stored with the
/// catalog.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Budget(f64);

impl Budget {
    pub fn new(amount: f64) -> Result<Self, InvalidInput> {
        if !amount.is_finite() {
            return Err(InvalidInput::NonFinite { field: "budget" });
        }
        if amount <= 0.0 {
            return Err(InvalidInput::NonPositiveBudget(amount));
        }
        Ok(Budget(amount))
    }

    /// Parse user-entered text, e.g. `" 250.00 "`.
    pub fn parse(text: &str) -> Result<Self, InvalidInput> {
        Self::new(parse_number("budget", text)?)
    }

    pub fn as_f64(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Budget {
    type Error = InvalidInput;

    fn try_from(amount: f64) -> Result<Self, Self::Error> {
        Budget::new(amount)
    }
}

impl From<Budget> for f64 {
    fn from(budget: Budget) -> f64 {
        budget.0
    }
}

/// Content fingerprint of an ordered catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogVersion(String);

impl CatalogVersion {
    /// One record per item, in catalog order: the name bytes, a NUL
    /// separator, then the big-endian IEEE-754 bits of price and value.
    pub fn from_items(items: &[Item]) -> Self {
        let mut hasher = Sha256::new();
        for item in items {
            hasher.update(item.name().as_bytes());
            hasher.update([0u8]);
            hasher.update(item.price().to_bits().to_be_bytes());
            hasher.update(item.value().to_bits().to_be_bytes());
        }

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        CatalogVersion(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
