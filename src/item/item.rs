use serde::{Deserialize, Serialize};

use super::parse::parse_number;
use crate::types::errors::InvalidInput;

/// A purchasable item.
///
/// Fields are private so that every `Item` in existence satisfies
/// `!name.is_empty() && price > 0 && value > 0`, including ones that come
/// in through deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawItem")]
pub struct Item {
    name: String,
    price: f64,
    value: f64,
}

impl Item {
    /// Validate and construct an item.
    ///
    /// The name is trimmed before the emptiness check and stored trimmed.
    pub fn new(name: impl Into<String>, price: f64, value: f64) -> Result<Self, InvalidInput> {
        let name = name.into();
        let name = name.trim();
        if name.is_empty() {
            return Err(InvalidInput::EmptyName);
        }

        if !price.is_finite() {
            return Err(InvalidInput::NonFinite { field: "price" });
        }
        if price <= 0.0 {
            return Err(InvalidInput::NonPositivePrice(price));
        }

        if !value.is_finite() {
            return Err(InvalidInput::NonFinite { field: "value" });
        }
        if value <= 0.0 {
            return Err(InvalidInput::NonPositiveValue(value));
        }

        Ok(Item {
            name: name.to_string(),
            price,
            value,
        })
    }

    /// Construct an item from raw form text.
    pub fn parse(name: &str, price_text: &str, value_text: &str) -> Result<Self, InvalidInput> {
        if name.trim().is_empty() {
            return Err(InvalidInput::EmptyName);
        }
        let price = parse_number("price", price_text)?;
        let value = parse_number("value", value_text)?;
        Self::new(name, price, value)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Value per unit of price. Derived, never stored.
    pub fn ratio(&self) -> f64 {
        self.value / self.price
    }
}

#[derive(Deserialize)]
struct RawItem {
    name: String,
    price: f64,
    value: f64,
}

impl TryFrom<RawItem> for Item {
    type Error = InvalidInput;

    fn try_from(raw: RawItem) -> Result<Self, Self::Error> {
        Item::new(raw.name, raw.price, raw.value)
    }
}
