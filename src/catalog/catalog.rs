use serde::{Deserialize, Serialize};

use crate::item::Item;
use crate::types::errors::InvalidInput;
use crate::types::identifiers::CatalogVersion;

/// Ordered item catalog.
///
/// Insertion order is the reference order: solver results index back into
/// it. Duplicate names are allowed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog { items: Vec::new() }
    }

    /// Append an item, returning its index.
    pub fn add(&mut self, item: Item) -> usize {
        self.items.push(item);
        self.items.len() - 1
    }

    /// Validate raw form text and append the resulting item.
    /// On error the catalog is unchanged.
    pub fn add_parsed(
        &mut self,
        name: &str,
        price_text: &str,
        value_text: &str,
    ) -> Result<usize, InvalidInput> {
        let item = Item::parse(name, price_text, value_text)?;
        Ok(self.add(item))
    }

    /// Remove the whole item at `index`. Later items shift down by one.
    pub fn remove(&mut self, index: usize) -> Result<Item, InvalidInput> {
        if index >= self.items.len() {
            return Err(InvalidInput::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn version(&self) -> CatalogVersion {
        CatalogVersion::from_items(&self.items)
    }

    /// Load a catalog from a JSON array of `{name, price, value}` objects.
    /// Every item is validated; one bad entry rejects the whole document.
    pub fn from_json_str(json: &str) -> Result<Self, InvalidInput> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_string(&self) -> Result<String, InvalidInput> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl FromIterator<Item> for Catalog {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Catalog {
            items: iter.into_iter().collect(),
        }
    }
}
