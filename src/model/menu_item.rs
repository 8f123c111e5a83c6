//! Menu item types for the catalog.

use serde::{Deserialize, Serialize};

/// Broad grouping used by the menu views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Drink,
}

/// A purchasable item in the catalog.
///
/// Prices are whole currency units (the shop does not price in satang).
/// Items are never edited in place; a change is a delete plus a recreate,
/// so placed orders keep their own snapshots untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub price: u32,
    pub category: Category,
    pub description: String,
}

impl MenuItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: u32,
        category: Category,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            category,
            description: description.into(),
        }
    }
}

/// Payload for adding a catalog item (DTO).
///
/// Blank names are accepted; the merchant panel does not validate input
/// beyond what the types enforce.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub name: String,
    pub price: u32,
    pub category: Category,
    pub description: String,
}
