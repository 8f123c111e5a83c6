//! The customer's transient cart.
//!
//! A [`Cart`] belongs to a single browsing session and never outlives it:
//! placing an order snapshots the lines into the order and empties the cart.

use serde::{Deserialize, Serialize};

use crate::model::MenuItem;

/// One line of a cart or of an order snapshot: an item plus a quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub item: MenuItem,
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> u32 {
        self.item.price * self.quantity
    }
}

/// Session-owned shopping cart.
///
/// Adding the same item id again increments the existing line's quantity
/// rather than appending a duplicate line. Lines keep insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `item`, merging with an existing line for the same id.
    pub fn add(&mut self, item: MenuItem) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.item.id == item.id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine { item, quantity: 1 });
        }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Sum of price × quantity over all lines.
    pub fn total(&self) -> u32 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}
