//! Orders and the status lifecycle.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::model::CartLine;

/// Shown in place of a blank customer name.
pub const DEFAULT_CUSTOMER_NAME: &str = "Guest";

/// Lifecycle of an order, advanced only by merchant action.
///
/// ```text
/// Pending   -> Preparing | Cancelled
/// Preparing -> Ready
/// Ready     -> Completed
/// ```
///
/// `Completed` and `Cancelled` are terminal. Customers can only read the
/// status; no transition moves an order backward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Preparing,
    Ready,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// True exactly for the forward edges of the lifecycle above.
    pub fn can_advance_to(self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        matches!(
            (self, next),
            (Pending, Preparing) | (Pending, Cancelled) | (Preparing, Ready) | (Ready, Completed)
        )
    }

    /// Terminal orders drop out of the merchant's active view but stay in
    /// the order history until a reset.
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }
}

/// A placed order.
///
/// The queue ticket (`A001`, `A002`, …) doubles as the entity id. The line
/// snapshot and total are fixed at placement time; later catalog edits never
/// reach into a placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Human-facing queue ticket, also the entity id.
    pub ticket: String,
    pub customer_name: String,
    pub lines: Vec<CartLine>,
    pub total: u32,
    pub status: OrderStatus,
    /// Unix seconds at placement; display only, never used in logic.
    pub created_at: u64,
}

impl Order {
    /// Builds a pending order from a cart snapshot, computing the total and
    /// substituting [`DEFAULT_CUSTOMER_NAME`] for a blank name.
    pub fn new(ticket: impl Into<String>, customer_name: &str, lines: Vec<CartLine>) -> Self {
        let name = customer_name.trim();
        let total = lines.iter().map(CartLine::line_total).sum();
        Self {
            ticket: ticket.into(),
            customer_name: if name.is_empty() {
                DEFAULT_CUSTOMER_NAME.to_string()
            } else {
                name.to_string()
            },
            lines,
            total,
            status: OrderStatus::Pending,
            created_at: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0),
        }
    }
}

/// Payload for placing an order (DTO).
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub customer_name: String,
    pub lines: Vec<CartLine>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, MenuItem};

    #[test]
    fn transition_table_matches_lifecycle() {
        use OrderStatus::*;
        let all = [Pending, Preparing, Ready, Completed, Cancelled];

        let allowed = [
            (Pending, Preparing),
            (Pending, Cancelled),
            (Preparing, Ready),
            (Ready, Completed),
        ];
        for from in all {
            for to in all {
                assert_eq!(
                    from.can_advance_to(to),
                    allowed.contains(&(from, to)),
                    "{from:?} -> {to:?}"
                );
            }
        }
    }

    #[test]
    fn only_completed_and_cancelled_are_terminal() {
        assert!(OrderStatus::Completed.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
        assert!(!OrderStatus::Pending.is_terminal());
        assert!(!OrderStatus::Preparing.is_terminal());
        assert!(!OrderStatus::Ready.is_terminal());
    }

    #[test]
    fn new_order_is_pending_with_computed_total() {
        let lines = vec![
            CartLine {
                item: MenuItem::new("item_1", "Tea", 45, Category::Drink, ""),
                quantity: 2,
            },
            CartLine {
                item: MenuItem::new("item_2", "Noodles", 120, Category::Food, ""),
                quantity: 1,
            },
        ];
        let order = Order::new("A001", "Som", lines);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.total, 210);
        assert_eq!(order.customer_name, "Som");
    }

    #[test]
    fn blank_name_gets_placeholder() {
        let order = Order::new("A001", "   ", vec![]);
        assert_eq!(order.customer_name, DEFAULT_CUSTOMER_NAME);
    }
}
