//! Custom actions for the order actor.
//!
//! Status changes go through actions rather than a generic update so the
//! transition rules live with the [`Order`](crate::model::Order) entity.

use crate::model::OrderStatus;

/// Merchant-side operations on a placed order.
#[derive(Debug, Clone, Copy)]
pub enum OrderAction {
    /// Move the order to `target` along a forward edge of the lifecycle.
    ///
    /// Rejected (status unchanged) if the edge is not in the transition
    /// table, e.g. trying to complete an order that was never prepared.
    Advance(OrderStatus),
}

/// Results from OrderActions - variants match 1:1 with OrderAction.
#[derive(Debug, Clone, Copy)]
pub enum OrderActionResult {
    /// The order now holds the given status.
    Advanced(OrderStatus),
}
