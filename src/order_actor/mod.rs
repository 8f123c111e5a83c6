//! Orders resource: the order actor, queue tickets, and status actions.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::OrderClient;
use crate::framework::ResourceActor;
use crate::model::Order;

/// Creates a new order actor and its client.
///
/// Order ids are the human-facing queue tickets: `A` plus the zero-padded
/// sequence value (`A001`, `A002`, …). The sequence starts at 1 and is
/// rewound only by a shop-wide reset, so tickets are unique and strictly
/// increasing within a process lifetime.
pub fn new() -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(32, |seq| format!("A{seq:03}"));
    let client = OrderClient::new(generic_client);

    (actor, client)
}
