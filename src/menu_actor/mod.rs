//! Catalog resource: the menu actor and its client factory.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::MenuClient;
use crate::framework::ResourceActor;
use crate::model::MenuItem;

/// Creates a new menu actor and its client.
///
/// Item ids follow the actor's sequence (`item_1`, `item_2`, …).
pub fn new() -> (ResourceActor<MenuItem>, MenuClient) {
    let (actor, generic_client) = ResourceActor::new(32, |seq| format!("item_{seq}"));
    let client = MenuClient::new(generic_client);

    (actor, client)
}
