//! Pure data structures for the shop domain.
//!
//! Entity types here implement [`ActorEntity`](crate::framework::ActorEntity)
//! in their respective actor modules; everything in `model` is plain data
//! with no channel or task plumbing.

pub mod cart;
pub mod chat;
pub mod menu_item;
pub mod order;

pub use cart::*;
pub use chat::*;
pub use menu_item::*;
pub use order::*;
