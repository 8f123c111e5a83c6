//! # Smart Queue
//!
//! > An in-memory ordering and queue system for a small tea house, built on
//! > resource-oriented actors.
//!
//! The shop's shared state — the catalog and the placed orders — lives in
//! Tokio actors that each own their store exclusively and process messages
//! sequentially, so there are no locks and no persistence layer. Everything
//! is rebuilt from the seeded defaults on restart.
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic `ResourceActor<T>` that powers both stores.
//! - **Role**: Separates business logic (the entity) from plumbing
//!   (channels, message loop, error mapping).
//! - **Key items**: [`ActorEntity`](framework::ActorEntity),
//!   [`ResourceActor`](framework::ResourceActor).
//!
//! ### 2. The Domain ([`model`], [`menu_actor`], [`order_actor`])
//! Plain data types plus their `ActorEntity` implementations.
//! - **Catalog**: [`MenuItem`](model::MenuItem) — merchant add/remove,
//!   public listing, no in-place edits.
//! - **Orders**: [`Order`](model::Order) — placed from a
//!   [`Cart`](model::Cart) snapshot, identified by its queue ticket
//!   (`A001`, `A002`, …), advanced through
//!   [`OrderStatus`](model::OrderStatus) by merchant actions only.
//!
//! ### 3. The Interface ([`clients`])
//! Domain-specific clients wrapping the generic `ResourceClient`.
//! - **Key items**: [`MenuClient`](clients::MenuClient),
//!   [`OrderClient`](clients::OrderClient) (place / advance / reset /
//!   status views).
//!
//! ### 4. The Edges ([`assistant`], [`merchant`], [`config`], [`lifecycle`])
//! The assistant bridge relays customer questions plus the current menu to
//! an external text-generation service and never leaks backend errors to
//! the user. The merchant gate turns a passcode into a session
//! [`Role`](merchant::Role). [`ShopSystem`](lifecycle::ShopSystem) spawns
//! and wires everything.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info MERCHANT_PASSCODE=907264 cargo run
//! ```
//!
//! Set `API_KEY` to enable the assistant; without it the chat surface
//! answers with a fixed "not configured" reply.

pub mod assistant;
pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod menu_actor;
pub mod merchant;
pub mod model;
pub mod order_actor;
