//! Generic actor framework for resource management.
//!
//! This module provides the core building blocks for creating type-safe actor
//! systems that manage resource collections with lifecycle operations and
//! custom actions.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns a collection of entities
//! - [`ResourceClient`] - Type-safe handle for talking to an actor
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See the [`mock`] module for utilities to test clients without spawning
//! full actors.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use self::core::*;
