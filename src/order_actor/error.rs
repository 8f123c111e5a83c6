//! Error types for the order actor.

use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// No order with the given ticket exists.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The requested status change is not a forward edge of the lifecycle.
    /// The order's status is left unchanged.
    #[error("Invalid status transition: {0}")]
    InvalidTransition(String),

    /// An error occurred while communicating with the actor system.
    #[error("Order actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}
