//! Error types for the menu actor.

use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuError {
    /// An error occurred while communicating with the actor system.
    #[error("Menu actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for MenuError {
    fn from(msg: String) -> Self {
        MenuError::ActorCommunicationError(msg)
    }
}
