//! Error types for the assistant bridge.

use thiserror::Error;

/// Failures from the generative backend.
///
/// These never reach the customer as-is: [`Assistant::ask`] logs the detail
/// and returns a fixed user-facing reply instead.
///
/// [`Assistant::ask`]: crate::assistant::Assistant::ask
#[derive(Debug, Error)]
pub enum AssistantError {
    /// No API credential is configured.
    #[error("missing API credential")]
    MissingCredential,

    /// The HTTP request to the generation service failed.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered, but not with usable text.
    #[error("unexpected response: {0}")]
    Api(String),
}
