//! Conversational assistant bridge.
//!
//! A stateless relay from a customer question plus the current catalog to an
//! external text-generation call. Every call is independent: the bridge sends
//! only the current question, and the running transcript lives with the
//! caller (see [`Transcript`](crate::model::Transcript)).
//!
//! Failures never leak backend detail to the customer. A missing credential
//! yields a fixed "not configured" reply; any backend error is logged with
//! its detail and answered with a generic apology.

pub mod backend;
pub mod error;

pub use backend::*;
pub use error::*;

use tracing::{debug, error};

use crate::config::Config;
use crate::model::MenuItem;

/// Fixed reply when no API credential is configured.
pub const MISSING_CREDENTIAL_REPLY: &str =
    "Sorry, the assistant is not set up on this system. Please ask our staff directly.";

/// Fixed reply when the backend call fails for any reason.
pub const UNAVAILABLE_REPLY: &str =
    "Sorry, the assistant is having trouble right now. Please try again or ask our staff.";

const ROLE_INSTRUCTION: &str = "You are a friendly staff member of the Baan Hom Cha tea house. \
    Answer the customer's question politely, using the menu below.";

/// The assistant bridge. Holds an optional backend; `None` means the
/// feature is unconfigured and every question gets the fixed reply.
pub struct Assistant {
    backend: Option<Box<dyn GenerativeBackend>>,
}

impl Assistant {
    /// Builds the production assistant from configuration. Without an API
    /// key the assistant is created in its unconfigured state rather than
    /// failing.
    pub fn from_config(config: &Config) -> Self {
        let backend = config.api_key.as_ref().map(|key| {
            Box::new(GeminiBackend::new(key.clone(), config.assistant_model.clone()))
                as Box<dyn GenerativeBackend>
        });
        Self { backend }
    }

    /// Builds an assistant over an explicit backend (used by tests).
    pub fn with_backend(backend: Box<dyn GenerativeBackend>) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    /// Answers a customer question against the current catalog.
    ///
    /// Always returns displayable text; see the module docs for the
    /// fallback behavior.
    pub async fn ask(&self, question: &str, menu: &[MenuItem]) -> String {
        let Some(backend) = &self.backend else {
            debug!("assistant not configured, returning fixed reply");
            return MISSING_CREDENTIAL_REPLY.to_string();
        };

        let prompt = build_prompt(menu, question);
        match backend.generate(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                // Detail goes to the log only; the customer sees the
                // generic apology.
                error!(error = %e, "assistant backend call failed");
                UNAVAILABLE_REPLY.to_string()
            }
        }
    }
}

/// Role instruction + serialized menu + the customer's question, as one
/// plain-text prompt.
fn build_prompt(menu: &[MenuItem], question: &str) -> String {
    let menu_json = serde_json::to_string(menu).unwrap_or_else(|_| "[]".to_string());
    format!("{ROLE_INSTRUCTION}\nMenu: {menu_json}\nCustomer asks: {question}")
}
