//! # Observability & Tracing
//!
//! Structured logging for the whole system via the `tracing` crate.
//!
//! Client operations carry `#[instrument]` spans, actors log entity
//! lifecycle events with structured fields (`entity_type`, `%id`, store
//! size), and the assistant bridge logs backend failure detail that is
//! deliberately kept out of user-facing replies.
//!
//! ## Usage
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show full payloads with debug logs
//! RUST_LOG=debug cargo run
//!
//! # Filter to specific modules
//! RUST_LOG=smart_queue::framework=debug cargo run
//! ```

/// Installs the subscriber: env-filtered, compact, no module targets
/// (actors record `entity_type` instead).
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
