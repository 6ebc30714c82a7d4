//! # Tracing Bootstrap
//!
//! One-call setup for structured logging across an actor system.
//!
//! Every actor logs with an `entity_type` field plus the entity id, so a
//! single `RUST_LOG` filter covers the whole system:
//!
//! ```bash
//! RUST_LOG=info cargo run     # lifecycle events
//! RUST_LOG=debug cargo run    # full request payloads
//! ```
//!
//! Payloads are recorded with the `?field` debug syntax at `debug!` level
//! only, so production logs stay compact.

/// Initializes the global tracing subscriber.
///
/// Call once at startup, before any actor is spawned. Respects `RUST_LOG`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type fields replace module paths
        .compact()
        .init();
}
