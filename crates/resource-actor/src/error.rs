//! # Framework Errors
//!
//! Common error types shared by every actor and client in the framework.
//! Centralizing them keeps the failure surface identical across resources.

/// Errors raised by the framework plumbing itself.
///
/// Domain-level failures travel inside [`FrameworkError::EntityError`] as a
/// boxed `std::error::Error`. Typed clients are expected to downcast that box
/// back to their own error enum (see `ActorClient::map_error` implementors),
/// so callers never pattern-match on strings.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
