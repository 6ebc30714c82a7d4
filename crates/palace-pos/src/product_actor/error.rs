//! Error types for the Product actor.

use crate::model::PizzaSize;
use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(String),

    /// The product exists but is currently hidden from ordering.
    #[error("Product unavailable: {0}")]
    Unavailable(String),

    /// The product does not offer the requested size.
    #[error("Product '{name}' is not offered in size {size}")]
    SizeNotOffered { name: String, size: PizzaSize },

    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}
