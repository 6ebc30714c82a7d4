//! Error types for the Order actor.

use crate::model::OrderStatus;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The draft failed the creation-time validation boundary.
    #[error("Order validation error: {0}")]
    Validation(String),

    /// The requested status change is not a legal transition.
    #[error("Illegal status transition: {from} -> {to}")]
    IllegalTransition { from: OrderStatus, to: OrderStatus },

    /// Cancellation requested on an order that is already closed.
    #[error("Order already closed with status {0}")]
    AlreadyClosed(OrderStatus),

    /// Archival requested on an order that is still live.
    #[error("Only delivered or cancelled orders can be archived; status is {0}")]
    NotArchivable(OrderStatus),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}
