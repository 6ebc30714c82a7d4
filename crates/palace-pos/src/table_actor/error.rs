//! Error types for the Table actor.

use thiserror::Error;

/// Errors that can occur during table operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TableError {
    #[error("Table not found: {0}")]
    NotFound(String),

    /// Reservation requested on a table that is occupied or reserved.
    #[error("Table {0} is not available")]
    Unavailable(u32),

    /// Release requested on a table with no reservation.
    #[error("Table {0} has no reservation")]
    NotReserved(u32),

    /// Merge requested with no tables to absorb.
    #[error("Merge requires at least one other table")]
    EmptyMerge,

    /// Split requested on a table that is not a merge primary.
    #[error("Table {0} is not merged")]
    NotMerged(u32),

    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}
