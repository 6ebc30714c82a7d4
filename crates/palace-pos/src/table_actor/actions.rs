//! Custom actions for the Table actor.

use crate::model::TableId;
use chrono::{DateTime, Utc};

/// Seating operations beyond CRUD.
#[derive(Debug, Clone)]
pub enum TableAction {
    /// Hold the table for a named party at a given time.
    Reserve {
        name: String,
        time: DateTime<Utc>,
    },
    /// Clear the reservation and mark the table available again.
    Release,
    /// Absorb other tables into this one. Only this primary table records
    /// the relation.
    Merge { others: Vec<TableId> },
    /// Undo a merge, dropping all absorbed table ids.
    Split,
}
