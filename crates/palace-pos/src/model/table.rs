//! Seating units: availability, reservations, and table merges.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Tables.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableId(pub u32);

impl From<u32> for TableId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for TableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "table_{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub name: String,
    pub time: DateTime<Utc>,
}

/// A physical table.
///
/// When tables are merged, only the primary table records the absorbed ids in
/// `merged_tables`; the absorbed tables carry no back-reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    pub id: TableId,
    pub number: u32,
    pub capacity: u32,
    pub available: bool,
    pub reservation: Option<Reservation>,
    pub merged_tables: Vec<TableId>,
}

/// Payload for creating a table. New tables start available.
#[derive(Debug, Clone)]
pub struct TableCreate {
    pub number: u32,
    pub capacity: u32,
}

/// Mutable table fields. `None` leaves a field untouched.
#[derive(Debug, Clone)]
pub struct TableUpdate {
    pub capacity: Option<u32>,
    pub available: Option<bool>,
}
