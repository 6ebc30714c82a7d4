//! Catalog entry with one price per size variant.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

/// Pizza size variant. Wire labels match the legacy menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PizzaSize {
    #[serde(rename = "Broto")]
    Small,
    #[serde(rename = "Média")]
    Medium,
    #[serde(rename = "Grande")]
    Large,
}

impl Display for PizzaSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            PizzaSize::Small => "Broto",
            PizzaSize::Medium => "Média",
            PizzaSize::Large => "Grande",
        };
        f.write_str(label)
    }
}

/// A menu product. The availability flag gates ordering; orders that already
/// reference the product are never affected by catalog changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    /// One price per offered size. A size absent here is not sold.
    pub prices: BTreeMap<PizzaSize, f64>,
    pub available: bool,
}

/// Payload for creating a product. New products start available.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub prices: BTreeMap<PizzaSize, f64>,
}

/// Mutable catalog fields. `None` leaves a field untouched.
#[derive(Debug, Clone)]
pub struct ProductUpdate {
    pub description: Option<String>,
    pub prices: Option<BTreeMap<PizzaSize, f64>>,
}
