//! Custom actions for the Product actor.

use crate::model::PizzaSize;

/// Catalog operations beyond CRUD.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Price lookup for one size, honoring the availability gate. Ordering
    /// flows use this so hidden products cannot be bought.
    QuotePrice { size: PizzaSize },
    /// Show or hide the product in ordering surfaces.
    SetAvailability { available: bool },
}

/// Results of [`ProductAction`]s, one variant per action.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductActionResult {
    Quote(f64),
    SetAvailability(()),
}
