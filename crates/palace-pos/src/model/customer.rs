//! Customer identity, plus the derived spending view.
//!
//! The legacy system stored `order_count`/`total_spent` on the customer and
//! never recomputed them. Here those aggregates are a view computed on read
//! by folding the live order list, so they can never drift.

use crate::model::{Order, OrderStatus};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Customers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerId(pub u32);

impl From<u32> for CustomerId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "customer_{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub phone: String,
    pub address: Option<String>,
}

/// Payload for registering a customer.
#[derive(Debug, Clone)]
pub struct CustomerCreate {
    pub name: String,
    pub phone: String,
    pub address: Option<String>,
}

/// Mutable customer fields. `None` leaves a field untouched.
#[derive(Debug, Clone)]
pub struct CustomerUpdate {
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Derived spending aggregates for one customer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CustomerStats {
    pub order_count: usize,
    pub total_spent: f64,
}

/// Folds the order list into per-customer aggregates. Cancelled orders count
/// toward neither field.
pub fn customer_stats(orders: &[Order], customer: &CustomerId) -> CustomerStats {
    orders
        .iter()
        .filter(|o| o.customer_id.as_ref() == Some(customer))
        .filter(|o| o.status != OrderStatus::Cancelled)
        .fold(
            CustomerStats {
                order_count: 0,
                total_spent: 0.0,
            },
            |acc, o| CustomerStats {
                order_count: acc.order_count + 1,
                total_spent: acc.total_spent + o.total,
            },
        )
}
