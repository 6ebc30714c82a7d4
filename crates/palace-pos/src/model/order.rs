//! Order domain types: the order record, its items, and the status state
//! machine that every mutation is checked against.
//!
//! Status labels serialize with the original Portuguese wire names
//! (`Pendente`, `Em Preparo`, …) so webhook consumers see the envelope the
//! legacy system emitted.

use crate::model::{CustomerId, PizzaSize, ProductId, TableId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Kitchen lifecycle status.
///
/// The only forward path is Pending → Preparing → Ready → Delivering →
/// Delivered, one step at a time. `Cancelled` is reachable from any
/// non-terminal state. `Delivered` and `Cancelled` are terminal; there are
/// no backward transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "Pendente")]
    Pending,
    #[serde(rename = "Em Preparo")]
    Preparing,
    #[serde(rename = "Pronto")]
    Ready,
    #[serde(rename = "Em Entrega")]
    Delivering,
    #[serde(rename = "Entregue")]
    Delivered,
    #[serde(rename = "Cancelado")]
    Cancelled,
}

impl OrderStatus {
    /// The next status along the forward path, if any.
    pub fn next(self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::Preparing),
            OrderStatus::Preparing => Some(OrderStatus::Ready),
            OrderStatus::Ready => Some(OrderStatus::Delivering),
            OrderStatus::Delivering => Some(OrderStatus::Delivered),
            OrderStatus::Delivered | OrderStatus::Cancelled => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Whether a transition from `self` to `to` is legal.
    pub fn can_transition_to(self, to: OrderStatus) -> bool {
        if to == OrderStatus::Cancelled {
            return !self.is_terminal();
        }
        self.next() == Some(to)
    }

    /// Wire label, matching the serialized form.
    pub fn wire_name(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pendente",
            OrderStatus::Preparing => "Em Preparo",
            OrderStatus::Ready => "Pronto",
            OrderStatus::Delivering => "Em Entrega",
            OrderStatus::Delivered => "Entregue",
            OrderStatus::Cancelled => "Cancelado",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Kitchen priority. Independent of status and freely mutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "Alta")]
    High,
    #[serde(rename = "Média")]
    Medium,
    #[serde(rename = "Baixa")]
    Low,
}

/// How the order reaches the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderType {
    #[serde(rename = "Entrega")]
    Delivery,
    #[serde(rename = "Mesa")]
    DineIn,
    #[serde(rename = "Retirada")]
    Pickup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "Dinheiro")]
    Cash,
    #[serde(rename = "Cartão")]
    Card,
    #[serde(rename = "Pix")]
    Pix,
}

/// One line of an order. Product name and unit price are copied by value at
/// creation time; catalog changes never touch existing orders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: u32,
    pub size: PizzaSize,
    pub unit_price: f64,
    pub customization: Option<String>,
}

impl OrderItem {
    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

/// A customer order. Items and total are fixed at creation; only status and
/// priority mutate afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub status: OrderStatus,
    pub priority: Priority,
    pub items: Vec<OrderItem>,
    pub total: f64,
    pub created_at: DateTime<Utc>,
    pub customer_id: Option<CustomerId>,
    pub customer_name: String,
    pub phone: String,
    pub order_type: OrderType,
    pub table_id: Option<TableId>,
    pub delivery_address: Option<String>,
    pub payment_method: PaymentMethod,
    pub notes: Option<String>,
}

impl Order {
    /// Sum of the item line totals. Computed once at creation and stored.
    pub fn compute_total(items: &[OrderItem]) -> f64 {
        items.iter().map(OrderItem::line_total).sum()
    }

    pub fn elapsed_since_creation(&self, now: DateTime<Utc>) -> chrono::Duration {
        now - self.created_at
    }
}

/// Payload for creating a new order.
#[derive(Debug, Clone)]
pub struct OrderDraft {
    pub items: Vec<OrderItem>,
    pub priority: Priority,
    pub customer_id: Option<CustomerId>,
    pub customer_name: String,
    pub phone: String,
    pub order_type: OrderType,
    pub table_id: Option<TableId>,
    pub delivery_address: Option<String>,
    pub payment_method: PaymentMethod,
    pub notes: Option<String>,
}

impl OrderDraft {
    /// Central validation boundary. Every creation path goes through here,
    /// so a malformed draft is rejected before anything is stored.
    pub fn validate(&self) -> Result<(), String> {
        if self.items.is_empty() {
            return Err("order must contain at least one item".into());
        }
        if let Some(item) = self.items.iter().find(|i| i.quantity == 0) {
            return Err(format!(
                "item '{}' has zero quantity",
                item.product_name
            ));
        }
        match self.order_type {
            OrderType::Delivery if self.delivery_address.is_none() => {
                Err("delivery orders require a delivery address".into())
            }
            OrderType::DineIn if self.table_id.is_none() => {
                Err("dine-in orders require a table".into())
            }
            _ => Ok(()),
        }
    }
}

/// Mutable fields of an order. `None` leaves a field untouched.
#[derive(Debug, Clone)]
pub struct OrderUpdate {
    pub status: Option<OrderStatus>,
    pub priority: Option<Priority>,
}

impl OrderUpdate {
    pub fn status(status: OrderStatus) -> Self {
        Self {
            status: Some(status),
            priority: None,
        }
    }

    pub fn priority(priority: Priority) -> Self {
        Self {
            status: None,
            priority: Some(priority),
        }
    }
}
