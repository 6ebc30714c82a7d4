//! # Progress Estimator
//!
//! Display-only progress percentage for an order, derived from its status
//! alone (the discrete strategy): each stage maps to a fixed percentage, so
//! progress never decreases while the status is held and jumps to the next
//! baseline on every transition. Cancelled orders render as 100% — visually
//! "done" — matching the legacy kitchen view.
//!
//! Nothing here drives transitions; the automation scheduler is the only
//! component that advances status.

use crate::model::{Order, OrderStatus};
use chrono::{DateTime, Utc};

/// Fixed percentage for each status.
pub fn progress_percent(status: OrderStatus) -> u8 {
    match status {
        OrderStatus::Pending => 20,
        OrderStatus::Preparing => 40,
        OrderStatus::Ready => 60,
        OrderStatus::Delivering => 80,
        OrderStatus::Delivered | OrderStatus::Cancelled => 100,
    }
}

/// Whole seconds since the order was created. Companion readout shown next
/// to the progress bar.
pub fn elapsed_secs(order: &Order, now: DateTime<Utc>) -> i64 {
    order.elapsed_since_creation(now).num_seconds().max(0)
}
