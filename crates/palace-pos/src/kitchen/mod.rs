//! # Kitchen Workflow
//!
//! Everything the kitchen view is built from:
//!
//! - [`board`] - pure classification of orders into the five status buckets
//! - [`automation`] - timer-driven auto-advance with one timer per order
//! - [`progress`] - display-only progress percentage per status
//!
//! The board and the progress estimator are pure and side-effect free; only
//! the automation scheduler mutates orders, and it does so through the Order
//! actor so every transition is checked and announced the same way as a
//! manual one.

pub mod automation;
pub mod board;
pub mod progress;

pub use automation::KitchenAutomation;
pub use board::KitchenBoard;
pub use progress::{elapsed_secs, progress_percent};
