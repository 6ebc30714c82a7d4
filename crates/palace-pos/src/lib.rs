//! # Palace POS
//!
//! Order lifecycle management for a pizzeria, built on the `resource-actor`
//! framework: each entity type (orders, products, tables, customers) is
//! owned by one actor task, and the kitchen workflow — status buckets,
//! timer-driven auto-advance, progress display — runs against the order
//! actor like any other caller.
//!
//! ## Module Tour
//!
//! - [`model`]: pure domain types and the order status state machine.
//! - [`order_actor`], [`product_actor`], [`table_actor`], [`customer_actor`]:
//!   the entity implementations and their factories.
//! - [`clients`]: typed wrappers that hide the message passing and translate
//!   framework errors into domain error enums.
//! - [`kitchen`]: the board classifier, the automation scheduler, and the
//!   progress estimator.
//! - [`notify`]: the fire-and-forget notification sidecar (log line plus
//!   optional webhook POST).
//! - [`config`]: TOML settings with degrade-to-default loading.
//! - [`lifecycle`]: the [`PosSystem`](lifecycle::PosSystem) orchestrator.
//!
//! ## Lifecycle rules in one place
//!
//! Every mutation flows through the order actor, so there is a single
//! enforcement point for the rules that matter:
//!
//! - status only moves forward, one step at a time, or jumps to `Cancelled`
//!   from a non-terminal state;
//! - drafts are validated before anything is stored;
//! - cancellation notifies, archival does not, and only closed orders can be
//!   archived.

pub mod clients;
pub mod config;
pub mod customer_actor;
pub mod kitchen;
pub mod lifecycle;
pub mod model;
pub mod notify;
pub mod order_actor;
pub mod product_actor;
pub mod table_actor;
