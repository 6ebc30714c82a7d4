//! # Order Actor
//!
//! The authoritative store of order records. All lifecycle rules — draft
//! validation, the forward-only status machine, cancellation, the archive
//! gate — are enforced inside the actor, so every caller sees the same
//! semantics.
//!
//! The actor's context is a [`NotificationEmitter`]; creation, status
//! changes, and cancellations are announced through it. Archival is silent.
//!
//! ## Structure
//!
//! - [`entity`] - `ActorEntity` implementation for `Order`
//! - [`actions`] - [`OrderAction`] (cancellation with a reason)
//! - [`error`] - [`OrderError`]
//! - [`new()`] - factory producing the actor and its typed client

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::OrderClient;
use crate::model::Order;
use crate::notify::NotificationEmitter;
use resource_actor::ResourceActor;

/// Creates a new Order actor and its client. Run the actor with the emitter
/// as context: `tokio::spawn(actor.run(emitter))`.
pub fn new() -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(32);
    (actor, OrderClient::new(generic_client))
}

// Re-exported so call sites can name the context type without reaching into
// the notify module.
pub type OrderContext = NotificationEmitter;
