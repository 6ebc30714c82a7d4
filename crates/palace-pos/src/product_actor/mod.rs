//! # Product Actor
//!
//! Catalog management with an availability gate. The ordering flow quotes
//! prices through [`ProductAction::QuotePrice`], which fails for hidden
//! products or unoffered sizes, so the gate cannot be bypassed.
//!
//! Orders copy product name and price by value at creation time; catalog
//! edits and deletions never touch existing orders.
//!
//! ## Structure
//!
//! - [`entity`] - `ActorEntity` implementation for `Product`
//! - [`actions`] - [`ProductAction`] / [`ProductActionResult`]
//! - [`error`] - [`ProductError`]
//! - [`new()`] - factory producing the actor and its typed client

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::ProductClient;
use crate::model::Product;
use resource_actor::ResourceActor;

/// Creates a new Product actor and its client. The actor has no
/// dependencies; run it with `tokio::spawn(actor.run(()))`.
pub fn new() -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(32);
    (actor, ProductClient::new(generic_client))
}
