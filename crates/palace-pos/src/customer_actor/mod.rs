//! # Customer Actor
//!
//! Customer identity records. Spending aggregates are deliberately not kept
//! on the record; they are derived on read from the order list so they can
//! never drift out of sync.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::CustomerClient;
use crate::model::Customer;
use resource_actor::ResourceActor;

/// Creates a new Customer actor and its client. No dependencies; run it
/// with `tokio::spawn(actor.run(()))`.
pub fn new() -> (ResourceActor<Customer>, CustomerClient) {
    let (actor, generic_client) = ResourceActor::new(32);
    (actor, CustomerClient::new(generic_client))
}
