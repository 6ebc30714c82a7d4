//! # Table Actor
//!
//! Seating management: availability, reservations, and merge/split of
//! adjacent tables. Merges are recorded on the primary table only; absorbed
//! tables carry no back-reference, mirroring how the floor plan treats the
//! primary as the bill owner.
//!
//! ## Structure
//!
//! - [`entity`] - `ActorEntity` implementation for `Table`
//! - [`actions`] - [`TableAction`]
//! - [`error`] - [`TableError`]
//! - [`new()`] - factory producing the actor and its typed client

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::TableClient;
use crate::model::Table;
use resource_actor::ResourceActor;

/// Creates a new Table actor and its client. The actor has no dependencies;
/// run it with `tokio::spawn(actor.run(()))`.
pub fn new() -> (ResourceActor<Table>, TableClient) {
    let (actor, generic_client) = ResourceActor::new(32);
    (actor, TableClient::new(generic_client))
}
