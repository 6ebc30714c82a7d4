//! # Generic Messages
//!
//! Message types exchanged between `ResourceClient` and `ResourceActor`.
//!
//! The variants map to the standard resource lifecycle — Create, Get, List,
//! Update, Delete — plus an `Action` escape hatch for domain operations that
//! don't fit the CRUD shape. Everything is generic over `T: ActorEntity`, so
//! the payload types are pinned by the entity's associated types and a
//! request for one resource can never be routed to an actor for another.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// One-shot response channel carried inside every request.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal request enum sent to an actor.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    /// Snapshot of every entity in the store, most-recent-first.
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
