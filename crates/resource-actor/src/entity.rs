//! # ActorEntity Trait
//!
//! Contract every resource type (Order, Product, Table, …) must satisfy to be
//! managed by the generic [`ResourceActor`](crate::ResourceActor). The
//! associated types pin down the DTOs for each operation at compile time: an
//! Order actor can only receive Order payloads, and the compiler rejects
//! anything else.
//!
//! # Provided Methods (Hooks)
//! `on_create` and `on_delete` have do-nothing default implementations;
//! override them only when creation or removal has side effects or
//! preconditions. `on_update` and `handle_action` carry the domain logic and
//! must always be implemented.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by a
/// `ResourceActor`.
///
/// # Async & Context
/// The trait is `#[async_trait]` so hooks can talk to other actors or spawn
/// side-effect tasks. The `Context` associated type is injected into every
/// hook at `run()` time rather than at construction time, which is what lets
/// actors depend on each other without circular references ("late binding").
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Unique identifier for this entity. `From<u32>` is required so the
    /// actor can mint fresh ids from its internal counter.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload required to create a new instance.
    type Create: Send + Sync + Debug;

    /// Payload for mutating an existing instance.
    type Update: Send + Sync + Debug;

    /// Resource-specific operations that don't fit the CRUD shape
    /// (e.g. `Cancel`, `Reserve`).
    type Action: Send + Sync + Debug;

    /// Result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Runtime dependencies injected into every hook. Use `()` when the
    /// entity needs none.
    type Context: Send + Sync;

    /// The entity's error type. One enum per actor: the union of everything
    /// its hooks can fail with. Coarser than per-message error types, but it
    /// keeps client signatures to a single error per resource.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Build the full entity from a freshly minted id and the create payload.
    /// Runs synchronously before `on_create`; validation belongs here so that
    /// invalid drafts are rejected before anything is stored.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is constructed, before it is inserted.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called for every update request. The entity mutates itself here and
    /// may reject the update.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called before the entity is removed. Erroring here vetoes the
    /// removal, which lets entities enforce "may only be deleted when …"
    /// preconditions.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
