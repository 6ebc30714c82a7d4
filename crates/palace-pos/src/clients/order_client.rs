//! # Order Client
//!
//! High-level API over the Order actor. All lifecycle rules are enforced in
//! the actor's hooks; this wrapper names the operations the rest of the
//! application talks in and maps framework errors back into [`OrderError`].

use crate::model::{Order, OrderDraft, OrderId, OrderStatus, OrderUpdate, Priority};
use crate::order_actor::{OrderAction, OrderError};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Creates an order from a draft. Validation happens in the actor, so a
    /// malformed draft comes back as [`OrderError::Validation`] and nothing
    /// is stored.
    #[instrument(skip(self, draft))]
    pub async fn create_order(&self, draft: OrderDraft) -> Result<OrderId, OrderError> {
        debug!(items = draft.items.len(), "create_order");
        self.inner.create(draft).await.map_err(Self::map_error)
    }

    /// Advances or cancels the order's status. Illegal transitions are
    /// rejected with [`OrderError::IllegalTransition`].
    #[instrument(skip(self))]
    pub async fn update_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Order, OrderError> {
        self.inner
            .update(id, OrderUpdate::status(status))
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_priority(
        &self,
        id: OrderId,
        priority: Priority,
    ) -> Result<Order, OrderError> {
        self.inner
            .update(id, OrderUpdate::priority(priority))
            .await
            .map_err(Self::map_error)
    }

    /// Cancels a live order. The record stays in the store with status
    /// `Cancelled` and a cancellation notification is emitted.
    #[instrument(skip(self))]
    pub async fn cancel_order(
        &self,
        id: OrderId,
        reason: Option<String>,
    ) -> Result<(), OrderError> {
        self.inner
            .perform_action(id, OrderAction::Cancel { reason })
            .await
            .map_err(Self::map_error)
    }

    /// Removes a closed (delivered or cancelled) order from the store.
    /// Archival emits no notification; cancelling and archiving are distinct
    /// operations.
    #[instrument(skip(self))]
    pub async fn archive_order(&self, id: OrderId) -> Result<(), OrderError> {
        self.delete(id).await
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> OrderError {
        match e {
            FrameworkError::EntityError(inner) => match inner.downcast::<OrderError>() {
                Ok(err) => *err,
                Err(other) => OrderError::ActorCommunication(other.to_string()),
            },
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            other => OrderError::ActorCommunication(other.to_string()),
        }
    }
}
