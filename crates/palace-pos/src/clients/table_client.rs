//! # Table Client
//!
//! High-level API over the Table actor.

use crate::model::{Table, TableCreate, TableId, TableUpdate};
use crate::table_actor::{TableAction, TableError};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::instrument;

/// Client for interacting with the Table actor.
#[derive(Clone)]
pub struct TableClient {
    inner: ResourceClient<Table>,
}

impl TableClient {
    pub fn new(inner: ResourceClient<Table>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_table(&self, params: TableCreate) -> Result<TableId, TableError> {
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self, update))]
    pub async fn update_table(
        &self,
        id: TableId,
        update: TableUpdate,
    ) -> Result<Table, TableError> {
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn reserve(
        &self,
        id: TableId,
        name: String,
        time: DateTime<Utc>,
    ) -> Result<(), TableError> {
        self.inner
            .perform_action(id, TableAction::Reserve { name, time })
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn release(&self, id: TableId) -> Result<(), TableError> {
        self.inner
            .perform_action(id, TableAction::Release)
            .await
            .map_err(Self::map_error)
    }

    /// Merges `others` into the primary table `id`. The relation is recorded
    /// on the primary only.
    #[instrument(skip(self))]
    pub async fn merge(&self, id: TableId, others: Vec<TableId>) -> Result<(), TableError> {
        self.inner
            .perform_action(id, TableAction::Merge { others })
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn split(&self, id: TableId) -> Result<(), TableError> {
        self.inner
            .perform_action(id, TableAction::Split)
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Table> for TableClient {
    type Error = TableError;

    fn inner(&self) -> &ResourceClient<Table> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> TableError {
        match e {
            FrameworkError::EntityError(inner) => match inner.downcast::<TableError>() {
                Ok(err) => *err,
                Err(other) => TableError::ActorCommunication(other.to_string()),
            },
            FrameworkError::NotFound(id) => TableError::NotFound(id),
            other => TableError::ActorCommunication(other.to_string()),
        }
    }
}
