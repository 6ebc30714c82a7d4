//! # Product Client
//!
//! High-level API over the Product actor.

use crate::model::{PizzaSize, Product, ProductCreate, ProductId, ProductUpdate};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::instrument;

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, ProductError> {
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self, update))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Price for one size, failing if the product is hidden or the size is
    /// not offered. Ordering flows quote through here so the availability
    /// gate cannot be bypassed.
    #[instrument(skip(self))]
    pub async fn quote_price(&self, id: ProductId, size: PizzaSize) -> Result<f64, ProductError> {
        match self
            .inner
            .perform_action(id, ProductAction::QuotePrice { size })
            .await
            .map_err(Self::map_error)?
        {
            ProductActionResult::Quote(price) => Ok(price),
            other => Err(ProductError::ActorCommunication(format!(
                "unexpected action result: {other:?}"
            ))),
        }
    }

    #[instrument(skip(self))]
    pub async fn set_availability(
        &self,
        id: ProductId,
        available: bool,
    ) -> Result<(), ProductError> {
        self.inner
            .perform_action(id, ProductAction::SetAvailability { available })
            .await
            .map_err(Self::map_error)?;
        Ok(())
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> ProductError {
        match e {
            FrameworkError::EntityError(inner) => match inner.downcast::<ProductError>() {
                Ok(err) => *err,
                Err(other) => ProductError::ActorCommunication(other.to_string()),
            },
            FrameworkError::NotFound(id) => ProductError::NotFound(id),
            other => ProductError::ActorCommunication(other.to_string()),
        }
    }
}
