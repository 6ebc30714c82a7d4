//! `ActorEntity` implementation for [`Product`].

use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError};
use async_trait::async_trait;
use resource_actor::ActorEntity;

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Context = ();
    type Error = ProductError;

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, ProductError> {
        Ok(Product {
            id,
            name: params.name,
            category: params.category,
            description: params.description,
            prices: params.prices,
            available: true,
        })
    }

    async fn on_update(&mut self, update: ProductUpdate, _ctx: &()) -> Result<(), ProductError> {
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(prices) = update.prices {
            self.prices = prices;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ProductAction,
        _ctx: &(),
    ) -> Result<ProductActionResult, ProductError> {
        match action {
            ProductAction::QuotePrice { size } => {
                if !self.available {
                    return Err(ProductError::Unavailable(self.name.clone()));
                }
                let price = self.prices.get(&size).copied().ok_or_else(|| {
                    ProductError::SizeNotOffered {
                        name: self.name.clone(),
                        size,
                    }
                })?;
                Ok(ProductActionResult::Quote(price))
            }
            ProductAction::SetAvailability { available } => {
                self.available = available;
                Ok(ProductActionResult::SetAvailability(()))
            }
        }
    }
}
