//! `ActorEntity` implementation for [`Customer`].
//!
//! The simplest actor in the system: plain CRUD, no dependencies, no
//! actions. Spending aggregates are not stored here — see
//! [`customer_stats`](crate::model::customer_stats).

use crate::customer_actor::CustomerError;
use crate::model::{Customer, CustomerCreate, CustomerId, CustomerUpdate};
use async_trait::async_trait;
use resource_actor::ActorEntity;

#[async_trait]
impl ActorEntity for Customer {
    type Id = CustomerId;
    type Create = CustomerCreate;
    type Update = CustomerUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = CustomerError;

    fn from_create_params(id: CustomerId, params: CustomerCreate) -> Result<Self, CustomerError> {
        Ok(Customer {
            id,
            name: params.name,
            phone: params.phone,
            address: params.address,
        })
    }

    async fn on_update(&mut self, update: CustomerUpdate, _ctx: &()) -> Result<(), CustomerError> {
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        if let Some(address) = update.address {
            self.address = Some(address);
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), CustomerError> {
        Ok(())
    }
}
