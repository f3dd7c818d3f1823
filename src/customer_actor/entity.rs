//! Entity trait implementation for the Customer domain type.

use super::CustomerError;
use crate::framework::ActorEntity;
use crate::model::{Customer, CustomerCreate, CustomerUpdate};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Customer {
    type Id = String;
    type CreateParams = CustomerCreate;
    type UpdateParams = CustomerUpdate;
    type Context = ();
    type Error = CustomerError;

    fn from_create_params(id: String, params: CustomerCreate) -> Result<Self, CustomerError> {
        Ok(Self {
            id,
            name: params.name,
            email: params.email,
        })
    }

    /// Handles updates to the Customer entity.
    ///
    /// # Fields Updated
    /// - `name`: Customer's display name
    /// - `email`: Customer's email address
    async fn on_update(&mut self, update: CustomerUpdate, _ctx: &()) -> Result<(), CustomerError> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        Ok(())
    }
}
