//! Entity trait implementation for the Menu domain type.

use super::MenuError;
use crate::framework::ActorEntity;
use crate::model::{Menu, MenuCreate, MenuUpdate};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Menu {
    type Id = String;
    type CreateParams = MenuCreate;
    type UpdateParams = MenuUpdate;
    type Context = ();
    type Error = MenuError;

    fn from_create_params(id: String, params: MenuCreate) -> Result<Self, MenuError> {
        Ok(Self {
            id,
            product_id: params.product_id,
            price: params.price,
            available: params.available.unwrap_or(true),
        })
    }

    /// Handles updates to the Menu entity.
    ///
    /// Price changes apply to future orders only; orders already priced
    /// against this menu keep their captured total.
    async fn on_update(&mut self, update: MenuUpdate, _ctx: &()) -> Result<(), MenuError> {
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(available) = update.available {
            self.available = available;
        }
        Ok(())
    }
}
