//! Entity trait implementation for the Product domain type.
//!
//! See the trait implementation on [`Product`] for method documentation.

use super::ProductError;
use crate::framework::ActorEntity;
use crate::model::{Product, ProductCreate, ProductUpdate};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Product {
    type Id = String;
    type CreateParams = ProductCreate;
    type UpdateParams = ProductUpdate;
    type Context = ();
    type Error = ProductError;

    fn from_create_params(id: String, params: ProductCreate) -> Result<Self, ProductError> {
        Ok(Self {
            id,
            name: params.name,
            price: params.price,
            category: params.category,
        })
    }

    /// Handles updates to the Product entity.
    ///
    /// # Fields Updated
    /// - `name`: Product name
    /// - `price`: Base catalog price
    /// - `category`: Catalog category
    async fn on_update(&mut self, update: ProductUpdate, _ctx: &()) -> Result<(), ProductError> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(category) = update.category {
            self.category = Some(category);
        }
        Ok(())
    }
}
