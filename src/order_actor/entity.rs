//! Entity trait implementation for the Order domain type.
//!
//! This module contains the [`ActorEntity`] trait implementation that enables
//! [`Order`] to be managed by the generic [`crate::framework::ResourceActor`],
//! including the partial-update rules that keep `total_price` in sync with the
//! referenced menu.

use super::OrderError;
use crate::clients::{ActorClient, MenuClient};
use crate::framework::ActorEntity;
use crate::model::{Menu, Order, OrderCreate, OrderUpdate};
use async_trait::async_trait;

async fn resolve_menu(menus: &MenuClient, menu_id: &str) -> Result<Menu, OrderError> {
    menus
        .get(menu_id.to_string())
        .await
        .map_err(|e| OrderError::ActorCommunicationError(e.to_string()))?
        .ok_or_else(|| OrderError::MenuNotFound(menu_id.to_string()))
}

#[async_trait]
impl ActorEntity for Order {
    type Id = String;
    type CreateParams = OrderCreate;
    type UpdateParams = OrderUpdate;
    type Context = MenuClient;
    type Error = OrderError;

    /// Creates a new Order from creation parameters.
    ///
    /// `total_price` arrives pre-derived: the client resolves the menu and
    /// computes it before the store is asked to persist anything.
    fn from_create_params(id: String, params: OrderCreate) -> Result<Self, OrderError> {
        Ok(Self {
            id,
            customer_id: params.customer_id,
            menu_id: params.menu_id,
            motorcycle_id: params.motorcycle_id,
            quantity: params.quantity,
            total_price: params.total_price,
            status: params.status,
        })
    }

    /// Applies a partial update as an ordered table of field rules.
    ///
    /// # Rules
    /// - `customer_id`, `motorcycle_id`, `status`: overwrite when present, no
    ///   referential validation.
    /// - `menu_id`: overwrite and re-derive `total_price` against the quantity
    ///   currently stored.
    /// - `quantity`: overwrite and re-derive `total_price` against the menu
    ///   stored *before* this patch, not any `menu_id` arriving in it.
    ///
    /// The quantity rule runs last and wins: when `menu_id` and `quantity`
    /// arrive in the same patch, the persisted total is the prior menu's price
    /// times the new quantity.
    ///
    /// Menu lookups are resolved before any field is touched, so a missing
    /// menu aborts the update with the stored order unchanged.
    async fn on_update(&mut self, update: OrderUpdate, menus: &MenuClient) -> Result<(), OrderError> {
        let new_menu = match update.menu_id.as_deref() {
            Some(menu_id) => Some(resolve_menu(menus, menu_id).await?),
            None => None,
        };
        let prior_menu = match update.quantity {
            Some(_) => Some(resolve_menu(menus, &self.menu_id).await?),
            None => None,
        };

        if let Some(customer_id) = update.customer_id {
            self.customer_id = customer_id;
        }
        if let Some(menu) = new_menu {
            self.total_price = menu.price * f64::from(self.quantity);
            self.menu_id = menu.id;
        }
        if let Some(motorcycle_id) = update.motorcycle_id {
            self.motorcycle_id = Some(motorcycle_id);
        }
        if let Some((quantity, menu)) = update.quantity.zip(prior_menu) {
            self.quantity = quantity;
            self.total_price = menu.price * f64::from(quantity);
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockClient;
    use crate::model::status;

    fn menu(id: &str, price: f64) -> Menu {
        Menu {
            id: id.to_string(),
            product_id: "product_1".to_string(),
            price,
            available: true,
        }
    }

    fn order() -> Order {
        Order {
            id: "order_1".to_string(),
            customer_id: "customer_1".to_string(),
            menu_id: "menu_1".to_string(),
            motorcycle_id: None,
            quantity: 2,
            total_price: 20.0,
            status: status::PENDING.to_string(),
        }
    }

    fn empty_patch() -> OrderUpdate {
        OrderUpdate {
            customer_id: None,
            menu_id: None,
            motorcycle_id: None,
            quantity: None,
            status: None,
        }
    }

    #[tokio::test]
    async fn test_status_patch_touches_nothing_else() {
        let mock = MockClient::<Menu>::new();
        let menus = MenuClient::new(mock.client());

        let mut order = order();
        let before = order.clone();
        order
            .on_update(
                OrderUpdate {
                    status: Some(status::DELIVERED.to_string()),
                    ..empty_patch()
                },
                &menus,
            )
            .await
            .unwrap();

        assert_eq!(order.status, status::DELIVERED);
        assert_eq!(order.total_price, before.total_price);
        assert_eq!(order.quantity, before.quantity);
        assert_eq!(order.menu_id, before.menu_id);
        mock.verify();
    }

    #[tokio::test]
    async fn test_quantity_patch_prices_against_stored_menu() {
        let mut mock = MockClient::<Menu>::new();
        mock.expect_get("menu_1".to_string())
            .return_ok(Some(menu("menu_1", 10.0)));
        let menus = MenuClient::new(mock.client());

        let mut order = order();
        order
            .on_update(
                OrderUpdate {
                    quantity: Some(5),
                    ..empty_patch()
                },
                &menus,
            )
            .await
            .unwrap();

        assert_eq!(order.quantity, 5);
        assert_eq!(order.total_price, 50.0);
        assert_eq!(order.menu_id, "menu_1");
        mock.verify();
    }

    #[tokio::test]
    async fn test_menu_patch_prices_against_stored_quantity() {
        let mut mock = MockClient::<Menu>::new();
        mock.expect_get("menu_2".to_string())
            .return_ok(Some(menu("menu_2", 7.25)));
        let menus = MenuClient::new(mock.client());

        let mut order = order();
        order
            .on_update(
                OrderUpdate {
                    menu_id: Some("menu_2".to_string()),
                    ..empty_patch()
                },
                &menus,
            )
            .await
            .unwrap();

        assert_eq!(order.menu_id, "menu_2");
        assert_eq!(order.total_price, 14.5);
        assert_eq!(order.quantity, 2);
        mock.verify();
    }

    /// When both fields arrive together, the quantity rule runs last and wins:
    /// the persisted total uses the PRIOR menu's price, not the new one. The
    /// "intuitive" `new_price * new_quantity` result would be wrong here.
    #[tokio::test]
    async fn test_menu_and_quantity_together_keep_prior_menu_price() {
        let mut mock = MockClient::<Menu>::new();
        // The new menu resolves first, then the prior one.
        mock.expect_get("menu_2".to_string())
            .return_ok(Some(menu("menu_2", 99.0)));
        mock.expect_get("menu_1".to_string())
            .return_ok(Some(menu("menu_1", 10.0)));
        let menus = MenuClient::new(mock.client());

        let mut order = order();
        order
            .on_update(
                OrderUpdate {
                    menu_id: Some("menu_2".to_string()),
                    quantity: Some(4),
                    ..empty_patch()
                },
                &menus,
            )
            .await
            .unwrap();

        assert_eq!(order.menu_id, "menu_2");
        assert_eq!(order.quantity, 4);
        assert_eq!(order.total_price, 40.0);
        assert_ne!(order.total_price, 99.0 * 4.0);
        mock.verify();
    }

    #[tokio::test]
    async fn test_missing_menu_aborts_update_without_partial_state() {
        let mut mock = MockClient::<Menu>::new();
        mock.expect_get("menu_9".to_string()).return_ok(None);
        let menus = MenuClient::new(mock.client());

        let mut order = order();
        let before = order.clone();
        let err = order
            .on_update(
                OrderUpdate {
                    customer_id: Some("customer_2".to_string()),
                    menu_id: Some("menu_9".to_string()),
                    ..empty_patch()
                },
                &menus,
            )
            .await
            .unwrap_err();

        assert_eq!(err, OrderError::MenuNotFound("menu_9".to_string()));
        // The customer_id rule must not have fired either.
        assert_eq!(order, before);
        mock.verify();
    }
}
