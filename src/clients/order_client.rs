//! # Order Client
//!
//! The order lifecycle lives here: creation-time price derivation, not-found
//! gating against the menu store, and the post-commit creation broadcast.
//! The actor behind this client only stores orders and applies update rules;
//! everything that spans other stores goes through this client.

use crate::clients::actor_client::ActorClient;
use crate::clients::{CustomerClient, MenuClient, ProductClient};
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{status, Menu, Order, OrderCreate, OrderDraft, OrderUpdate};
use crate::notifier::Notifier;
use crate::order_actor::OrderError;
use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

/// Title used for every order-creation broadcast.
const ORDER_CREATED_TITLE: &str = "🎉 ¡Hay un nuevo pedido!";

/// Client for interacting with the Order actor.
///
/// Holds the menu, product and customer clients plus the notifier so a single
/// `create_order` call can derive the price, persist the order, and announce
/// it to every connected observer.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    menus: MenuClient,
    products: ProductClient,
    customers: CustomerClient,
    notifier: Notifier,
}

impl OrderClient {
    pub fn new(
        inner: ResourceClient<Order>,
        menus: MenuClient,
        products: ProductClient,
        customers: CustomerClient,
        notifier: Notifier,
    ) -> Self {
        Self {
            inner,
            menus,
            products,
            customers,
            notifier,
        }
    }

    /// Places a new order.
    ///
    /// The referenced menu must exist ([`OrderError::MenuNotFound`] otherwise,
    /// with nothing persisted); `total_price` is derived from it as
    /// `menu.price * quantity`. `quantity` defaults to 1 and `status` to
    /// `"pending"`.
    ///
    /// After the order is stored, a creation event is broadcast to all
    /// connected observers. The broadcast is fire-and-forget: nothing that
    /// goes wrong past the store write can fail this call or undo the order.
    #[instrument(skip(self, draft))]
    pub async fn create_order(&self, draft: OrderDraft) -> Result<Order, OrderError> {
        debug!(?draft, "create_order called");

        let menu = self
            .menus
            .get(draft.menu_id.clone())
            .await
            .map_err(|e| OrderError::ActorCommunicationError(e.to_string()))?
            .ok_or_else(|| OrderError::MenuNotFound(draft.menu_id.clone()))?;

        let quantity = draft.quantity.unwrap_or(1);
        let total_price = menu.price * f64::from(quantity);

        info!("Sending create_order to actor");
        let params = OrderCreate {
            customer_id: draft.customer_id,
            menu_id: draft.menu_id,
            motorcycle_id: draft.motorcycle_id,
            quantity,
            total_price,
            status: draft.status.unwrap_or_else(|| status::PENDING.to_string()),
        };
        let order = self.inner.create(params).await.map_err(Self::map_error)?;

        // The order is committed from here on; announcing it is best-effort.
        self.announce_creation(&menu, &order).await;

        Ok(order)
    }

    /// Broadcasts the "new order" event.
    ///
    /// The customer and product names are resolved live at emission time. A
    /// missing record or a failed lookup only costs the announcement, never
    /// the committed order.
    async fn announce_creation(&self, menu: &Menu, order: &Order) {
        let product = match self.products.get(menu.product_id.clone()).await {
            Ok(Some(product)) => product,
            Ok(None) => {
                warn!(product_id = %menu.product_id, "Product missing, skipping creation notification");
                return;
            }
            Err(e) => {
                warn!(error = %e, "Product lookup failed, skipping creation notification");
                return;
            }
        };
        let customer = match self.customers.get(order.customer_id.clone()).await {
            Ok(Some(customer)) => customer,
            Ok(None) => {
                warn!(customer_id = %order.customer_id, "Customer missing, skipping creation notification");
                return;
            }
            Err(e) => {
                warn!(error = %e, "Customer lookup failed, skipping creation notification");
                return;
            }
        };

        self.notifier.notify(
            ORDER_CREATED_TITLE,
            format!("🧾 {} ordenó el producto {}.", customer.name, product.name),
            None,
        );
    }

    /// Applies a partial update; see the order entity's `on_update` for the
    /// field rules. No notification is published on update.
    #[instrument(skip(self, update))]
    pub async fn update_order(&self, id: String, update: OrderUpdate) -> Result<Order, OrderError> {
        debug!(?update, "update_order called");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Fetch an order, reporting [`OrderError::NotFound`] when the id does not
    /// resolve.
    #[instrument(skip(self))]
    pub async fn get_order(&self, id: String) -> Result<Order, OrderError> {
        self.get(id.clone()).await?.ok_or(OrderError::NotFound(id))
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            // Update hooks fail with a boxed OrderError; unwrap it so callers
            // can still match on MenuNotFound.
            FrameworkError::EntityError(inner) => match inner.downcast::<OrderError>() {
                Ok(err) => *err,
                Err(other) => OrderError::ActorCommunicationError(other.to_string()),
            },
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_get};
    use crate::model::{Customer, Product};
    use tokio::sync::mpsc::error::TryRecvError;

    #[tokio::test]
    async fn test_create_order_with_unknown_menu_never_touches_the_store() {
        let (order_rc, mut order_rx) = create_mock_client::<Order>(10);
        let (menu_rc, mut menu_rx) = create_mock_client::<Menu>(10);
        let (product_rc, _product_rx) = create_mock_client::<Product>(10);
        let (customer_rc, _customer_rx) = create_mock_client::<Customer>(10);

        let client = OrderClient::new(
            order_rc,
            MenuClient::new(menu_rc),
            ProductClient::new(product_rc),
            CustomerClient::new(customer_rc),
            Notifier::default(),
        );

        let task = tokio::spawn(async move {
            client
                .create_order(OrderDraft {
                    customer_id: "customer_1".to_string(),
                    menu_id: "menu_9".to_string(),
                    motorcycle_id: None,
                    quantity: Some(2),
                    status: None,
                })
                .await
        });

        let (id, responder) = expect_get(&mut menu_rx).await.expect("Expected Get request");
        assert_eq!(id, "menu_9");
        responder.send(Ok(None)).unwrap();

        let err = task.await.unwrap().unwrap_err();
        assert_eq!(err, OrderError::MenuNotFound("menu_9".to_string()));

        // The gating lookup failed, so no create request may have reached the
        // order store.
        assert!(matches!(order_rx.try_recv(), Err(TryRecvError::Empty)));
    }
}
