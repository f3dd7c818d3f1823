use crate::clients::{CustomerClient, MenuClient, OrderClient, ProductClient};
use crate::notifier::{Notifier, DEFAULT_CAPACITY};
use crate::{customer_actor, menu_actor, order_actor, product_actor};
use tracing::{error, info};

/// The main runtime orchestrator for the delivery-order system.
///
/// `DeliverySystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping all actors in the system
/// - **Dependency Wiring**: Connecting components that depend on each other
///   (the Order actor needs the MenuClient; the OrderClient also needs the
///   product and customer stores plus the notifier)
/// - **Notification Fan-Out**: Owning the shared [`Notifier`] that broadcasts
///   events to every connected observer
///
/// # Example
///
/// ```ignore
/// let system = DeliverySystem::new();
/// let mut events = system.notifier.subscribe();
///
/// let customer = system.customer_client.create_customer(customer_data).await?;
/// let product = system.product_client.create_product(product_data).await?;
/// let menu = system.menu_client.create_menu(menu_data).await?;
/// let order = system.order_client.create_order(order_draft).await?;
///
/// // The creation event is already waiting for the subscriber.
/// let msg = events.recv().await?;
///
/// system.shutdown().await?;
/// ```
pub struct DeliverySystem {
    /// Client for the Order actor; runs the whole order lifecycle.
    pub order_client: OrderClient,

    /// Client for the Menu actor.
    pub menu_client: MenuClient,

    /// Client for the Product actor.
    pub product_client: ProductClient,

    /// Client for the Customer actor.
    pub customer_client: CustomerClient,

    /// Publish/subscribe handle for global notifications.
    pub notifier: Notifier,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl DeliverySystem {
    /// Creates and initializes a new `DeliverySystem` with all actors running.
    ///
    /// This method:
    /// 1. Creates the shared notifier
    /// 2. Spawns ResourceActors for Customer, Product, Menu and Order
    /// 3. Wires up dependencies (the Order actor gets a MenuClient; the
    ///    OrderClient gets everything the creation workflow needs)
    pub fn new() -> Self {
        let notifier = Notifier::new(DEFAULT_CAPACITY);

        // 1. Create actors (no dependencies)
        let (customer_actor, customer_client) = customer_actor::new();
        let (product_actor, product_client) = product_actor::new();
        let (menu_actor, menu_client) = menu_actor::new();
        let (order_actor, order_client) = order_actor::new(
            menu_client.clone(),
            product_client.clone(),
            customer_client.clone(),
            notifier.clone(),
        );

        // 2. Start actors with injected context
        // Customer, Product and Menu have no dependencies (Context = ())
        let customer_handle = tokio::spawn(customer_actor.run(()));
        let product_handle = tokio::spawn(product_actor.run(()));
        let menu_handle = tokio::spawn(menu_actor.run(()));

        // Order actor needs the Menu client for price re-derivation on update
        let order_handle = tokio::spawn(order_actor.run(menu_client.clone()));

        Self {
            order_client,
            menu_client,
            product_client,
            customer_client,
            notifier,
            handles: vec![customer_handle, product_handle, menu_handle, order_handle],
        }
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes their channels; each actor drains its
    /// mailbox and exits. The order actor goes first (it holds a MenuClient
    /// clone in its context), after which the remaining actors lose their
    /// last senders and follow.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(String)` if any actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        // Closing the order client also releases its clones of the menu,
        // product and customer clients.
        drop(self.order_client);
        drop(self.menu_client);
        drop(self.product_client);
        drop(self.customer_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for DeliverySystem {
    fn default() -> Self {
        Self::new()
    }
}
