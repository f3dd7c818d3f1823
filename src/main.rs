//! Demo entry point for the delivery-order system.
//!
//! Demonstrates:
//! 1. Setting up the [`DeliverySystem`].
//! 2. Seeding a customer, a product and a menu listing.
//! 3. Subscribing an observer and placing an order.
//! 4. Receiving the creation broadcast.

use delivery_orders::lifecycle::{setup_tracing, DeliverySystem};
use delivery_orders::model::{CustomerCreate, MenuCreate, OrderDraft, OrderUpdate, ProductCreate};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting application with complete delivery system");

    // Create the entire delivery system (starts all actors)
    let system = DeliverySystem::new();

    // Attach an observer before placing any order, the way a transport
    // adapter would for its connected clients.
    let mut events = system.notifier.subscribe();

    let customer = system
        .customer_client
        .create_customer(CustomerCreate {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
        })
        .await
        .map_err(|e| e.to_string())?;
    info!(customer_id = %customer.id, "Customer created successfully");

    let product = system
        .product_client
        .create_product(ProductCreate {
            name: "Pizza Margarita".to_string(),
            price: 11.00,
            category: Some("Main Course".to_string()),
        })
        .await
        .map_err(|e| e.to_string())?;
    info!(product_id = %product.id, "Product created successfully");

    // The restaurant lists the product with its own price.
    let menu = system
        .menu_client
        .create_menu(MenuCreate {
            product_id: product.id.clone(),
            price: 12.50,
            available: None,
        })
        .await
        .map_err(|e| e.to_string())?;
    info!(menu_id = %menu.id, price = menu.price, "Menu created successfully");

    // Place an order - this flows through the menu store for pricing and
    // triggers the creation broadcast.
    let span = tracing::info_span!("order_processing");
    let order_result = async {
        info!("Processing order through delivery system");
        system
            .order_client
            .create_order(OrderDraft {
                customer_id: customer.id.clone(),
                menu_id: menu.id.clone(),
                motorcycle_id: None,
                quantity: Some(3),
                status: None,
            })
            .await
    }
    .instrument(span)
    .await;

    let order = match order_result {
        Ok(order) => {
            info!(
                order_id = %order.id,
                total_price = order.total_price,
                status = %order.status,
                "Order processed successfully"
            );
            order
        }
        Err(e) => {
            error!(error = %e, "Order processing failed");
            return Err(e.to_string());
        }
    };

    // The creation event is already waiting for us.
    match events.recv().await {
        Ok(msg) => info!(
            channel = %msg.channel,
            title = %msg.event.title,
            message = %msg.event.message,
            "Notification received"
        ),
        Err(e) => error!(error = %e, "Notification stream closed early"),
    }

    // Dispatch picks the order up.
    let order = system
        .order_client
        .update_order(
            order.id,
            OrderUpdate {
                customer_id: None,
                menu_id: None,
                motorcycle_id: Some("motorcycle_7".to_string()),
                quantity: None,
                status: Some("in_progress".to_string()),
            },
        )
        .await
        .map_err(|e| e.to_string())?;
    info!(order_id = %order.id, status = %order.status, "Order dispatched");

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
