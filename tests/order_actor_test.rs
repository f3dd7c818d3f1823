use delivery_orders::clients::{
    actor_client::ActorClient, CustomerClient, MenuClient, OrderClient, ProductClient,
};
use delivery_orders::framework::mock::MockClient;
use delivery_orders::model::{Customer, Menu, OrderDraft, OrderUpdate, Product};
use delivery_orders::notifier::Notifier;
use delivery_orders::order_actor;
use tokio::sync::broadcast::error::TryRecvError;

fn menu(id: &str, product_id: &str, price: f64) -> Menu {
    Menu {
        id: id.to_string(),
        product_id: product_id.to_string(),
        price,
        available: true,
    }
}

fn customer(id: &str, name: &str) -> Customer {
    Customer {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
    }
}

struct Harness {
    menu_mock: MockClient<Menu>,
    product_mock: MockClient<Product>,
    customer_mock: MockClient<Customer>,
    order_client: OrderClient,
    notifier: Notifier,
    actor_handle: tokio::task::JoinHandle<()>,
}

/// Real Order actor, mocked Menu/Product/Customer stores.
///
/// Pattern 2: Actor + Mocks
/// - Real Order actor (exercises the lifecycle and update rules)
/// - Mocked dependencies (isolates the order logic from the other actors)
fn spawn_order_actor_with_mocks() -> Harness {
    let menu_mock = MockClient::<Menu>::new();
    let product_mock = MockClient::<Product>::new();
    let customer_mock = MockClient::<Customer>::new();

    let menu_client = MenuClient::new(menu_mock.client());
    let product_client = ProductClient::new(product_mock.client());
    let customer_client = CustomerClient::new(customer_mock.client());
    let notifier = Notifier::default();

    let (order_actor, order_client) = order_actor::new(
        menu_client.clone(),
        product_client,
        customer_client,
        notifier.clone(),
    );

    // The real actor gets the (mocked) menu store as its update context
    let actor_handle = tokio::spawn(order_actor.run(menu_client));

    Harness {
        menu_mock,
        product_mock,
        customer_mock,
        order_client,
        notifier,
        actor_handle,
    }
}

#[tokio::test]
async fn test_order_actor_with_mocked_dependencies() {
    let mut harness = spawn_order_actor_with_mocks();
    let mut events = harness.notifier.subscribe();

    // create_order resolves the menu (pricing), then the product and the
    // customer (notification message), in that order.
    harness
        .menu_mock
        .expect_get("menu_1".to_string())
        .return_ok(Some(menu("menu_1", "product_1", 25.0)));
    harness
        .product_mock
        .expect_get("product_1".to_string())
        .return_ok(Some(Product::new("product_1", "Super Widget Wrap", 22.0)));
    harness
        .customer_mock
        .expect_get("customer_1".to_string())
        .return_ok(Some(customer("customer_1", "Alice")));

    let order = harness
        .order_client
        .create_order(OrderDraft {
            customer_id: "customer_1".to_string(),
            menu_id: "menu_1".to_string(),
            motorcycle_id: None,
            quantity: Some(3),
            status: None,
        })
        .await
        .expect("Order creation failed");

    // Priced against the mocked menu, stored by the real actor
    assert_eq!(order.total_price, 75.0);
    assert_eq!(order.quantity, 3);

    let retrieved = harness
        .order_client
        .get(order.id.clone())
        .await
        .unwrap()
        .expect("Order not found in the real actor");
    assert_eq!(retrieved, order);

    // The creation event carries the names resolved from the mocks
    let msg = events.recv().await.unwrap();
    assert_eq!(msg.channel, "notificacion");
    assert_eq!(
        msg.event.message,
        "🧾 Alice ordenó el producto Super Widget Wrap."
    );

    // Verify mocks were called exactly as expected
    harness.menu_mock.verify();
    harness.product_mock.verify();
    harness.customer_mock.verify();

    // Cleanup
    drop(harness.order_client);
    harness.actor_handle.await.unwrap();
}

/// The real actor's update hook resolves the stored menu through its context;
/// a quantity patch re-derives the total from it.
#[tokio::test]
async fn test_order_actor_update_reprices_through_menu_context() {
    let mut harness = spawn_order_actor_with_mocks();

    // Creation flow
    harness
        .menu_mock
        .expect_get("menu_1".to_string())
        .return_ok(Some(menu("menu_1", "product_1", 10.0)));
    harness
        .product_mock
        .expect_get("product_1".to_string())
        .return_ok(Some(Product::new("product_1", "Pasta", 9.0)));
    harness
        .customer_mock
        .expect_get("customer_1".to_string())
        .return_ok(Some(customer("customer_1", "Bob")));

    let order = harness
        .order_client
        .create_order(OrderDraft {
            customer_id: "customer_1".to_string(),
            menu_id: "menu_1".to_string(),
            motorcycle_id: None,
            quantity: Some(2),
            status: None,
        })
        .await
        .unwrap();
    assert_eq!(order.total_price, 20.0);

    // The quantity rule resolves the stored menu a second time
    harness
        .menu_mock
        .expect_get("menu_1".to_string())
        .return_ok(Some(menu("menu_1", "product_1", 10.0)));

    let updated = harness
        .order_client
        .update_order(
            order.id,
            OrderUpdate {
                customer_id: None,
                menu_id: None,
                motorcycle_id: None,
                quantity: Some(5),
                status: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.quantity, 5);
    assert_eq!(updated.total_price, 50.0);

    harness.menu_mock.verify();

    drop(harness.order_client);
    harness.actor_handle.await.unwrap();
}

/// A customer id that resolves to nothing only costs the announcement: the
/// order is committed and retrievable, and no event goes out.
#[tokio::test]
async fn test_unresolvable_customer_commits_order_without_event() {
    let mut harness = spawn_order_actor_with_mocks();
    let mut events = harness.notifier.subscribe();

    harness
        .menu_mock
        .expect_get("menu_1".to_string())
        .return_ok(Some(menu("menu_1", "product_1", 10.0)));
    harness
        .product_mock
        .expect_get("product_1".to_string())
        .return_ok(Some(Product::new("product_1", "Tacos", 8.0)));
    harness
        .customer_mock
        .expect_get("customer_404".to_string())
        .return_ok(None);

    let order = harness
        .order_client
        .create_order(OrderDraft {
            customer_id: "customer_404".to_string(),
            menu_id: "menu_1".to_string(),
            motorcycle_id: None,
            quantity: Some(1),
            status: None,
        })
        .await
        .expect("Order must commit even when the customer cannot be resolved");

    let retrieved = harness.order_client.get(order.id.clone()).await.unwrap();
    assert!(retrieved.is_some());

    assert!(matches!(events.try_recv(), Err(TryRecvError::Empty)));

    harness.menu_mock.verify();
    harness.product_mock.verify();
    harness.customer_mock.verify();

    drop(harness.order_client);
    harness.actor_handle.await.unwrap();
}
