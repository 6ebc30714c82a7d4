//! Full end-to-end tests with all real actors.

use palace_pos::config::PosConfig;
use palace_pos::lifecycle::PosSystem;
use palace_pos::model::{
    CustomerCreate, OrderDraft, OrderId, OrderItem, OrderStatus, OrderType, PaymentMethod,
    PizzaSize, Priority, ProductCreate, ProductId, TableCreate,
};
use palace_pos::notify::NotificationEmitter;
use palace_pos::order_actor::OrderError;
use resource_actor::ActorClient;
use std::collections::BTreeMap;

fn quiet_system() -> PosSystem {
    PosSystem::with_emitter(PosConfig::default(), NotificationEmitter::disabled())
}

fn two_item_draft(product_id: ProductId) -> OrderDraft {
    OrderDraft {
        items: vec![
            OrderItem {
                product_id: product_id.clone(),
                product_name: "Margherita".to_string(),
                quantity: 1,
                size: PizzaSize::Large,
                unit_price: 45.90,
                customization: None,
            },
            OrderItem {
                product_id,
                product_name: "Calabresa".to_string(),
                quantity: 1,
                size: PizzaSize::Medium,
                unit_price: 29.90,
                customization: Some("sem cebola".to_string()),
            },
        ],
        priority: Priority::High,
        customer_id: None,
        customer_name: "Ana Souza".to_string(),
        phone: "11 99999-0000".to_string(),
        order_type: OrderType::Pickup,
        table_id: None,
        delivery_address: None,
        payment_method: PaymentMethod::Cash,
        notes: None,
    }
}

#[tokio::test]
async fn test_order_lifecycle_end_to_end() {
    let system = quiet_system();

    let product_id = system
        .products
        .create_product(ProductCreate {
            name: "Margherita".to_string(),
            category: "Pizzas".to_string(),
            description: None,
            prices: BTreeMap::from([(PizzaSize::Large, 45.90), (PizzaSize::Medium, 29.90)]),
        })
        .await
        .expect("Failed to create product");

    let order_id = system
        .orders
        .create_order(two_item_draft(product_id))
        .await
        .expect("Failed to create order");

    // Fresh orders start Pending with the computed total.
    let order = system
        .orders
        .get(order_id.clone())
        .await
        .expect("Failed to get order")
        .expect("Order not found");
    assert_eq!(order.status, OrderStatus::Pending);
    assert!((order.total - 75.80).abs() < 1e-9);

    // The board sees it in the pending bucket only.
    let board = system.kitchen_board().await.expect("Failed to classify");
    assert_eq!(board.pending.len(), 1);
    assert_eq!(board.preparing.len(), 0);

    // Walk the full forward path.
    for status in [
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Delivering,
        OrderStatus::Delivered,
    ] {
        let updated = system
            .orders
            .update_status(order_id.clone(), status)
            .await
            .expect("Forward transition failed");
        assert_eq!(updated.status, status);
    }

    // Archiving a delivered order removes it from every bucket.
    system
        .orders
        .archive_order(order_id.clone())
        .await
        .expect("Failed to archive delivered order");
    let board = system.kitchen_board().await.expect("Failed to classify");
    assert!(board.is_empty());
    assert!(system.orders.get(order_id).await.unwrap().is_none());

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_illegal_transitions_are_rejected() {
    let system = quiet_system();

    let order_id = system
        .orders
        .create_order(two_item_draft(ProductId(1)))
        .await
        .expect("Failed to create order");

    // Skipping a stage is rejected.
    let err = system
        .orders
        .update_status(order_id.clone(), OrderStatus::Ready)
        .await
        .expect_err("Skip should be rejected");
    assert_eq!(
        err,
        OrderError::IllegalTransition {
            from: OrderStatus::Pending,
            to: OrderStatus::Ready,
        }
    );

    // Backward moves are rejected.
    system
        .orders
        .update_status(order_id.clone(), OrderStatus::Preparing)
        .await
        .expect("Forward transition failed");
    let err = system
        .orders
        .update_status(order_id.clone(), OrderStatus::Pending)
        .await
        .expect_err("Backward move should be rejected");
    assert!(matches!(err, OrderError::IllegalTransition { .. }));

    // The failed attempts left the status untouched.
    let order = system.orders.get(order_id).await.unwrap().unwrap();
    assert_eq!(order.status, OrderStatus::Preparing);

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_cancelled_orders_leave_the_board_but_stay_stored() {
    let system = quiet_system();

    let order_id = system
        .orders
        .create_order(two_item_draft(ProductId(1)))
        .await
        .expect("Failed to create order");

    system
        .orders
        .cancel_order(order_id.clone(), Some("cliente desistiu".to_string()))
        .await
        .expect("Failed to cancel");

    let board = system.kitchen_board().await.expect("Failed to classify");
    assert!(board.is_empty());

    let order = system.orders.get(order_id.clone()).await.unwrap().unwrap();
    assert_eq!(order.status, OrderStatus::Cancelled);

    // A closed order cannot be cancelled again...
    let err = system
        .orders
        .cancel_order(order_id.clone(), None)
        .await
        .expect_err("Double cancel should fail");
    assert_eq!(err, OrderError::AlreadyClosed(OrderStatus::Cancelled));

    // ...but it can be archived.
    system
        .orders
        .archive_order(order_id)
        .await
        .expect("Failed to archive cancelled order");

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_archive_rejects_live_orders() {
    let system = quiet_system();

    let order_id = system
        .orders
        .create_order(two_item_draft(ProductId(1)))
        .await
        .expect("Failed to create order");

    let err = system
        .orders
        .archive_order(order_id.clone())
        .await
        .expect_err("Archiving a pending order should fail");
    assert_eq!(err, OrderError::NotArchivable(OrderStatus::Pending));

    // Still on the board.
    let board = system.kitchen_board().await.expect("Failed to classify");
    assert_eq!(board.pending.len(), 1);

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_delivery_order_requires_address() {
    let system = quiet_system();

    let mut draft = two_item_draft(ProductId(1));
    draft.order_type = OrderType::Delivery;
    draft.delivery_address = None;

    let err = system
        .orders
        .create_order(draft)
        .await
        .expect_err("Delivery without address should be rejected");
    assert!(matches!(err, OrderError::Validation(_)));

    // Nothing was stored.
    assert!(system.orders.list().await.unwrap().is_empty());

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_customer_stats_derive_from_orders() {
    let system = quiet_system();

    let customer_id = system
        .customers
        .create_customer(CustomerCreate {
            name: "Bruno Lima".to_string(),
            phone: "11 98888-0000".to_string(),
            address: None,
        })
        .await
        .expect("Failed to create customer");

    // Fresh customers have zero aggregates.
    let stats = system.customer_stats(&customer_id).await.unwrap();
    assert_eq!(stats.order_count, 0);
    assert_eq!(stats.total_spent, 0.0);

    let mut draft = two_item_draft(ProductId(1));
    draft.customer_id = Some(customer_id.clone());
    system.orders.create_order(draft.clone()).await.unwrap();
    let second = system.orders.create_order(draft).await.unwrap();

    let stats = system.customer_stats(&customer_id).await.unwrap();
    assert_eq!(stats.order_count, 2);
    assert!((stats.total_spent - 151.60).abs() < 1e-9);

    // Cancelled orders drop out of the aggregates.
    system.orders.cancel_order(second, None).await.unwrap();
    let stats = system.customer_stats(&customer_id).await.unwrap();
    assert_eq!(stats.order_count, 1);
    assert!((stats.total_spent - 75.80).abs() < 1e-9);

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_catalog_availability_gates_quotes() {
    let system = quiet_system();

    let product_id = system
        .products
        .create_product(ProductCreate {
            name: "Quatro Queijos".to_string(),
            category: "Pizzas".to_string(),
            description: None,
            prices: BTreeMap::from([(PizzaSize::Large, 52.90)]),
        })
        .await
        .expect("Failed to create product");

    let price = system
        .products
        .quote_price(product_id.clone(), PizzaSize::Large)
        .await
        .expect("Quote failed");
    assert_eq!(price, 52.90);

    system
        .products
        .set_availability(product_id.clone(), false)
        .await
        .expect("Failed to hide product");
    assert!(system
        .products
        .quote_price(product_id.clone(), PizzaSize::Large)
        .await
        .is_err());

    // Hiding the product does not touch orders that already copied its price.
    let order_id = system
        .orders
        .create_order(two_item_draft(product_id))
        .await
        .expect("Failed to create order");
    let order = system.orders.get(order_id).await.unwrap().unwrap();
    assert!((order.total - 75.80).abs() < 1e-9);

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_table_reservation_and_merge() {
    let system = quiet_system();

    let main = system
        .tables
        .create_table(TableCreate {
            number: 10,
            capacity: 4,
        })
        .await
        .expect("Failed to create table");
    let side = system
        .tables
        .create_table(TableCreate {
            number: 11,
            capacity: 2,
        })
        .await
        .expect("Failed to create table");

    system
        .tables
        .reserve(main.clone(), "Família Souza".to_string(), chrono::Utc::now())
        .await
        .expect("Failed to reserve");

    // A reserved table cannot be reserved again.
    assert!(system
        .tables
        .reserve(main.clone(), "Outro".to_string(), chrono::Utc::now())
        .await
        .is_err());

    system
        .tables
        .merge(main.clone(), vec![side.clone()])
        .await
        .expect("Failed to merge");

    // Only the primary records the merge.
    let primary = system.tables.get(main.clone()).await.unwrap().unwrap();
    assert_eq!(primary.merged_tables, vec![side.clone()]);
    let absorbed = system.tables.get(side).await.unwrap().unwrap();
    assert!(absorbed.merged_tables.is_empty());

    system.tables.split(main.clone()).await.expect("Failed to split");
    system.tables.release(main.clone()).await.expect("Failed to release");
    let table = system.tables.get(main).await.unwrap().unwrap();
    assert!(table.available);
    assert!(table.reservation.is_none());

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_order_listing_is_most_recent_first() {
    let system = quiet_system();

    let first = system
        .orders
        .create_order(two_item_draft(ProductId(1)))
        .await
        .unwrap();
    let second = system
        .orders
        .create_order(two_item_draft(ProductId(1)))
        .await
        .unwrap();

    let listed: Vec<OrderId> = system
        .orders
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|o| o.id)
        .collect();
    assert_eq!(listed, vec![second, first]);

    system.shutdown().await.expect("Shutdown failed");
}
