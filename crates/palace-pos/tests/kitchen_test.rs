//! Kitchen automation tests against a live order actor, on paused Tokio time
//! so the timers fire instantly.

use palace_pos::clients::OrderClient;
use palace_pos::config::PosConfig;
use palace_pos::lifecycle::PosSystem;
use palace_pos::model::{
    OrderDraft, OrderId, OrderItem, OrderStatus, OrderType, PaymentMethod, PizzaSize, Priority,
    ProductId,
};
use palace_pos::notify::NotificationEmitter;
use resource_actor::ActorClient;
use std::time::Duration;

fn fast_config() -> PosConfig {
    let mut config = PosConfig::default();
    config.automation.pending_secs = 2;
    config.automation.preparing_secs = 1;
    config.automation.ready_secs = 1;
    config.automation.delivering_secs = 1;
    config
}

fn fast_system() -> PosSystem {
    PosSystem::with_emitter(fast_config(), NotificationEmitter::disabled())
}

fn draft() -> OrderDraft {
    OrderDraft {
        items: vec![OrderItem {
            product_id: ProductId(1),
            product_name: "Calabresa".to_string(),
            quantity: 1,
            size: PizzaSize::Medium,
            unit_price: 39.90,
            customization: None,
        }],
        priority: Priority::Medium,
        customer_id: None,
        customer_name: "Davi Rocha".to_string(),
        phone: "11 96666-0000".to_string(),
        order_type: OrderType::Pickup,
        table_id: None,
        delivery_address: None,
        payment_method: PaymentMethod::Pix,
        notes: None,
    }
}

async fn wait_for_status(orders: &OrderClient, id: &OrderId, expected: OrderStatus) {
    for _ in 0..200 {
        let order = orders
            .get(id.clone())
            .await
            .expect("Failed to get order")
            .expect("Order not found");
        if order.status == expected {
            return;
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    panic!("order never reached {expected}");
}

#[tokio::test(start_paused = true)]
async fn test_automation_advances_pending_orders() {
    let system = fast_system();
    let order_id = system.orders.create_order(draft()).await.unwrap();

    let mut automation = system.kitchen_automation();
    automation.resync().await.expect("Resync failed");
    assert_eq!(automation.scheduled_len(), 1);

    wait_for_status(&system.orders, &order_id, OrderStatus::Preparing).await;

    // Each resync arms the next stage.
    automation.resync().await.expect("Resync failed");
    wait_for_status(&system.orders, &order_id, OrderStatus::Ready).await;

    let board = system.kitchen_board().await.expect("Failed to classify");
    assert_eq!(board.ready.len(), 1);
    assert_eq!(board.pending.len(), 0);

    drop(automation);
    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test(start_paused = true)]
async fn test_resync_against_live_store_is_idempotent() {
    let system = fast_system();
    let order_id = system.orders.create_order(draft()).await.unwrap();

    let mut automation = system.kitchen_automation();
    automation.resync().await.expect("Resync failed");
    let seq = automation.scheduled_seq(&order_id).expect("No timer armed");

    automation.resync().await.expect("Resync failed");
    assert_eq!(automation.scheduled_len(), 1);
    assert_eq!(automation.scheduled_seq(&order_id), Some(seq));

    drop(automation);
    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test(start_paused = true)]
async fn test_disabled_automation_leaves_orders_alone() {
    let system = fast_system();
    let order_id = system.orders.create_order(draft()).await.unwrap();

    let mut automation = system.kitchen_automation();
    automation.resync().await.expect("Resync failed");
    automation.set_enabled(false);
    assert_eq!(automation.scheduled_len(), 0);

    // Well past every configured delay.
    tokio::time::sleep(Duration::from_secs(30)).await;
    let order = system.orders.get(order_id).await.unwrap().unwrap();
    assert_eq!(order.status, OrderStatus::Pending);

    drop(automation);
    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test(start_paused = true)]
async fn test_stale_timer_fire_is_absorbed() {
    let system = fast_system();
    let order_id = system.orders.create_order(draft()).await.unwrap();

    let mut automation = system.kitchen_automation();
    automation.resync().await.expect("Resync failed");

    // An operator advances the order by hand before the timer fires.
    system
        .orders
        .update_status(order_id.clone(), OrderStatus::Preparing)
        .await
        .expect("Manual transition failed");

    // The stale timer fires, the actor rejects the duplicate transition, and
    // the order stays where the operator put it.
    tokio::time::sleep(Duration::from_secs(30)).await;
    let order = system.orders.get(order_id.clone()).await.unwrap().unwrap();
    assert_eq!(order.status, OrderStatus::Preparing);

    drop(automation);
    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test(start_paused = true)]
async fn test_cancelled_order_timer_is_dropped_on_resync() {
    let system = fast_system();
    let order_id = system.orders.create_order(draft()).await.unwrap();
    let other_id = system.orders.create_order(draft()).await.unwrap();

    let mut automation = system.kitchen_automation();
    automation.resync().await.expect("Resync failed");
    assert_eq!(automation.scheduled_len(), 2);

    system
        .orders
        .cancel_order(order_id.clone(), None)
        .await
        .expect("Failed to cancel");
    automation.resync().await.expect("Resync failed");
    assert_eq!(automation.scheduled_len(), 1);
    assert!(automation.scheduled_from(&order_id).is_none());

    // The surviving order still advances.
    wait_for_status(&system.orders, &other_id, OrderStatus::Preparing).await;

    drop(automation);
    system.shutdown().await.expect("Shutdown failed");
}
