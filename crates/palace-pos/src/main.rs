//! Demo entry point: boots the POS system, seeds a small catalog, places an
//! order, and lets the kitchen automation advance it once.
//!
//! ```bash
//! RUST_LOG=info cargo run -p palace-pos
//! ```

use palace_pos::config::PosConfig;
use palace_pos::kitchen::progress_percent;
use palace_pos::lifecycle::PosSystem;
use palace_pos::model::{
    CustomerCreate, OrderDraft, OrderItem, OrderType, PaymentMethod, PizzaSize, Priority,
    ProductCreate, TableCreate,
};
use resource_actor::tracing::setup_tracing;
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = PosConfig::load(Path::new("palace.toml"));
    let system = PosSystem::new(config);

    // Seed a minimal catalog and floor plan.
    let margherita = system
        .products
        .create_product(ProductCreate {
            name: "Margherita".to_string(),
            category: "Pizzas Tradicionais".to_string(),
            description: Some("Molho de tomate, mussarela e manjericão".to_string()),
            prices: BTreeMap::from([
                (PizzaSize::Small, 29.90),
                (PizzaSize::Medium, 39.90),
                (PizzaSize::Large, 45.90),
            ]),
        })
        .await
        .map_err(|e| e.to_string())?;

    system
        .tables
        .create_table(TableCreate {
            number: 1,
            capacity: 4,
        })
        .await
        .map_err(|e| e.to_string())?;

    let customer = system
        .customers
        .create_customer(CustomerCreate {
            name: "Ana Souza".to_string(),
            phone: "11 99999-0000".to_string(),
            address: Some("Rua das Flores, 123".to_string()),
        })
        .await
        .map_err(|e| e.to_string())?;

    let price = system
        .products
        .quote_price(margherita.clone(), PizzaSize::Large)
        .await
        .map_err(|e| e.to_string())?;

    let draft = OrderDraft {
        items: vec![OrderItem {
            product_id: margherita,
            product_name: "Margherita".to_string(),
            quantity: 1,
            size: PizzaSize::Large,
            unit_price: price,
            customization: None,
        }],
        priority: Priority::Medium,
        customer_id: Some(customer),
        customer_name: "Ana Souza".to_string(),
        phone: "11 99999-0000".to_string(),
        order_type: OrderType::Delivery,
        table_id: None,
        delivery_address: Some("Rua das Flores, 123".to_string()),
        payment_method: PaymentMethod::Pix,
        notes: None,
    };

    let span = tracing::info_span!("order_processing");
    let order_id = async {
        info!("Placing order");
        system.orders.create_order(draft).await
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    info!(order_id = %order_id, "Order placed");

    // Let the automation advance Pending -> Preparing.
    let mut automation = system.kitchen_automation();
    automation.resync().await.map_err(|e| e.to_string())?;
    tokio::time::sleep(Duration::from_secs(3)).await;

    let board = system.kitchen_board().await.map_err(|e| e.to_string())?;
    info!(
        pending = board.pending.len(),
        preparing = board.preparing.len(),
        "Kitchen board after automation"
    );
    if let Some(order) = board.preparing.first() {
        info!(
            order_id = %order.id,
            progress = progress_percent(order.status),
            "Order in preparation"
        );
    }

    drop(automation);
    system.shutdown().await?;

    info!("Demo finished");
    Ok(())
}
