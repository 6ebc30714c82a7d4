//! The `PosSystem` orchestrator: creates every actor, wires the notification
//! emitter into the order actor's context, and owns the task handles for
//! graceful shutdown.

use crate::clients::{CustomerClient, OrderClient, ProductClient, TableClient};
use crate::config::PosConfig;
use crate::kitchen::{KitchenAutomation, KitchenBoard};
use crate::model::{customer_stats, CustomerId, CustomerStats};
use crate::notify::NotificationEmitter;
use crate::order_actor::OrderError;
use crate::{customer_actor, order_actor, product_actor, table_actor};
use resource_actor::ActorClient;
use tracing::info;

/// The running point-of-sale system.
///
/// Construction spawns one Tokio task per actor. Shutdown works by dropping
/// every client — each actor drains its channel and exits — and then
/// awaiting the task handles. Clients cloned out of this struct (including
/// the one inside a [`KitchenAutomation`]) keep their actor alive; drop them
/// before expecting `shutdown` to return.
pub struct PosSystem {
    pub orders: OrderClient,
    pub products: ProductClient,
    pub tables: TableClient,
    pub customers: CustomerClient,
    pub emitter: NotificationEmitter,
    config: PosConfig,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl PosSystem {
    /// Builds the system from settings, deriving the webhook emitter from
    /// the config.
    pub fn new(config: PosConfig) -> Self {
        let emitter = NotificationEmitter::new(config.webhook.target());
        Self::with_emitter(config, emitter)
    }

    /// Builds the system with an explicit emitter. Tests use this to plug in
    /// a silent one.
    pub fn with_emitter(config: PosConfig, emitter: NotificationEmitter) -> Self {
        let (order_actor, orders) = order_actor::new();
        let (product_actor, products) = product_actor::new();
        let (table_actor, tables) = table_actor::new();
        let (customer_actor, customers) = customer_actor::new();

        let handles = vec![
            tokio::spawn(order_actor.run(emitter.clone())),
            tokio::spawn(product_actor.run(())),
            tokio::spawn(table_actor.run(())),
            tokio::spawn(customer_actor.run(())),
        ];

        info!(
            webhook = emitter.has_webhook(),
            automation = config.automation.enabled,
            "POS system started"
        );

        Self {
            orders,
            products,
            tables,
            customers,
            emitter,
            config,
            handles,
        }
    }

    /// A fresh automation scheduler bound to this system's order store,
    /// using the configured duration table.
    pub fn kitchen_automation(&self) -> KitchenAutomation {
        KitchenAutomation::new(self.orders.clone(), self.config.automation.clone())
    }

    /// Current snapshot of the kitchen board.
    pub async fn kitchen_board(&self) -> Result<KitchenBoard, OrderError> {
        let orders = self.orders.list().await?;
        Ok(KitchenBoard::classify(&orders))
    }

    /// Spending aggregates for one customer, derived from the live order
    /// list on every call.
    pub async fn customer_stats(&self, customer: &CustomerId) -> Result<CustomerStats, OrderError> {
        let orders = self.orders.list().await?;
        Ok(customer_stats(&orders, customer))
    }

    /// Drops every client and waits for all actors to drain and exit.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("POS system shutting down");
        let PosSystem {
            orders,
            products,
            tables,
            customers,
            emitter,
            config: _,
            handles,
        } = self;
        drop(orders);
        drop(products);
        drop(tables);
        drop(customers);
        drop(emitter);

        for handle in handles {
            handle.await.map_err(|e| e.to_string())?;
        }
        info!("POS system stopped");
        Ok(())
    }
}
