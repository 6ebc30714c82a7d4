//! # Kitchen Automation Scheduler
//!
//! Timer-driven auto-advance of order status. For every order that still has
//! a forward transition ahead of it, the scheduler keeps exactly one
//! outstanding timer; when the timer fires, the order is advanced through the
//! Order actor like any manual update, so the state machine and the
//! notifications behave identically either way.
//!
//! ## Cancel-and-replace
//!
//! The legacy implementation re-armed a fresh timer on every recomputation of
//! the kitchen view and leaned on teardown to cancel the previous one; two
//! passes in a row could leave two competing timers for the same order. Here
//! the timers live in a map keyed by order id: a resync keeps an existing
//! timer when the order is still in the status it was scheduled from, and
//! aborts-then-replaces it otherwise. Resyncing an unchanged order set is a
//! no-op.
//!
//! ## Cleanup
//!
//! Timers are aborted when their order leaves the live set (archived,
//! delivered, cancelled), when automation is disabled, and when the scheduler
//! is dropped. A timer that fires after its order moved anyway is absorbed:
//! the actor rejects the stale transition and the scheduler logs it at
//! `warn`.

use crate::clients::OrderClient;
use crate::config::AutomationConfig;
use crate::model::{Order, OrderId, OrderStatus};
use crate::order_actor::OrderError;
use resource_actor::ActorClient;
use std::collections::{HashMap, HashSet};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// One outstanding auto-transition for one order.
struct ScheduledTransition {
    /// Status the order held when the timer was armed. A resync keeps the
    /// timer only while this still matches.
    from: OrderStatus,
    /// Monotonic arming counter, observable in tests to prove a resync did
    /// not silently re-arm an unchanged timer.
    seq: u64,
    handle: JoinHandle<()>,
}

/// Schedules one forward transition per in-flight order.
pub struct KitchenAutomation {
    orders: OrderClient,
    config: AutomationConfig,
    enabled: bool,
    timers: HashMap<OrderId, ScheduledTransition>,
    next_seq: u64,
}

impl KitchenAutomation {
    pub fn new(orders: OrderClient, config: AutomationConfig) -> Self {
        let enabled = config.enabled;
        Self {
            orders,
            config,
            enabled,
            timers: HashMap::new(),
            next_seq: 0,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables automation. Disabling aborts every outstanding
    /// timer immediately; nothing fires until the next resync after
    /// re-enabling.
    pub fn set_enabled(&mut self, enabled: bool) {
        if !enabled {
            self.clear();
        }
        if self.enabled != enabled {
            info!(enabled, "kitchen automation toggled");
        }
        self.enabled = enabled;
    }

    /// Fetches the current order set and reconciles the timer map against it.
    pub async fn resync(&mut self) -> Result<(), OrderError> {
        let orders = self.orders.list().await?;
        self.resync_with(&orders);
        Ok(())
    }

    /// Reconciles the timer map against a given order snapshot.
    ///
    /// Idempotent: running it twice on the same snapshot leaves every timer
    /// untouched.
    pub fn resync_with(&mut self, orders: &[Order]) {
        if !self.enabled {
            return;
        }

        let live: HashSet<&OrderId> = orders
            .iter()
            .filter(|o| !o.status.is_terminal())
            .map(|o| &o.id)
            .collect();
        let gone: Vec<OrderId> = self
            .timers
            .keys()
            .filter(|id| !live.contains(id))
            .cloned()
            .collect();
        for id in gone {
            if let Some(timer) = self.timers.remove(&id) {
                timer.handle.abort();
                debug!(%id, "timer dropped, order left the live set");
            }
        }

        for order in orders {
            let Some(next) = order.status.next() else {
                continue;
            };
            let Some(delay) = self.config.delay_for(order.status) else {
                continue;
            };

            if let Some(existing) = self.timers.get(&order.id) {
                if existing.from == order.status {
                    continue;
                }
            }
            if let Some(old) = self.timers.remove(&order.id) {
                old.handle.abort();
            }

            let seq = self.next_seq;
            self.next_seq += 1;
            let client = self.orders.clone();
            let id = order.id.clone();
            let handle = tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                match client.update_status(id.clone(), next).await {
                    Ok(updated) => {
                        debug!(%id, status = %updated.status, "auto-advanced");
                    }
                    Err(e) => {
                        // The order moved, was cancelled, or was archived
                        // between arming and firing. Stale fires are absorbed.
                        warn!(%id, error = %e, "scheduled transition skipped");
                    }
                }
            });
            debug!(id = %order.id, from = %order.status, ?delay, "timer armed");
            self.timers.insert(
                order.id.clone(),
                ScheduledTransition {
                    from: order.status,
                    seq,
                    handle,
                },
            );
        }
    }

    /// Number of outstanding timers.
    pub fn scheduled_len(&self) -> usize {
        self.timers.len()
    }

    /// Status the order's timer was armed from, if one is outstanding.
    pub fn scheduled_from(&self, id: &OrderId) -> Option<OrderStatus> {
        self.timers.get(id).map(|t| t.from)
    }

    /// Arming counter for the order's timer. Unchanged across an idempotent
    /// resync; bumped on cancel-and-replace.
    pub fn scheduled_seq(&self, id: &OrderId) -> Option<u64> {
        self.timers.get(id).map(|t| t.seq)
    }

    fn clear(&mut self) {
        for (_, timer) in self.timers.drain() {
            timer.handle.abort();
        }
    }
}

impl Drop for KitchenAutomation {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OrderType, PaymentMethod, Priority};
    use chrono::Utc;
    use resource_actor::mock::MockClient;

    fn order(id: u32, status: OrderStatus) -> Order {
        Order {
            id: OrderId(id),
            status,
            priority: Priority::Medium,
            items: Vec::new(),
            total: 30.0,
            created_at: Utc::now(),
            customer_id: None,
            customer_name: "Teste".into(),
            phone: "".into(),
            order_type: OrderType::Pickup,
            table_id: None,
            delivery_address: None,
            payment_method: PaymentMethod::Cash,
            notes: None,
        }
    }

    /// Delays long enough that no timer fires during a test; the scheduling
    /// bookkeeping is what is under test here.
    fn slow_config() -> AutomationConfig {
        AutomationConfig {
            enabled: true,
            pending_secs: 3600,
            preparing_secs: 3600,
            ready_secs: 3600,
            delivering_secs: 3600,
        }
    }

    fn automation() -> KitchenAutomation {
        let mock = MockClient::<Order>::new();
        KitchenAutomation::new(OrderClient::new(mock.client()), slow_config())
    }

    #[tokio::test]
    async fn resync_is_idempotent() {
        let mut automation = automation();
        let orders = vec![order(1, OrderStatus::Pending), order(2, OrderStatus::Ready)];

        automation.resync_with(&orders);
        assert_eq!(automation.scheduled_len(), 2);
        let seq_before = automation.scheduled_seq(&OrderId(1));

        automation.resync_with(&orders);
        assert_eq!(automation.scheduled_len(), 2);
        assert_eq!(automation.scheduled_seq(&OrderId(1)), seq_before);
    }

    #[tokio::test]
    async fn status_change_replaces_the_timer() {
        let mut automation = automation();

        automation.resync_with(&[order(1, OrderStatus::Pending)]);
        let seq_before = automation.scheduled_seq(&OrderId(1)).unwrap();
        assert_eq!(
            automation.scheduled_from(&OrderId(1)),
            Some(OrderStatus::Pending)
        );

        automation.resync_with(&[order(1, OrderStatus::Preparing)]);
        assert_eq!(automation.scheduled_len(), 1);
        assert_eq!(
            automation.scheduled_from(&OrderId(1)),
            Some(OrderStatus::Preparing)
        );
        assert!(automation.scheduled_seq(&OrderId(1)).unwrap() > seq_before);
    }

    #[tokio::test]
    async fn terminal_and_missing_orders_lose_their_timers() {
        let mut automation = automation();

        automation.resync_with(&[order(1, OrderStatus::Pending), order(2, OrderStatus::Ready)]);
        assert_eq!(automation.scheduled_len(), 2);

        // Order 1 was delivered, order 2 was archived out of the snapshot.
        automation.resync_with(&[order(1, OrderStatus::Delivered)]);
        assert_eq!(automation.scheduled_len(), 0);
    }

    #[tokio::test]
    async fn disabling_aborts_all_timers() {
        let mut automation = automation();

        automation.resync_with(&[order(1, OrderStatus::Pending)]);
        assert_eq!(automation.scheduled_len(), 1);

        automation.set_enabled(false);
        assert_eq!(automation.scheduled_len(), 0);

        // Resync while disabled schedules nothing.
        automation.resync_with(&[order(1, OrderStatus::Pending)]);
        assert_eq!(automation.scheduled_len(), 0);
    }
}
