//! # Notification Emitter
//!
//! Fire-and-forget side channel for order lifecycle events. Every event
//! produces a structured log line (the operator-facing "toast") and, when a
//! webhook URL is configured, a detached `POST` of the JSON envelope
//!
//! ```json
//! { "event": "new_order", "timestamp": "<ISO-8601>", "data": { ... } }
//! ```
//!
//! Delivery is at-most-once by contract: failures are logged at `warn` and
//! never retried, and nothing downstream blocks on the request. Callers must
//! not depend on a webhook arriving.

use crate::model::{Order, OrderId, OrderStatus};
use chrono::Utc;
use serde_json::json;
use tracing::{debug, info, warn};

/// An order lifecycle event worth announcing.
#[derive(Debug, Clone)]
pub enum LifecycleEvent {
    NewOrder {
        order: Order,
    },
    StatusUpdate {
        order_id: OrderId,
        previous_status: OrderStatus,
        new_status: OrderStatus,
    },
    CancelOrder {
        order_id: OrderId,
        reason: Option<String>,
    },
    /// Manual connectivity check from the settings screen.
    Test {
        message: String,
    },
}

impl LifecycleEvent {
    /// Wire name used in the envelope's `event` field.
    pub fn name(&self) -> &'static str {
        match self {
            LifecycleEvent::NewOrder { .. } => "new_order",
            LifecycleEvent::StatusUpdate { .. } => "status_update",
            LifecycleEvent::CancelOrder { .. } => "cancel_order",
            LifecycleEvent::Test { .. } => "test_webhook",
        }
    }

    fn data(&self) -> serde_json::Value {
        match self {
            LifecycleEvent::NewOrder { order } => {
                serde_json::to_value(order).unwrap_or(serde_json::Value::Null)
            }
            LifecycleEvent::StatusUpdate {
                order_id,
                previous_status,
                new_status,
            } => json!({
                "order_id": order_id,
                "previous_status": previous_status,
                "new_status": new_status,
            }),
            LifecycleEvent::CancelOrder { order_id, reason } => json!({
                "order_id": order_id,
                "reason": reason,
            }),
            LifecycleEvent::Test { message } => json!({ "message": message }),
        }
    }
}

/// Cheap-to-clone emitter handle. One instance is shared with every actor
/// context that announces events.
#[derive(Clone)]
pub struct NotificationEmitter {
    http: reqwest::Client,
    webhook_url: Option<String>,
}

impl NotificationEmitter {
    pub fn new(webhook_url: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            webhook_url,
        }
    }

    /// Emitter with no webhook target; events only reach the log.
    pub fn disabled() -> Self {
        Self::new(None)
    }

    pub fn has_webhook(&self) -> bool {
        self.webhook_url.is_some()
    }

    /// Announces an event. Returns immediately; webhook delivery happens on a
    /// detached task. Must be called from within a Tokio runtime.
    pub fn emit(&self, event: LifecycleEvent) {
        info!(event = event.name(), "notification");

        let Some(url) = self.webhook_url.clone() else {
            return;
        };

        let envelope = json!({
            "event": event.name(),
            "timestamp": Utc::now().to_rfc3339(),
            "data": event.data(),
        });
        let http = self.http.clone();
        tokio::spawn(async move {
            match http.post(&url).json(&envelope).send().await {
                Ok(response) => {
                    debug!(status = %response.status(), "webhook delivered");
                }
                Err(e) => {
                    warn!(error = %e, "webhook delivery failed");
                }
            }
        });
    }
}
