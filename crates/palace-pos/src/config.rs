//! # Configuration
//!
//! TOML-backed settings with serde defaults. A missing or malformed file is
//! logged and replaced by defaults; the system never refuses to start over
//! configuration.
//!
//! ```toml
//! [automation]
//! enabled = true
//! pending_secs = 2
//! preparing_secs = 180
//! ready_secs = 120
//! delivering_secs = 1800
//!
//! [webhook]
//! url = "https://example.com/hooks/orders"
//! ```

use crate::model::OrderStatus;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::warn;

/// Top-level settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PosConfig {
    pub automation: AutomationConfig,
    pub webhook: WebhookConfig,
}

impl PosConfig {
    /// Loads settings from a TOML file, degrading to defaults on any error.
    pub fn load(path: &Path) -> Self {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "config not readable, using defaults");
                return Self::default();
            }
        };
        match toml::from_str(&raw) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "config malformed, using defaults");
                Self::default()
            }
        }
    }
}

/// Kitchen automation settings: the enable flag and the per-status wait
/// before the automatic forward transition.
///
/// One canonical duration table; the waits are configurable but there is a
/// single source of truth for every call site.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AutomationConfig {
    pub enabled: bool,
    pub pending_secs: u64,
    pub preparing_secs: u64,
    pub ready_secs: u64,
    pub delivering_secs: u64,
}

impl Default for AutomationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            pending_secs: 2,
            preparing_secs: 180,
            ready_secs: 120,
            delivering_secs: 1800,
        }
    }
}

impl AutomationConfig {
    /// Wait before the auto-transition out of `status`, or `None` for
    /// terminal states.
    pub fn delay_for(&self, status: OrderStatus) -> Option<Duration> {
        let secs = match status {
            OrderStatus::Pending => self.pending_secs,
            OrderStatus::Preparing => self.preparing_secs,
            OrderStatus::Ready => self.ready_secs,
            OrderStatus::Delivering => self.delivering_secs,
            OrderStatus::Delivered | OrderStatus::Cancelled => return None,
        };
        Some(Duration::from_secs(secs))
    }
}

/// Webhook sidecar settings. `url = ""` or an absent key disables delivery.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WebhookConfig {
    pub url: Option<String>,
}

impl WebhookConfig {
    /// The configured URL, treating an empty string as unset.
    pub fn target(&self) -> Option<String> {
        self.url.as_deref().filter(|u| !u.is_empty()).map(String::from)
    }
}
