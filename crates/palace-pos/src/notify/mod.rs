//! Best-effort notification sidecar for order lifecycle events.

pub mod emitter;

pub use emitter::{LifecycleEvent, NotificationEmitter};
