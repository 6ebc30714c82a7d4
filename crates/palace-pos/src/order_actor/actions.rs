//! Custom actions for the Order actor.

/// Operations on an order that fall outside the CRUD shape.
///
/// Cancellation is an action rather than a status update because it carries a
/// reason and fires its own notification. Archival is not here: it is the
/// delete operation, gated by `on_delete`.
#[derive(Debug, Clone)]
pub enum OrderAction {
    Cancel { reason: Option<String> },
}
