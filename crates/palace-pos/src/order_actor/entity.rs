//! `ActorEntity` implementation for [`Order`].
//!
//! This is where the lifecycle rules live: draft validation at creation,
//! the status state machine on update, cancellation as an action, and the
//! archive gate on delete. The injected context is the notification emitter;
//! every externally visible lifecycle change is announced through it.

use crate::model::{Order, OrderDraft, OrderId, OrderStatus, OrderUpdate};
use crate::notify::{LifecycleEvent, NotificationEmitter};
use crate::order_actor::{OrderAction, OrderError};
use async_trait::async_trait;
use chrono::Utc;
use resource_actor::ActorEntity;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderDraft;
    type Update = OrderUpdate;
    type Action = OrderAction;
    type ActionResult = ();
    type Context = NotificationEmitter;
    type Error = OrderError;

    /// Builds the order from a validated draft. The total is computed here,
    /// once; items never change afterwards.
    fn from_create_params(id: OrderId, draft: OrderDraft) -> Result<Self, OrderError> {
        draft.validate().map_err(OrderError::Validation)?;

        let total = Order::compute_total(&draft.items);
        Ok(Order {
            id,
            status: OrderStatus::Pending,
            priority: draft.priority,
            items: draft.items,
            total,
            created_at: Utc::now(),
            customer_id: draft.customer_id,
            customer_name: draft.customer_name,
            phone: draft.phone,
            order_type: draft.order_type,
            table_id: draft.table_id,
            delivery_address: draft.delivery_address,
            payment_method: draft.payment_method,
            notes: draft.notes,
        })
    }

    async fn on_create(&mut self, emitter: &NotificationEmitter) -> Result<(), OrderError> {
        emitter.emit(LifecycleEvent::NewOrder {
            order: self.clone(),
        });
        Ok(())
    }

    /// Applies a status and/or priority change. Status moves are checked
    /// against the state machine; priority is freely mutable.
    async fn on_update(
        &mut self,
        update: OrderUpdate,
        emitter: &NotificationEmitter,
    ) -> Result<(), OrderError> {
        if let Some(new_status) = update.status {
            if !self.status.can_transition_to(new_status) {
                return Err(OrderError::IllegalTransition {
                    from: self.status,
                    to: new_status,
                });
            }
            let previous = self.status;
            self.status = new_status;
            emitter.emit(LifecycleEvent::StatusUpdate {
                order_id: self.id.clone(),
                previous_status: previous,
                new_status,
            });
        }
        if let Some(priority) = update.priority {
            self.priority = priority;
        }
        Ok(())
    }

    /// Archive gate: a record may only leave the store once it is closed.
    /// Archival is silent; the cancellation notification belongs to the
    /// cancel action alone.
    async fn on_delete(&self, _emitter: &NotificationEmitter) -> Result<(), OrderError> {
        if !self.status.is_terminal() {
            return Err(OrderError::NotArchivable(self.status));
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        emitter: &NotificationEmitter,
    ) -> Result<(), OrderError> {
        match action {
            OrderAction::Cancel { reason } => {
                if self.status.is_terminal() {
                    return Err(OrderError::AlreadyClosed(self.status));
                }
                self.status = OrderStatus::Cancelled;
                emitter.emit(LifecycleEvent::CancelOrder {
                    order_id: self.id.clone(),
                    reason,
                });
                Ok(())
            }
        }
    }
}
