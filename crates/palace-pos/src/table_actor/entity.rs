//! `ActorEntity` implementation for [`Table`].

use crate::model::{Reservation, Table, TableCreate, TableId, TableUpdate};
use crate::table_actor::{TableAction, TableError};
use async_trait::async_trait;
use resource_actor::ActorEntity;

#[async_trait]
impl ActorEntity for Table {
    type Id = TableId;
    type Create = TableCreate;
    type Update = TableUpdate;
    type Action = TableAction;
    type ActionResult = ();
    type Context = ();
    type Error = TableError;

    fn from_create_params(id: TableId, params: TableCreate) -> Result<Self, TableError> {
        Ok(Table {
            id,
            number: params.number,
            capacity: params.capacity,
            available: true,
            reservation: None,
            merged_tables: Vec::new(),
        })
    }

    async fn on_update(&mut self, update: TableUpdate, _ctx: &()) -> Result<(), TableError> {
        if let Some(capacity) = update.capacity {
            self.capacity = capacity;
        }
        if let Some(available) = update.available {
            self.available = available;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: TableAction, _ctx: &()) -> Result<(), TableError> {
        match action {
            TableAction::Reserve { name, time } => {
                if !self.available {
                    return Err(TableError::Unavailable(self.number));
                }
                self.reservation = Some(Reservation { name, time });
                self.available = false;
                Ok(())
            }
            TableAction::Release => {
                if self.reservation.is_none() {
                    return Err(TableError::NotReserved(self.number));
                }
                self.reservation = None;
                self.available = true;
                Ok(())
            }
            TableAction::Merge { others } => {
                if others.is_empty() {
                    return Err(TableError::EmptyMerge);
                }
                for id in others {
                    if id != self.id && !self.merged_tables.contains(&id) {
                        self.merged_tables.push(id);
                    }
                }
                Ok(())
            }
            TableAction::Split => {
                if self.merged_tables.is_empty() {
                    return Err(TableError::NotMerged(self.number));
                }
                self.merged_tables.clear();
                Ok(())
            }
        }
    }
}
