//! # Kitchen Board
//!
//! Pure classification of the order collection into the five status buckets
//! that drive the kitchen view. Cancelled orders stay in the store but are
//! invisible here.
//!
//! Classification is recomputed from scratch on every read; at the expected
//! scale (dozens to low hundreds of live orders) the O(n) walk is cheaper
//! than maintaining an incremental index.

use crate::model::{Order, OrderStatus};

/// The five status buckets. Pairwise disjoint; their union is the order set
/// minus cancelled orders. Each bucket preserves the input ordering
/// (most-recent-first when fed from the store).
#[derive(Debug, Clone, Default)]
pub struct KitchenBoard {
    pub pending: Vec<Order>,
    pub preparing: Vec<Order>,
    pub ready: Vec<Order>,
    pub delivering: Vec<Order>,
    pub delivered: Vec<Order>,
}

impl KitchenBoard {
    /// Partitions `orders` by status.
    pub fn classify(orders: &[Order]) -> Self {
        let mut board = Self::default();
        for order in orders {
            match order.status {
                OrderStatus::Pending => board.pending.push(order.clone()),
                OrderStatus::Preparing => board.preparing.push(order.clone()),
                OrderStatus::Ready => board.ready.push(order.clone()),
                OrderStatus::Delivering => board.delivering.push(order.clone()),
                OrderStatus::Delivered => board.delivered.push(order.clone()),
                OrderStatus::Cancelled => {}
            }
        }
        board
    }

    /// Number of orders across all buckets.
    pub fn len(&self) -> usize {
        self.pending.len()
            + self.preparing.len()
            + self.ready.len()
            + self.delivering.len()
            + self.delivered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Orders the automation scheduler cares about: everything that still
    /// has a forward transition ahead of it.
    pub fn in_flight(&self) -> impl Iterator<Item = &Order> {
        self.pending
            .iter()
            .chain(&self.preparing)
            .chain(&self.ready)
            .chain(&self.delivering)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OrderId, OrderType, PaymentMethod, Priority};
    use chrono::Utc;

    fn order(id: u32, status: OrderStatus) -> Order {
        Order {
            id: OrderId(id),
            status,
            priority: Priority::Medium,
            items: Vec::new(),
            total: 10.0,
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

    #[test]
    fn buckets_are_disjoint_and_cover_non_cancelled() {
        let orders = vec![
            order(1, OrderStatus::Pending),
            order(2, OrderStatus::Preparing),
            order(3, OrderStatus::Ready),
            order(4, OrderStatus::Delivering),
            order(5, OrderStatus::Delivered),
            order(6, OrderStatus::Cancelled),
            order(7, OrderStatus::Pending),
        ];

        let board = KitchenBoard::classify(&orders);

        // Union equals input minus the cancelled order.
        assert_eq!(board.len(), 6);

        // Disjointness: every order id appears in exactly one bucket.
        let mut seen: Vec<u32> = board
            .pending
            .iter()
            .chain(&board.preparing)
            .chain(&board.ready)
            .chain(&board.delivering)
            .chain(&board.delivered)
            .map(|o| o.id.0)
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![1, 2, 3, 4, 5, 7]);

        // The cancelled order is in no bucket.
        assert!(!seen.contains(&6));
    }

    #[test]
    fn in_flight_excludes_delivered() {
        let orders = vec![
            order(1, OrderStatus::Pending),
            order(2, OrderStatus::Delivered),
            order(3, OrderStatus::Delivering),
        ];
        let board = KitchenBoard::classify(&orders);
        let ids: Vec<u32> = board.in_flight().map(|o| o.id.0).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn empty_input_yields_empty_board() {
        let board = KitchenBoard::classify(&[]);
        assert!(board.is_empty());
    }
}
