//! Pure domain data structures.
//!
//! Everything here is plain data plus invariant checks; the actors in the
//! sibling modules give these types a lifecycle.

pub mod customer;
pub mod order;
pub mod product;
pub mod table;

pub use customer::{
    customer_stats, Customer, CustomerCreate, CustomerId, CustomerStats, CustomerUpdate,
};
pub use order::{
    Order, OrderDraft, OrderId, OrderItem, OrderStatus, OrderType, OrderUpdate, PaymentMethod,
    Priority,
};
pub use product::{PizzaSize, Product, ProductCreate, ProductId, ProductUpdate};
pub use table::{Reservation, Table, TableCreate, TableId, TableUpdate};
