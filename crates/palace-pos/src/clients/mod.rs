//! Typed client wrappers over the generic `ResourceClient`.
//!
//! The rest of the application never touches raw message passing; each
//! wrapper names its domain operations and translates framework errors back
//! into the actor's own error enum (downcasting the boxed entity error, so
//! callers can match on concrete variants).

pub mod customer_client;
pub mod order_client;
pub mod product_client;
pub mod table_client;

pub use customer_client::CustomerClient;
pub use order_client::OrderClient;
pub use product_client::ProductClient;
pub use table_client::TableClient;
