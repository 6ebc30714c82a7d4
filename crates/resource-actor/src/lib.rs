//! # Resource Actor
//!
//! A small, type-safe actor framework for resource-oriented systems on Tokio.
//!
//! Each resource type (an order, a product, a table, …) gets one
//! [`ResourceActor`] that owns its in-memory store and processes requests
//! sequentially in its own task, and one cloneable [`ResourceClient`] that
//! the rest of the application talks to. The [`ActorEntity`] trait pins the
//! payload types for every operation at compile time.
//!
//! ## Design
//!
//! - **Resource-Oriented**: one standard lifecycle (Create, Get, List,
//!   Update, Delete) plus a typed `Action` escape hatch, instead of ad-hoc
//!   message enums per actor.
//! - **No locks**: an actor drains its channel one message at a time, so its
//!   store needs no `Mutex`. Actors still run in parallel with each other.
//! - **Late-bound dependencies**: contexts are injected via `run(context)`,
//!   not at construction, so interdependent actors can be created in any
//!   order.
//! - **Loud failures**: missing ids and rejected mutations come back as
//!   [`FrameworkError`] values, never as silent no-ops. Entity errors keep
//!   their concrete type inside the box so clients can downcast.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! let (actor, client) = ResourceActor::<Order>::new(32);
//! tokio::spawn(actor.run(context));
//! let id = client.create(draft).await?;
//! ```
//!
//! ## Testing
//!
//! [`mock::MockClient`] speaks the same channel protocol as a real actor but
//! answers from scripted expectations, which keeps client-logic tests
//! deterministic and actor-free.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
