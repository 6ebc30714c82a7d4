//! # System Lifecycle & Orchestration
//!
//! Individual actors are simple; wiring them together is where the
//! complexity lives. [`PosSystem`] is the conductor: it creates all actors,
//! injects their dependencies at `run()` time (the order actor receives the
//! notification emitter this way), keeps the task handles, and coordinates
//! graceful shutdown.
//!
//! ## Shutdown
//!
//! 1. Drop every client — the sender sides of the channels close.
//! 2. Each actor's `recv()` returns `None`; it logs its final state and
//!    exits.
//! 3. Await all task handles.
//!
//! Because the dependency graph is acyclic (only the order actor holds a
//! context, and the emitter owns no channel to another actor), dropping the
//! clients is sufficient; no explicit shutdown message is needed.

pub mod system;

pub use system::PosSystem;
