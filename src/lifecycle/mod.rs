//! # System Lifecycle & Orchestration
//!
//! This module manages the runtime lifecycle of the delivery platform's actor
//! system: starting the record-store actors, wiring their dependencies, and
//! shutting everything down cleanly.
//!
//! ## The Orchestration Pattern
//!
//! Individual actors are simple; **wiring them together** is where complexity
//! lives. [`DeliverySystem`] is the conductor:
//!
//! 1. **Actor Creation** - Instantiate all actors and their clients
//! 2. **Dependency Injection** - Wire actors together via context injection
//! 3. **Lifecycle Management** - Start actors in the correct order
//! 4. **Graceful Shutdown** - Coordinate clean termination of all actors
//!
//! ## Dependency Injection via Context
//!
//! Dependencies are injected at **runtime** via `run(context)`, not at
//! construction time. Customer, Product and Menu actors have no dependencies
//! (`Context = ()`); the Order actor receives a `MenuClient` so its update
//! hook can re-derive prices. The creation workflow's wider dependency set
//! (menu, product, customer stores and the notifier) belongs to the
//! [`OrderClient`](crate::clients::OrderClient) instead.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - Closes the sender side of the channels
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Actors clean up** - Process remaining messages, log final state
//! 4. **Await completion** - Wait for all actor tasks to finish
//!
//! The dependency graph is acyclic (Order holds a MenuClient clone in its
//! context), so dropping the public clients is enough: the order actor exits
//! first, releasing its menu handle, and the menu actor follows.
//!
//! ## Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging for the entire system;
//! see the [`tracing`] module for output formats and `RUST_LOG` usage.

pub mod delivery_system;
pub mod tracing;

pub use self::delivery_system::*;
pub use self::tracing::*;
