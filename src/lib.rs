//! # Delivery Orders
//!
//! > **Order lifecycle and notification broadcast for a food-delivery platform, on resource-oriented actors.**
//!
//! This crate manages delivery orders end to end: creating an order from a menu
//! selection, mutating it as status and assignment change, and broadcasting a
//! notification to every connected observer when a new order lands. State lives
//! in actor-backed record stores; fan-out goes over a single shared broadcast
//! channel.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Why ROA + Actor Model?
//!
//! - **Resource-Oriented Architecture (ROA)**: Standard CRUD operations on
//!   well-defined records (Customer, Product, Menu, Order).
//! - **Actor Model**: Isolated state with message-passing concurrency. Each
//!   store processes its messages sequentially, which gives every record an
//!   atomic read-modify-write without a single lock.
//!
//! ### The Price Invariant
//!
//! An order's `total_price` is always `menu.price * quantity`. It is derived
//! when the order is placed and re-derived by the order actor whenever a patch
//! touches `menu_id` or `quantity`; no caller can set it directly.
//!
//! ### Fire-and-Forget Notifications
//!
//! Order creation publishes exactly one event on the well-known channel
//! `"notificacion"`. Delivery is best-effort: zero subscribers, a slow
//! subscriber, or a dead subscriber can never fail (or roll back) the order
//! that triggered the event. Updates and deletes publish nothing.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic `ResourceActor<T>` record store that powers every entity type.
//! - **Role**: Separates the *business logic* (your entity) from the *plumbing*
//!   (channels, message loops, error handling).
//! - **Key items**: [`ActorEntity`](framework::ActorEntity), [`ResourceActor`](framework::ResourceActor).
//!
//! ### 2. The Records ([`model`])
//! Pure data structures and their Create/Update DTOs.
//!
//! ### 3. The Interface ([`clients`])
//! Domain clients wrapping the generic `ResourceClient`. The
//! [`OrderClient`](clients::OrderClient) is where the order lifecycle lives:
//! price derivation, menu gating, and the post-commit creation broadcast.
//!
//! ### 4. The Implementations ([`customer_actor`], [`product_actor`], [`menu_actor`], [`order_actor`])
//! Concrete [`ActorEntity`](framework::ActorEntity) implementations. The order
//! entity's `on_update` carries the partial-update price rules.
//!
//! ### 5. The Fan-Out ([`notifier`])
//! The shared broadcast channel and the `{title, message, timestamp, extra}`
//! event shape published on `"notificacion"`.
//!
//! ### 6. The Orchestrator ([`lifecycle`])
//! [`DeliverySystem`](lifecycle::DeliverySystem) spins everything up, wires the
//! dependencies, and shuts it all down.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//! ```
//!
//! ## 🧪 Testing
//!
//! See [`framework::mock`] for utilities to test clients without spawning full
//! actors, and `tests/` for the system-level suites.

pub mod clients;
pub mod customer_actor;
pub mod framework;
pub mod lifecycle;
pub mod menu_actor;
pub mod model;
pub mod notifier;
pub mod order_actor;
pub mod product_actor;
