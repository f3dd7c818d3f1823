//! # Observability & Tracing
//!
//! This module provides the tracing infrastructure for the entire actor system.
//!
//! ## Overview
//!
//! The [`setup_tracing`] function initializes structured logging with the
//! `tracing` crate, providing hierarchical spans that show the complete request
//! flow through the system.
//!
//! ## Configuration
//!
//! The system uses a compact format that hides the crate/module prefix
//! (`with_target(false)`). This keeps log lines short while still providing
//! rich structured data.
//!
//! - **Structured logging** with `tracing` crate
//! - **Hierarchical spans** for request tracing
//! - **Configurable log levels** via `RUST_LOG` environment variable
//! - **Compact format** optimized for development
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: Startup, shutdown, and final store size
//! - **Record Operations**: Create, Get, List, Update, Delete
//! - **Notifications**: One info line per broadcast, with channel and title
//! - **Errors**: Detailed error context with record IDs and failure reasons,
//!   including swallowed failures on the best-effort notification path
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show full payloads with debug logs
//! RUST_LOG=debug cargo run
//!
//! # Filter to specific modules
//! RUST_LOG=delivery_orders::framework=debug cargo run
//! ```
//!
//! ## Workflow Trace Example
//!
//! **With `RUST_LOG=info`** (compact):
//!
//! ```text
//! INFO Created customer_id="customer_1" size=1
//! INFO Created product_id="product_1" size=1
//! INFO Created menu_id="menu_1" size=1
//! INFO Sending create_order to actor
//! INFO Created order_id="order_1" size=1
//! INFO Broadcasting notification channel="notificacion" title="🎉 ¡Hay un nuevo pedido!"
//! ```
//!
//! **With `RUST_LOG=debug`**, client entry points additionally log the full
//! payload once at the start:
//!
//! ```rust,ignore
//! debug!(?draft, "create_order called");
//! ```
//!
//! The `?` syntax is a `tracing` macro feature that records the variable using
//! its `Debug` representation as a structured field.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact() // Compact format shows spans inline (e.g., "order_processing:create_order")
        .init();
}
