//! Customer-specific resource logic and entity implementation.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::CustomerClient;
use crate::framework::ResourceActor;
use crate::model::Customer;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Creates a new Customer actor and its client.
pub fn new() -> (ResourceActor<Customer>, CustomerClient) {
    let customer_id_counter = Arc::new(AtomicU64::new(1));
    let next_customer_id = move || {
        let id = customer_id_counter.fetch_add(1, Ordering::SeqCst);
        format!("customer_{}", id)
    };

    let (actor, generic_client) = ResourceActor::new(32, next_customer_id);
    let client = CustomerClient::new(generic_client);

    (actor, client)
}
