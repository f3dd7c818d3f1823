use serde::{Deserialize, Serialize};

/// A restaurant-specific listing of a product, with its own price.
///
/// The menu price is what orders are billed against; it may differ from the
/// base product price.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    pub id: String,
    pub product_id: String,
    pub price: f64,
    pub available: bool,
}

/// Payload for creating a menu listing. `available` defaults to true.
#[derive(Debug, Clone)]
pub struct MenuCreate {
    pub product_id: String,
    pub price: f64,
    pub available: Option<bool>,
}

/// Patch for updating a menu listing.
///
/// Price changes affect future orders only; existing orders keep the price
/// captured when they were created or last re-derived.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuUpdate {
    pub price: Option<f64>,
    pub available: Option<bool>,
}
