use serde::{Deserialize, Serialize};

/// Well-known order lifecycle labels.
///
/// The `status` field is an open string; these are the values the rest of the
/// platform conventionally writes into it.
pub mod status {
    pub const PENDING: &str = "pending";
    pub const IN_PROGRESS: &str = "in_progress";
    pub const DELIVERED: &str = "delivered";
    pub const CANCELLED: &str = "cancelled";
}

/// Represents a customer's delivery order for a single menu item.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// # Price Invariant
/// `total_price` is always `menu.price * quantity` for the referenced menu item.
/// It is derived at creation and re-derived on every update that touches
/// `menu_id` or `quantity`; nothing else is allowed to write it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub customer_id: String,
    pub menu_id: String,
    /// Delivery vehicle assignment; `None` until dispatch assigns one.
    pub motorcycle_id: Option<String>,
    pub quantity: u32,
    pub total_price: f64,
    pub status: String,
}

/// Store-level payload for creating an order.
///
/// `total_price` is present here because the lifecycle layer derives it from
/// the referenced menu *before* the store is asked to persist anything; see
/// [`OrderClient::create_order`](crate::clients::OrderClient::create_order).
/// Callers never supply it directly; they go through [`OrderDraft`].
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub customer_id: String,
    pub menu_id: String,
    pub motorcycle_id: Option<String>,
    pub quantity: u32,
    pub total_price: f64,
    pub status: String,
}

/// Caller-facing payload for placing an order.
///
/// `quantity` defaults to 1 and `status` to `"pending"` when omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDraft {
    pub customer_id: String,
    pub menu_id: String,
    pub motorcycle_id: Option<String>,
    pub quantity: Option<u32>,
    pub status: Option<String>,
}

/// Patch for updating an existing order; only fields present are touched.
///
/// Setting `menu_id` or `quantity` triggers a `total_price` recomputation in
/// the order actor (see the entity's `on_update` rules).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub customer_id: Option<String>,
    pub menu_id: Option<String>,
    pub motorcycle_id: Option<String>,
    pub quantity: Option<u32>,
    pub status: Option<String>,
}
