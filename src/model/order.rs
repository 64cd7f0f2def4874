use crate::model::DishId;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Status given to every freshly taken order.
pub const DEFAULT_STATUS: &str = "received";

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<OrderId> for u32 {
    fn from(id: OrderId) -> Self {
        id.0
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents a customer order.
///
/// # Store
/// This struct implements the [`Entity`](crate::framework::Entity) trait,
/// allowing it to be managed by a [`ResourceStore`](crate::framework::ResourceStore).
///
/// Orders reference dishes by [`DishId`] only. The ids are resolved against the
/// current menu whenever the order is read, so a dish removed after the order was
/// taken simply drops out of the order's dish list and total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "order_id")]
    pub id: OrderId,
    pub customer_name: String,
    pub dish_ids: Vec<DishId>,
    /// Free-form lifecycle label, e.g. `received`, `preparing`, `served`.
    pub status: String,
}

impl Order {
    /// Creates a new Order with status [`DEFAULT_STATUS`].
    pub fn new(id: OrderId, customer_name: impl Into<String>, dish_ids: Vec<DishId>) -> Self {
        Self {
            id,
            customer_name: customer_name.into(),
            dish_ids,
            status: DEFAULT_STATUS.to_string(),
        }
    }
}

/// Payload for taking a new order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub customer_name: String,
    pub dish_ids: Vec<DishId>,
}

/// Payload for moving an order to a new status.
#[derive(Debug, Clone)]
pub struct OrderUpdate {
    pub status: String,
}
