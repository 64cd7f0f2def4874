//! # Order Book
//!
//! [`OrderManager`] owns every [`Order`] taken this session and earlier ones restored
//! from disk. It assigns order ids from its own counter, validates new orders against
//! the [`Menu`] passed in by the caller, and produces the listings the shell renders.
//!
//! ## Structure
//!
//! - [`entity`] - [`Entity`](crate::framework::Entity) implementation for [`Order`]
//! - [`error`] - [`OrderError`] type
//!
//! ## Weak dish references
//!
//! Orders keep dish ids, never dish copies. [`Order::dishes`] resolves them against the
//! menu as it is *now*: ids whose dish has since been removed are skipped, and so
//! contribute nothing to [`Order::total_price`].

pub mod entity;
pub mod error;

pub use error::*;

use crate::framework::ResourceStore;
use crate::menu::Menu;
use crate::model::{Dish, DishId, Order, OrderCreate, OrderId, OrderUpdate};
use crate::persistence::OrderBookDocument;
use tracing::{debug, info, instrument, warn};

impl Order {
    /// The menu's dishes that this order references, in menu order.
    ///
    /// Repeated ids resolve to a single dish; ids missing from the menu are dropped.
    pub fn dishes<'m>(&self, menu: &'m Menu) -> Vec<&'m Dish> {
        menu.dishes()
            .iter()
            .filter(|dish| self.dish_ids.contains(&dish.id))
            .collect()
    }

    /// Sum of the prices of [`Order::dishes`].
    pub fn total_price(&self, menu: &Menu) -> f64 {
        self.dishes(menu).iter().map(|dish| dish.price).sum()
    }
}

/// One row of an order listing, with dish references already resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary {
    pub id: OrderId,
    pub customer_name: String,
    pub dish_names: Vec<String>,
    pub total_price: f64,
    pub status: String,
}

impl OrderSummary {
    fn resolve(order: &Order, menu: &Menu) -> Self {
        let dishes = order.dishes(menu);
        Self {
            id: order.id,
            customer_name: order.customer_name.clone(),
            dish_names: dishes.iter().map(|dish| dish.name.clone()).collect(),
            total_price: dishes.iter().map(|dish| dish.price).sum(),
            status: order.status.clone(),
        }
    }
}

/// Result of [`OrderManager::list_orders`].
#[derive(Debug, Clone, PartialEq)]
pub enum OrderListing {
    /// No orders have been taken at all.
    Empty,
    /// Orders exist, but none has the requested status.
    NoMatch(String),
    /// Matching orders in creation order.
    Orders(Vec<OrderSummary>),
}

/// All orders, in the order they were taken.
#[derive(Debug, Clone, Default)]
pub struct OrderManager {
    store: ResourceStore<Order>,
}

impl OrderManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes a new order with status `received`.
    ///
    /// Every dish id must name a dish on `menu` whose availability is `yes`. Otherwise
    /// the order is rejected as a whole: nothing is stored and the id counter does not
    /// move. An empty `dish_ids` is a valid, zero-total order.
    #[instrument(skip(self, menu))]
    pub fn take_order(
        &mut self,
        menu: &Menu,
        customer_name: &str,
        dish_ids: Vec<DishId>,
    ) -> Result<OrderId, OrderError> {
        let params = OrderCreate {
            customer_name: customer_name.to_string(),
            dish_ids,
        };
        match self.store.create(params, menu) {
            Ok(id) => {
                info!(order_id = %id, "Order received");
                Ok(id)
            }
            Err(e) => {
                let e = OrderError::from(e);
                warn!(error = %e, "Order rejected");
                Err(e)
            }
        }
    }

    /// Overwrites the status of order `id`. Any text is accepted.
    #[instrument(skip(self))]
    pub fn update_status(&mut self, id: OrderId, status: &str) -> Result<Order, OrderError> {
        let update = OrderUpdate {
            status: status.to_string(),
        };
        let order = self.store.update(id, update)?.clone();
        info!(order_id = %id, status = %order.status, "Order status updated");
        Ok(order)
    }

    /// Lists orders in creation order, optionally only those whose status equals
    /// `status_filter` exactly (an empty filter matches only an empty status).
    pub fn list_orders(&self, menu: &Menu, status_filter: Option<&str>) -> OrderListing {
        debug!(?status_filter, total = self.store.len(), "Listing orders");
        if self.store.is_empty() {
            return OrderListing::Empty;
        }
        let rows: Vec<OrderSummary> = self
            .store
            .iter()
            .filter(|order| status_filter.map_or(true, |status| order.status == status))
            .map(|order| OrderSummary::resolve(order, menu))
            .collect();
        match (rows.is_empty(), status_filter) {
            (true, Some(status)) => OrderListing::NoMatch(status.to_string()),
            _ => OrderListing::Orders(rows),
        }
    }

    pub fn get(&self, id: OrderId) -> Option<&Order> {
        self.store.get(id)
    }

    pub fn orders(&self) -> &[Order] {
        self.store.as_slice()
    }

    /// The id the next accepted order will receive, or `None` once the ids have run out.
    pub fn next_order_id(&self) -> Option<OrderId> {
        self.store.next_id()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn to_document(&self) -> OrderBookDocument {
        OrderBookDocument {
            orders: self.store.as_slice().to_vec(),
            current_order_id: self.next_order_id(),
        }
    }

    /// Rebuilds the order book from its persisted form. Statuses are kept as stored.
    pub fn from_document(doc: OrderBookDocument) -> Self {
        let next_id = doc.current_order_id.map_or(1, u32::from);
        Self {
            store: ResourceStore::from_parts(doc.orders, next_id),
        }
    }
}
