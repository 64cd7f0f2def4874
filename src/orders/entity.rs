//! Entity trait implementation for the Order domain type.
//!
//! This module contains the [`Entity`] trait implementation
//! that enables [`Order`] to be managed by the generic [`crate::framework::ResourceStore`].
//!
//! Dish validation happens in `on_create`, which receives the [`Menu`] as its context.
//! A failed check rejects the whole order before anything is stored.

use super::OrderError;
use crate::framework::Entity;
use crate::menu::Menu;
use crate::model::{Order, OrderCreate, OrderId, OrderUpdate};
use tracing::debug;

impl Entity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Context = Menu;
    type Error = OrderError;

    fn id(&self) -> OrderId {
        self.id
    }

    fn set_id(&mut self, id: OrderId) {
        self.id = id;
    }

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        Ok(Self::new(id, params.customer_name, params.dish_ids))
    }

    /// Every referenced dish must be on the menu and available.
    /// The first failing id, in the order given, is reported.
    fn on_create(&mut self, menu: &Menu) -> Result<(), OrderError> {
        for &dish_id in &self.dish_ids {
            match menu.get(dish_id) {
                None => return Err(OrderError::UnknownDish(dish_id)),
                Some(dish) if !dish.is_available() => {
                    return Err(OrderError::DishUnavailable(dish_id))
                }
                Some(_) => debug!(order_id = %self.id, %dish_id, "Dish available"),
            }
        }
        Ok(())
    }

    /// Status is overwritten as given; there is no fixed set of statuses.
    fn on_update(&mut self, update: OrderUpdate) -> Result<(), OrderError> {
        self.status = update.status;
        Ok(())
    }
}
