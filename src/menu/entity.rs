//! Entity trait implementation for the Dish domain type.
//!
//! This module contains the [`Entity`] trait implementation
//! that enables [`Dish`] to be managed by the generic [`crate::framework::ResourceStore`].

use super::MenuError;
use crate::framework::Entity;
use crate::model::{Dish, DishCreate, DishId, DishUpdate};

impl Entity for Dish {
    type Id = DishId;
    type Create = DishCreate;
    type Update = DishUpdate;
    type Context = ();
    type Error = MenuError;

    fn id(&self) -> DishId {
        self.id
    }

    fn set_id(&mut self, id: DishId) {
        self.id = id;
    }

    /// Creates a new Dish from creation parameters.
    ///
    /// Name and price are validated by the caller before they reach the menu.
    fn from_create_params(id: DishId, params: DishCreate) -> Result<Self, MenuError> {
        Ok(Self::new(id, params.name, params.price, params.availability))
    }

    /// Handles updates to the Dish entity.
    ///
    /// # Fields Updated
    /// - `availability`: whether the dish can be ordered
    fn on_update(&mut self, update: DishUpdate) -> Result<(), MenuError> {
        if let Some(availability) = update.availability {
            self.availability = availability;
        }
        Ok(())
    }
}
