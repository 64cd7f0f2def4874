//! # Menu
//!
//! The menu owns every [`Dish`] the canteen knows about, in the order they were added.
//!
//! ## Structure
//!
//! - [`entity`] - [`Entity`](crate::framework::Entity) implementation for [`Dish`]
//! - [`error`] - [`MenuError`] type
//! - [`Menu`] - The collection manager used by the shell and the order book
//!
//! ## Usage
//!
//! ```rust
//! use canteen::menu::Menu;
//! use canteen::model::Availability;
//!
//! let mut menu = Menu::new();
//! let soup = menu.add_dish("Soup", 5.0, Availability::Yes).unwrap();
//! menu.add_dish("Bread", 2.0, Availability::No).unwrap();
//!
//! let available = menu.list_available();
//! assert_eq!(available.len(), 1);
//! assert_eq!(available[0].id, soup);
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::framework::ResourceStore;
use crate::model::{Availability, Dish, DishCreate, DishId, DishUpdate};
use crate::persistence::MenuDocument;
use tracing::{debug, info, instrument};

/// The canteen's dishes, listed in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Menu {
    store: ResourceStore<Dish>,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a dish and returns the id it was given.
    ///
    /// Ids start at 1 and are never handed out twice, even after a removal.
    #[instrument(skip(self))]
    pub fn add_dish(
        &mut self,
        name: &str,
        price: f64,
        availability: Availability,
    ) -> Result<DishId, MenuError> {
        let params = DishCreate {
            name: name.to_string(),
            price,
            availability,
        };
        let id = self.store.create(params, &())?;
        info!(dish_id = %id, "Dish added to the menu");
        Ok(id)
    }

    /// Removes the dish with `id`. Orders that reference it are left as they are.
    #[instrument(skip(self))]
    pub fn remove_dish(&mut self, id: DishId) -> Result<Dish, MenuError> {
        let dish = self.store.delete(id)?;
        info!(dish_id = %id, name = %dish.name, "Dish removed from the menu");
        Ok(dish)
    }

    #[instrument(skip(self))]
    pub fn update_availability(
        &mut self,
        id: DishId,
        availability: Availability,
    ) -> Result<Dish, MenuError> {
        let update = DishUpdate {
            availability: Some(availability),
        };
        let dish = self.store.update(id, update)?.clone();
        info!(dish_id = %id, %availability, "Dish availability updated");
        Ok(dish)
    }

    pub fn get(&self, id: DishId) -> Option<&Dish> {
        self.store.get(id)
    }

    /// Every dish, available or not, in insertion order.
    pub fn dishes(&self) -> &[Dish] {
        self.store.as_slice()
    }

    /// Dishes whose availability is `yes`, in insertion order.
    /// An empty result means there is nothing to offer right now.
    pub fn list_available(&self) -> Vec<&Dish> {
        let available: Vec<&Dish> = self.store.iter().filter(|d| d.is_available()).collect();
        debug!(total = self.store.len(), available = available.len(), "Listed menu");
        available
    }

    /// The id the next added dish will receive, or `None` once the ids have run out.
    pub fn next_dish_id(&self) -> Option<DishId> {
        self.store.next_id()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn to_document(&self) -> MenuDocument {
        MenuDocument {
            dishes: self.store.as_slice().to_vec(),
            next_dish_id: self.next_dish_id(),
        }
    }

    /// Rebuilds a menu from its persisted form.
    ///
    /// Documents written without `next_dish_id` continue numbering after the largest id.
    pub fn from_document(doc: MenuDocument) -> Self {
        let next_id = doc.next_dish_id.map_or(1, u32::from);
        Self {
            store: ResourceStore::from_parts(doc.dishes, next_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_menu() -> Menu {
        let mut menu = Menu::new();
        menu.add_dish("Soup", 5.0, Availability::Yes).unwrap();
        menu.add_dish("Bread", 2.0, Availability::No).unwrap();
        menu.add_dish("Tea", 1.5, Availability::Yes).unwrap();
        menu
    }

    #[test]
    fn test_add_assigns_sequential_ids() {
        let menu = sample_menu();
        let ids: Vec<u32> = menu.dishes().iter().map(|d| d.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(menu.next_dish_id(), Some(DishId(4)));
    }

    #[test]
    fn test_ids_survive_removal_without_collision() {
        let mut menu = sample_menu();
        menu.remove_dish(DishId(1)).unwrap();
        let id = menu.add_dish("Cake", 3.0, Availability::Yes).unwrap();
        assert_eq!(id, DishId(4));
        assert_eq!(menu.get(DishId(4)).unwrap().name, "Cake");
        assert_eq!(menu.get(DishId(2)).unwrap().name, "Bread");
    }

    #[test]
    fn test_remove_twice_reports_not_found() {
        let mut menu = sample_menu();
        let removed = menu.remove_dish(DishId(2)).unwrap();
        assert_eq!(removed.name, "Bread");
        assert_eq!(menu.len(), 2);

        assert_eq!(
            menu.remove_dish(DishId(2)),
            Err(MenuError::NotFound(DishId(2)))
        );
        assert_eq!(menu.len(), 2);
    }

    #[test]
    fn test_update_availability() {
        let mut menu = sample_menu();
        let bread = menu.update_availability(DishId(2), Availability::Yes).unwrap();
        assert!(bread.is_available());
        assert_eq!(menu.list_available().len(), 3);

        assert_eq!(
            menu.update_availability(DishId(42), Availability::No),
            Err(MenuError::NotFound(DishId(42)))
        );
    }

    #[test]
    fn test_list_available_keeps_insertion_order() {
        let menu = sample_menu();
        let names: Vec<&str> = menu.list_available().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Soup", "Tea"]);

        let mut closed = Menu::new();
        closed.add_dish("Stew", 4.0, Availability::No).unwrap();
        assert!(closed.list_available().is_empty());
    }

    #[test]
    fn test_document_round_trip() {
        let mut menu = sample_menu();
        menu.remove_dish(DishId(3)).unwrap();

        let restored = Menu::from_document(menu.to_document());
        assert_eq!(restored.dishes(), menu.dishes());
        assert_eq!(restored.next_dish_id(), Some(DishId(4)));
    }

    #[test]
    fn test_legacy_document_without_counter() {
        let doc = MenuDocument {
            dishes: vec![
                Dish::new(DishId(2), "Bread", 2.0, Availability::No),
                Dish::new(DishId(5), "Soup", 5.0, Availability::Yes),
            ],
            next_dish_id: None,
        };
        let menu = Menu::from_document(doc);
        assert_eq!(menu.next_dish_id(), Some(DishId(6)));
    }
}
