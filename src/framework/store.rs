//! # Resource Store
//!
//! [`ResourceStore`] owns an ordered collection of entities and the counter that hands
//! out their ids. Insertion order is preserved, which is also the listing order.
//!
//! Ids come from an explicit counter that only moves forward: removing an entity never
//! frees its id for reuse, and a create rejected by a hook does not consume one. Once
//! `u32::MAX` has been handed out the store refuses further creates with
//! [`StoreError::IdsExhausted`].

use super::{Entity, StoreError};
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Generic ordered store for one entity type.
#[derive(Debug, Clone)]
pub struct ResourceStore<T: Entity> {
    items: Vec<T>,
    /// Wider than the id type so the counter can sit one past `u32::MAX`.
    next_id: u64,
}

impl<T: Entity> Default for ResourceStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> ResourceStore<T> {
    /// Creates an empty store whose first id is 1.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Rebuilds a store from previously persisted items and counter.
    ///
    /// The counter is raised to one past the largest id if needed, so it is always
    /// greater than every id in `items`. Ids must be unique: an item that repeats an
    /// earlier item's id keeps its position but gets the next fresh id. If no fresh id
    /// is left the repeat is dropped.
    pub fn from_parts(items: Vec<T>, next_id: u32) -> Self {
        let entity_type = Self::entity_type();
        let floor = items
            .iter()
            .map(|item| u64::from(Into::<u32>::into(item.id())))
            .max()
            .map_or(1, |max| max + 1);
        let mut store = Self {
            items: Vec::with_capacity(items.len()),
            next_id: u64::from(next_id).max(floor),
        };

        let mut seen = HashSet::with_capacity(items.len());
        for mut item in items {
            if !seen.insert(item.id()) {
                let Some(fresh) = store.next_id() else {
                    warn!(entity_type, id = %item.id(), "Duplicate id dropped, no ids left");
                    continue;
                };
                warn!(entity_type, old_id = %item.id(), new_id = %fresh, "Duplicate id renumbered");
                item.set_id(fresh);
                store.next_id += 1;
            }
            store.items.push(item);
        }
        store
    }

    fn entity_type() -> &'static str {
        std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown")
    }

    /// The id the next successful create will receive, or `None` once every id
    /// has been handed out.
    pub fn next_id(&self) -> Option<T::Id> {
        u32::try_from(self.next_id).ok().map(T::Id::from)
    }

    /// Builds an entity from `params`, runs `on_create`, and appends it.
    pub fn create(
        &mut self,
        params: T::Create,
        ctx: &T::Context,
    ) -> Result<T::Id, StoreError<T::Error>> {
        let entity_type = Self::entity_type();
        debug!(entity_type, ?params, "Create");
        let Some(id) = self.next_id() else {
            warn!(entity_type, "No ids left");
            return Err(StoreError::IdsExhausted);
        };

        let mut item = T::from_create_params(id, params).map_err(|e| {
            warn!(entity_type, error = %e, "Create failed");
            StoreError::Entity(e)
        })?;
        if let Err(e) = item.on_create(ctx) {
            warn!(entity_type, error = %e, "on_create failed");
            return Err(StoreError::Entity(e));
        }

        self.items.push(item);
        self.next_id += 1;
        info!(entity_type, %id, size = self.items.len(), "Created");
        Ok(id)
    }

    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Applies `update` to the entity with `id` and returns the updated entity.
    pub fn update(
        &mut self,
        id: T::Id,
        update: T::Update,
    ) -> Result<&T, StoreError<T::Error>> {
        let entity_type = Self::entity_type();
        debug!(entity_type, %id, ?update, "Update");
        let Some(item) = self.items.iter_mut().find(|item| item.id() == id) else {
            warn!(entity_type, %id, "Not found");
            return Err(StoreError::NotFound(id.into()));
        };
        if let Err(e) = item.on_update(update) {
            warn!(entity_type, %id, error = %e, "Update failed");
            return Err(StoreError::Entity(e));
        }
        info!(entity_type, %id, "Updated");
        Ok(item)
    }

    /// Removes the entity with `id` and hands it back.
    pub fn delete(&mut self, id: T::Id) -> Result<T, StoreError<T::Error>> {
        let entity_type = Self::entity_type();
        debug!(entity_type, %id, "Delete");
        let Some(index) = self.items.iter().position(|item| item.id() == id) else {
            warn!(entity_type, %id, "Not found");
            return Err(StoreError::NotFound(id.into()));
        };
        if let Err(e) = self.items[index].on_delete() {
            warn!(entity_type, %id, error = %e, "on_delete failed");
            return Err(StoreError::Entity(e));
        }
        let removed = self.items.remove(index);
        info!(entity_type, %id, size = self.items.len(), "Deleted");
        Ok(removed)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
