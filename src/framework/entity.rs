//! # Entity Trait
//!
//! The `Entity` trait defines the contract every resource (Dish, Order) implements to be
//! managed by the generic [`ResourceStore`](super::ResourceStore). It names the id,
//! creation and update payloads, the context injected into hooks, and the error type.
//!
//! # Provided Methods (Hooks)
//! - [`Entity::on_create`]
//! - [`Entity::on_delete`]
//!
//! The default implementations do nothing (`Ok(())`).

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by a `ResourceStore`.
///
/// # Context
/// `on_create` receives a `Context` borrowed from the caller for the duration of the
/// create. The order book uses this to look up dishes in the menu while validating
/// a new order, without either collection owning the other.
pub trait Entity: Clone + Debug {
    /// The unique identifier for this entity.
    /// Must convert to and from `u32` so the store can hand out sequential ids.
    type Id: Copy + Eq + Hash + Display + Debug + From<u32> + Into<u32>;

    /// The data required to create a new instance.
    type Create: Debug;

    /// The data required to update an existing instance.
    type Update: Debug;

    /// Dependencies borrowed by `on_create`. Use `()` if none are needed.
    type Context: ?Sized;

    /// The error type for this entity.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the entity's id.
    fn id(&self) -> Self::Id;

    /// Replaces the entity's id. Only used when a loaded collection renumbers a duplicate.
    fn set_id(&mut self, id: Self::Id);

    /// Construct the full entity from the id and payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called after construction and before the entity is stored.
    /// An error here rejects the create and leaves the store untouched.
    fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    fn on_update(&mut self, update: Self::Update) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed.
    fn on_delete(&self) -> Result<(), Self::Error> {
        Ok(())
    }
}
