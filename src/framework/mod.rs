//! Generic resource store for the canteen's collections.
//!
//! # Main Components
//!
//! - [`Entity`] - Trait that resource types implement to be managed by a store
//! - [`ResourceStore`] - Ordered collection with a forward-only id counter
//! - [`StoreError`] - Not-found and hook failures

pub mod entity;
pub mod error;
pub mod store;

pub use entity::Entity;
pub use error::StoreError;
pub use store::ResourceStore;
