//! Pure data structures implementing the [`Entity`](crate::framework::Entity) trait.

pub mod dish;
pub mod order;

pub use dish::*;
pub use order::*;
