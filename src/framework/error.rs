//! # Store Errors
//!
//! Errors raised by [`ResourceStore`](super::ResourceStore) itself. Failures coming
//! from an entity hook are carried through unchanged in [`StoreError::Entity`], so
//! the owning collection can map them onto its own error enum.

/// Errors that can occur within the resource store.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum StoreError<E> {
    #[error("Item not found: {0}")]
    NotFound(u32),
    #[error("Every id has been handed out")]
    IdsExhausted,
    #[error("Entity error: {0}")]
    Entity(#[source] E),
}
