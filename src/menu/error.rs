//! Error types for the menu.

use crate::framework::StoreError;
use crate::model::DishId;
use thiserror::Error;

/// Errors that can occur during menu operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuError {
    /// No dish with this id is on the menu.
    #[error("No dish found with ID {0}.")]
    NotFound(DishId),

    /// The dish id counter has run out.
    #[error("No dish IDs left; the dish was not added.")]
    IdsExhausted,
}

impl From<StoreError<MenuError>> for MenuError {
    fn from(e: StoreError<MenuError>) -> Self {
        match e {
            StoreError::NotFound(id) => MenuError::NotFound(DishId(id)),
            StoreError::IdsExhausted => MenuError::IdsExhausted,
            StoreError::Entity(e) => e,
        }
    }
}
