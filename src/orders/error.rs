//! Error types for the order book.

use crate::framework::StoreError;
use crate::model::{DishId, OrderId};
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// No order with this id exists.
    #[error("No order found with ID {0}.")]
    NotFound(OrderId),

    /// The order references a dish that is not on the menu.
    #[error("Dish with ID {0} is not on the menu.")]
    UnknownDish(DishId),

    /// The order references a dish whose availability is `no`.
    #[error("Dish with ID {0} is not available.")]
    DishUnavailable(DishId),

    /// The order id counter has run out.
    #[error("No order IDs left; the order was not taken.")]
    IdsExhausted,
}

impl OrderError {
    /// True for the errors that reject a new order outright.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            OrderError::UnknownDish(_) | OrderError::DishUnavailable(_) | OrderError::IdsExhausted
        )
    }
}

impl From<StoreError<OrderError>> for OrderError {
    fn from(e: StoreError<OrderError>) -> Self {
        match e {
            StoreError::NotFound(id) => OrderError::NotFound(OrderId(id)),
            StoreError::IdsExhausted => OrderError::IdsExhausted,
            StoreError::Entity(e) => e,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_errors_convert() {
        assert_eq!(
            OrderError::from(StoreError::<OrderError>::NotFound(3)),
            OrderError::NotFound(OrderId(3))
        );
        assert_eq!(
            OrderError::from(StoreError::<OrderError>::IdsExhausted),
            OrderError::IdsExhausted
        );
        assert_eq!(
            OrderError::from(StoreError::Entity(OrderError::UnknownDish(DishId(4)))),
            OrderError::UnknownDish(DishId(4))
        );
    }
}
