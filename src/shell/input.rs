//! Parsing and validation of the values typed at the shell prompts.
//!
//! The core collections trust their callers, so every check on user-typed fields
//! happens here.

use crate::model::{Availability, DishId, ParseAvailabilityError};
use thiserror::Error;

/// A field the user typed could not be accepted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("Dish name cannot be empty.")]
    EmptyName,

    #[error("Invalid price '{0}'. Enter a number that is zero or more.")]
    InvalidPrice(String),

    #[error("{0}")]
    InvalidAvailability(#[from] ParseAvailabilityError),

    #[error("Invalid ID '{0}'. Enter a whole number.")]
    InvalidId(String),
}

pub fn parse_name(raw: &str) -> Result<String, InputError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(InputError::EmptyName);
    }
    Ok(name.to_string())
}

/// Accepts finite, non-negative numbers.
pub fn parse_price(raw: &str) -> Result<f64, InputError> {
    let raw = raw.trim();
    match raw.parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => Ok(price),
        _ => Err(InputError::InvalidPrice(raw.to_string())),
    }
}

pub fn parse_availability(raw: &str) -> Result<Availability, InputError> {
    Ok(raw.parse()?)
}

/// Parses a dish or order id.
pub fn parse_id<I: From<u32>>(raw: &str) -> Result<I, InputError> {
    let raw = raw.trim();
    raw.parse::<u32>()
        .map(I::from)
        .map_err(|_| InputError::InvalidId(raw.to_string()))
}

/// Parses a comma-separated list of dish ids. A blank line is an empty list.
pub fn parse_dish_ids(raw: &str) -> Result<Vec<DishId>, InputError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    raw.split(',').map(parse_id::<DishId>).collect()
}

/// Statuses are matched exactly, so a blank filter only matches an empty status.
pub fn parse_status_filter(raw: &str) -> String {
    raw.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OrderId;

    #[test]
    fn test_name_is_trimmed_and_required() {
        assert_eq!(parse_name("  Soup "), Ok("Soup".to_string()));
        assert_eq!(parse_name("   "), Err(InputError::EmptyName));
    }

    #[test]
    fn test_price_bounds() {
        assert_eq!(parse_price("0"), Ok(0.0));
        assert_eq!(parse_price(" 4.5 "), Ok(4.5));
        assert_eq!(parse_price("-1"), Err(InputError::InvalidPrice("-1".into())));
        assert_eq!(parse_price("NaN"), Err(InputError::InvalidPrice("NaN".into())));
        assert_eq!(parse_price("inf"), Err(InputError::InvalidPrice("inf".into())));
        assert_eq!(parse_price("five"), Err(InputError::InvalidPrice("five".into())));
    }

    #[test]
    fn test_availability() {
        assert_eq!(parse_availability("Yes"), Ok(Availability::Yes));
        assert!(matches!(
            parse_availability("y"),
            Err(InputError::InvalidAvailability(_))
        ));
    }

    #[test]
    fn test_ids() {
        assert_eq!(parse_id::<OrderId>(" 3 "), Ok(OrderId(3)));
        assert_eq!(
            parse_id::<DishId>("-3"),
            Err(InputError::InvalidId("-3".into()))
        );
    }

    #[test]
    fn test_dish_id_list() {
        assert_eq!(
            parse_dish_ids("1, 2,1"),
            Ok(vec![DishId(1), DishId(2), DishId(1)])
        );
        assert_eq!(parse_dish_ids("  "), Ok(vec![]));
        assert_eq!(parse_dish_ids("1,,2"), Err(InputError::InvalidId(String::new())));
    }

    #[test]
    fn test_status_filter() {
        assert_eq!(parse_status_filter(" served "), "served");
        assert_eq!(parse_status_filter("  "), "");
    }
}
