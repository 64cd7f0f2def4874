//! Dish data: ids, availability and the menu item itself.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for Dishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DishId(pub u32);

impl From<u32> for DishId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<DishId> for u32 {
    fn from(id: DishId) -> Self {
        id.0
    }
}

impl Display for DishId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether a dish may currently be ordered. Written as `"yes"` / `"no"`.
///
/// Reading is lenient because older data files hold the text as it was typed:
/// `yes` in any case means [`Availability::Yes`], anything else [`Availability::No`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Availability {
    Yes,
    No,
}

impl Availability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::Yes => "yes",
            Availability::No => "no",
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Availability::Yes)
    }
}

impl From<String> for Availability {
    fn from(raw: String) -> Self {
        if raw.trim().eq_ignore_ascii_case("yes") {
            Availability::Yes
        } else {
            Availability::No
        }
    }
}

impl Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when text is neither `yes` nor `no`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Availability must be 'yes' or 'no', got '{0}'")]
pub struct ParseAvailabilityError(pub String);

impl FromStr for Availability {
    type Err = ParseAvailabilityError;

    /// Accepts `yes`/`no` in any case, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" => Ok(Availability::Yes),
            "no" => Ok(Availability::No),
            _ => Err(ParseAvailabilityError(s.trim().to_string())),
        }
    }
}

/// Represents one item on the canteen menu.
///
/// # Store
/// This struct implements the [`Entity`](crate::framework::Entity) trait,
/// allowing it to be managed by a [`ResourceStore`](crate::framework::ResourceStore).
///
/// See [`impl Entity for Dish`](#impl-Entity-for-Dish) for details on:
/// - Creation parameters ([`DishCreate`])
/// - Update parameters ([`DishUpdate`])
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    #[serde(rename = "dish_id")]
    pub id: DishId,
    pub name: String,
    pub price: f64,
    pub availability: Availability,
}

impl Dish {
    /// Creates a new Dish instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (assigned by the menu)
    /// * `name` - Dish name
    /// * `price` - Price of one portion
    /// * `availability` - Whether the dish can be ordered
    pub fn new(id: DishId, name: impl Into<String>, price: f64, availability: Availability) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            availability,
        }
    }

    pub fn is_available(&self) -> bool {
        self.availability.is_available()
    }
}

/// Payload for adding a dish to the menu.
#[derive(Debug, Clone)]
pub struct DishCreate {
    pub name: String,
    pub price: f64,
    pub availability: Availability,
}

/// Payload for updating a dish. Only availability is mutable once a dish is listed.
#[derive(Debug, Clone)]
pub struct DishUpdate {
    pub availability: Option<Availability>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_availability_parses_loosely() {
        assert_eq!(" YES ".parse::<Availability>(), Ok(Availability::Yes));
        assert_eq!("no".parse::<Availability>(), Ok(Availability::No));
        assert_eq!(
            "maybe".parse::<Availability>(),
            Err(ParseAvailabilityError("maybe".into()))
        );
    }

    #[test]
    fn test_dish_uses_persisted_field_names() {
        let dish = Dish::new(DishId(3), "Soup", 5.0, Availability::Yes);
        let value = serde_json::to_value(&dish).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"dish_id": 3, "name": "Soup", "price": 5.0, "availability": "yes"})
        );
    }

    #[test]
    fn test_stored_availability_is_read_leniently() {
        for (stored, expected) in [
            ("yes", Availability::Yes),
            ("YES ", Availability::Yes),
            ("no", Availability::No),
            ("y", Availability::No),
            ("sometimes", Availability::No),
        ] {
            let raw = format!(
                r#"{{"dish_id": 1, "name": "Tea", "price": 1.0, "availability": "{stored}"}}"#
            );
            let dish: Dish = serde_json::from_str(&raw).unwrap();
            assert_eq!(dish.availability, expected, "{stored:?}");
        }
    }

    #[test]
    fn test_availability_must_be_text() {
        let raw = r#"{"dish_id": 1, "name": "Tea", "price": 1.0, "availability": true}"#;
        assert!(serde_json::from_str::<Dish>(raw).is_err());
    }
}
