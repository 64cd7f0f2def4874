//! Shapes of the persisted JSON document.
//!
//! Key names match the files written by earlier versions of the canteen tool
//! (`dish_id`, `order_id`, `current_order_id`), so those files still load.

use crate::model::{Dish, DishId, Order, OrderId};
use serde::{Deserialize, Serialize};

/// Persisted form of the [`Menu`](crate::menu::Menu).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuDocument {
    pub dishes: Vec<Dish>,
    /// Absent in files written before dish ids had their own counter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_dish_id: Option<DishId>,
}

/// Persisted form of the [`OrderManager`](crate::orders::OrderManager).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBookDocument {
    pub orders: Vec<Order>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_order_id: Option<OrderId>,
}

/// The whole data file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanteenDocument {
    pub menu: MenuDocument,
    pub order_manager: OrderBookDocument,
}

impl CanteenDocument {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Availability;
    use serde_json::json;

    #[test]
    fn test_reads_document_without_dish_counter() {
        let raw = json!({
            "menu": {
                "dishes": [
                    {"dish_id": 1, "name": "Soup", "price": 5.0, "availability": "yes"}
                ]
            },
            "order_manager": {
                "orders": [
                    {"order_id": 1, "customer_name": "Alice", "dish_ids": [1, 1], "status": "served"}
                ],
                "current_order_id": 2
            }
        })
        .to_string();

        let doc = CanteenDocument::from_json(&raw).unwrap();
        assert_eq!(doc.menu.next_dish_id, None);
        assert_eq!(
            doc.menu.dishes[0],
            Dish::new(DishId(1), "Soup", 5.0, Availability::Yes)
        );
        let order = &doc.order_manager.orders[0];
        assert_eq!(order.dish_ids, vec![DishId(1), DishId(1)]);
        assert_eq!(order.status, "served");
        assert_eq!(doc.order_manager.current_order_id, Some(OrderId(2)));
    }

    #[test]
    fn test_writes_expected_keys() {
        let doc = CanteenDocument {
            menu: MenuDocument {
                dishes: vec![Dish::new(DishId(1), "Tea", 1.5, Availability::No)],
                next_dish_id: Some(DishId(2)),
            },
            order_manager: OrderBookDocument {
                orders: vec![Order::new(OrderId(1), "Bob", vec![])],
                current_order_id: Some(OrderId(2)),
            },
        };
        let value: serde_json::Value = serde_json::from_str(&doc.to_json().unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "menu": {
                    "dishes": [
                        {"dish_id": 1, "name": "Tea", "price": 1.5, "availability": "no"}
                    ],
                    "next_dish_id": 2
                },
                "order_manager": {
                    "orders": [
                        {"order_id": 1, "customer_name": "Bob", "dish_ids": [], "status": "received"}
                    ],
                    "current_order_id": 2
                }
            })
        );
    }

    #[test]
    fn test_missing_section_is_an_error() {
        assert!(CanteenDocument::from_json(r#"{"menu": {"dishes": []}}"#).is_err());
    }
}
