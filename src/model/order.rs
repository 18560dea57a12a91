//
//  nosto-sdk
//  model/order.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Order wire format for order confirmation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Collection;

/// A batch of orders, e.g. for historical exports.
pub type OrderCollection = Collection<Order>;

/// A placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Shop-side order number
    pub order_number: String,

    /// External reference, when the shop has one besides the number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_order_ref: Option<String>,

    /// Order placement time
    pub created_at: DateTime<Utc>,

    /// Shop-specific status code, e.g. `pending`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_status_code: Option<String>,

    /// Human readable status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_status_label: Option<String>,

    /// Payment provider identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_provider: Option<String>,

    /// Buyer details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buyer: Option<Buyer>,

    /// Purchased line items
    #[serde(default)]
    pub purchased_items: Vec<LineItem>,
}

impl Order {
    /// Creates an order with no buyer and no items.
    pub fn new(order_number: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            order_number: order_number.into(),
            external_order_ref: None,
            created_at,
            order_status_code: None,
            order_status_label: None,
            payment_provider: None,
            buyer: None,
            purchased_items: Vec::new(),
        }
    }

    /// Sum of `unit_price * quantity` over all items.
    pub fn total(&self) -> f64 {
        self.purchased_items
            .iter()
            .map(|item| item.unit_price * f64::from(item.quantity))
            .sum()
    }
}

/// The customer who placed an order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Buyer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(default)]
    pub marketing_permission: bool,
}

/// One purchased product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub product_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku_id: Option<String>,

    pub quantity: u32,

    pub name: String,

    pub unit_price: f64,

    pub price_currency_code: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_total() {
        let mut order = Order::new("1001", Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap());
        order.purchased_items.push(LineItem {
            product_id: "a".to_string(),
            sku_id: None,
            quantity: 2,
            name: "A".to_string(),
            unit_price: 5.0,
            price_currency_code: "EUR".to_string(),
        });
        order.purchased_items.push(LineItem {
            product_id: "b".to_string(),
            sku_id: Some("b-1".to_string()),
            quantity: 1,
            name: "B".to_string(),
            unit_price: 2.5,
            price_currency_code: "EUR".to_string(),
        });
        assert_eq!(order.total(), 12.5);
    }

    #[test]
    fn test_order_deserializes_from_file_format() {
        let json = r#"{
            "order_number": "1002",
            "created_at": "2024-05-01T12:00:00Z",
            "buyer": {"email": "jane@example.com"},
            "purchased_items": []
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.order_number, "1002");
        assert_eq!(
            order.buyer.and_then(|b| b.email).as_deref(),
            Some("jane@example.com")
        );
    }
}
