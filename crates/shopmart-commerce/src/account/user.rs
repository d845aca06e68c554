//! User profile and order records.

use crate::catalog::current_timestamp;
use crate::ids::{OrderId, ProductId, UserId};
use serde::{Deserialize, Serialize};

/// Account role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Customer,
    Seller,
    Admin,
}

/// A logged-in user's profile, persisted for the session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub role: Role,
    /// Unix timestamp of account creation.
    pub created_at: i64,
    /// Unix timestamp of the last login.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<i64>,
}

/// Order lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    Refunded,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Refunded => "refunded",
        }
    }
}

/// A line on a past order. Display fields are snapshots, like cart lines.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: u32,
    pub price: f64,
}

/// A past (mock) order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub items: Vec<OrderItem>,
    pub status: OrderStatus,
    pub total: f64,
    pub currency: String,
    pub created_at: i64,
    pub updated_at: i64,
}

/// The demo profile handed out by the mock login, under the email the
/// caller actually typed.
pub(crate) fn mock_user(email: &str) -> User {
    User {
        id: UserId::new(1),
        email: email.to_string(),
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        phone: Some("+1234567890".to_string()),
        role: Role::Customer,
        created_at: 1_704_067_200, // 2024-01-01T00:00:00Z
        last_login: Some(current_timestamp()),
    }
}

/// Demo order history seeded on login.
pub(crate) fn mock_orders(user_id: UserId) -> Vec<Order> {
    vec![
        Order {
            id: OrderId::new(1001),
            user_id,
            items: vec![OrderItem {
                product_id: ProductId::new(1),
                product_name: "iPhone 15 Pro Max".to_string(),
                quantity: 1,
                price: 1199.0,
            }],
            status: OrderStatus::Delivered,
            total: 1199.0,
            currency: "USD".to_string(),
            created_at: 1_705_312_800,
            updated_at: 1_705_591_800,
        },
        Order {
            id: OrderId::new(1002),
            user_id,
            items: vec![OrderItem {
                product_id: ProductId::new(4),
                product_name: "Sony WH-1000XM5 Headphones".to_string(),
                quantity: 1,
                price: 349.0,
            }],
            status: OrderStatus::Shipped,
            total: 349.0,
            currency: "USD".to_string(),
            created_at: 1_705_572_000,
            updated_at: 1_705_678_200,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_serde() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Cancelled).unwrap(),
            "\"cancelled\""
        );
    }

    #[test]
    fn test_user_round_trip() {
        let user = mock_user("jane@example.com");
        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
        assert!(json.contains("\"firstName\""));
    }
}
