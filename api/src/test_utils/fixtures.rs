//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use chrono::Utc;
use serde_json::json;

use crate::app::{OrderSubmission, ProductSubmission};
use crate::domain::entities::{Order, OrderId, Product, ProductId};

/// Create a test product with a seller email
pub fn test_product() -> Product {
    Product {
        id: ProductId::new(),
        title: "Tomatoes".to_string(),
        description: "Fresh".to_string(),
        price: 50,
        unit: "kg".to_string(),
        quantity: 10,
        category: Some("vegetables".to_string()),
        location: "Nakuru".to_string(),
        image_url: None,
        seller_email: Some("seller@farm.co.ke".to_string()),
        seller_mobile: Some("+254700000000".to_string()),
        created_at: Utc::now(),
    }
}

/// Create a test product whose seller only left a phone number
pub fn test_product_without_seller_email() -> Product {
    Product {
        title: "Maize".to_string(),
        description: "Dry".to_string(),
        price: 30,
        seller_email: None,
        ..test_product()
    }
}

/// Create a test order for the given product
pub fn test_order(product_id: ProductId) -> Order {
    Order {
        id: OrderId::new(),
        product_id,
        buyer_name: "Jane".to_string(),
        buyer_email: "jane@x.com".to_string(),
        buyer_phone: None,
        message: "Interested".to_string(),
        created_at: Utc::now(),
    }
}

/// A complete product listing with numeric strings, as the admin form sends it
pub fn product_submission() -> ProductSubmission {
    ProductSubmission {
        title: Some("Tomatoes".to_string()),
        description: Some("Fresh".to_string()),
        price: Some(json!("50")),
        unit: Some("kg".to_string()),
        quantity: Some(json!("10")),
        location: Some("Nakuru".to_string()),
        ..ProductSubmission::default()
    }
}

/// A complete inquiry for the given product id
pub fn order_submission(product_id: &str) -> OrderSubmission {
    OrderSubmission {
        product_id: Some(product_id.to_string()),
        buyer_name: Some("Jane".to_string()),
        buyer_email: Some("jane@x.com".to_string()),
        buyer_phone: None,
        message: Some("Interested".to_string()),
    }
}
