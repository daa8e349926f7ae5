//! Product domain entity
//!
//! A listed unit of produce offered by a seller. Products are never edited:
//! once created they stay unchanged until deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub Uuid);

impl ProductId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a client-supplied id. Malformed ids cannot name any product.
    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw.trim()).ok().map(Self)
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for ProductId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A product listing
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    /// Whole amount in the display currency (KES)
    pub price: i64,
    pub unit: String,
    pub quantity: i32,
    pub category: Option<String>,
    pub location: String,
    pub image_url: Option<String>,
    pub seller_email: Option<String>,
    pub seller_mobile: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Data needed to create a new product
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub title: String,
    pub description: String,
    pub price: i64,
    pub unit: String,
    pub quantity: i32,
    pub category: Option<String>,
    pub location: String,
    pub image_url: Option<String>,
    pub seller_email: Option<String>,
    pub seller_mobile: Option<String>,
}
