//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod orders;
pub mod products;

pub use orders::{create_order, get_order};
pub use products::{create_product, delete_product, get_product, list_products};
