//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{NewOrder, NewProduct, Order, OrderId, Product, ProductId};
use crate::error::DomainError;

/// Repository for Product entities
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Create a new product
    async fn create(&self, product: &NewProduct) -> Result<Product, DomainError>;

    /// List all products, newest first. Ties on `created_at` come back in a
    /// stable order.
    async fn list_recent(&self) -> Result<Vec<Product>, DomainError>;

    /// Find a product by ID
    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError>;

    /// Delete a product. Returns false when nothing was removed.
    async fn delete(&self, id: &ProductId) -> Result<bool, DomainError>;
}

/// Repository for Order entities (append-only)
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Create a new order
    async fn create(&self, order: &NewOrder) -> Result<Order, DomainError>;

    /// Find an order by ID
    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, DomainError>;
}
