//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{NewOrder, NewProduct, Order, OrderId, Product, ProductId};
use crate::domain::ports::{MailTransport, OrderRepository, OutgoingMail, ProductRepository};
use crate::error::{DomainError, MailError};

// ============================================================================
// In-Memory Product Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryProductRepository {
    /// Insertion order, oldest first
    products: Arc<RwLock<Vec<Product>>>,
    should_fail: bool,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call returns a database error
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// Pre-populate with a product for testing
    pub fn with_product(self, product: Product) -> Self {
        self.products.write().unwrap().push(product);
        self
    }

    pub fn len(&self) -> usize {
        self.products.read().unwrap().len()
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.should_fail {
            return Err(DomainError::Database("Mock failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, new_product: &NewProduct) -> Result<Product, DomainError> {
        self.check()?;

        let product = Product {
            id: ProductId::new(),
            title: new_product.title.clone(),
            description: new_product.description.clone(),
            price: new_product.price,
            unit: new_product.unit.clone(),
            quantity: new_product.quantity,
            category: new_product.category.clone(),
            location: new_product.location.clone(),
            image_url: new_product.image_url.clone(),
            seller_email: new_product.seller_email.clone(),
            seller_mobile: new_product.seller_mobile.clone(),
            created_at: Utc::now(),
        };

        self.products.write().unwrap().push(product.clone());
        Ok(product)
    }

    async fn list_recent(&self) -> Result<Vec<Product>, DomainError> {
        self.check()?;

        // Newest insert first; the stable sort keeps that order for equal timestamps
        let mut products: Vec<Product> = self.products.read().unwrap().iter().rev().cloned().collect();
        products.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(products)
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError> {
        self.check()?;

        let products = self.products.read().unwrap();
        Ok(products.iter().find(|p| p.id == *id).cloned())
    }

    async fn delete(&self, id: &ProductId) -> Result<bool, DomainError> {
        self.check()?;

        let mut products = self.products.write().unwrap();
        let before = products.len();
        products.retain(|p| p.id != *id);
        Ok(products.len() < before)
    }
}

// ============================================================================
// In-Memory Order Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryOrderRepository {
    orders: Arc<RwLock<Vec<Order>>>,
    should_fail: bool,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// Snapshot of stored orders, oldest first
    pub fn all(&self) -> Vec<Order> {
        self.orders.read().unwrap().clone()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn create(&self, new_order: &NewOrder) -> Result<Order, DomainError> {
        if self.should_fail {
            return Err(DomainError::Database("Mock failure".to_string()));
        }

        let order = Order {
            id: OrderId::new(),
            product_id: new_order.product_id,
            buyer_name: new_order.buyer_name.clone(),
            buyer_email: new_order.buyer_email.clone(),
            buyer_phone: new_order.buyer_phone.clone(),
            message: new_order.message.clone(),
            created_at: Utc::now(),
        };

        self.orders.write().unwrap().push(order.clone());
        Ok(order)
    }

    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, DomainError> {
        if self.should_fail {
            return Err(DomainError::Database("Mock failure".to_string()));
        }

        let orders = self.orders.read().unwrap();
        Ok(orders.iter().find(|o| o.id == *id).cloned())
    }
}

// ============================================================================
// Recording Mail Transport
// ============================================================================

/// Records every delivery attempt; optionally fails each one
#[derive(Default)]
pub struct RecordingTransport {
    sent: Arc<RwLock<Vec<OutgoingMail>>>,
    attempts: Arc<RwLock<usize>>,
    should_fail: bool,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulates an unreachable mail server
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// Successfully delivered messages
    pub fn sent(&self) -> Vec<OutgoingMail> {
        self.sent.read().unwrap().clone()
    }

    pub fn attempts(&self) -> usize {
        *self.attempts.read().unwrap()
    }
}

#[async_trait]
impl MailTransport for RecordingTransport {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn deliver(&self, mail: &OutgoingMail) -> Result<(), MailError> {
        *self.attempts.write().unwrap() += 1;

        if self.should_fail {
            return Err(MailError::Transport("Connection refused".to_string()));
        }

        self.sent.write().unwrap().push(mail.clone());
        Ok(())
    }
}
