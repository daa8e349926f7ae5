//! PostgreSQL adapter for OrderRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use uuid::Uuid;

use crate::domain::entities::{NewOrder, Order, OrderId, ProductId};
use crate::domain::ports::OrderRepository;
use crate::entity::orders;
use crate::error::DomainError;

/// PostgreSQL implementation of OrderRepository
pub struct PostgresOrderRepository {
    db: DatabaseConnection,
}

impl PostgresOrderRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderRepository for PostgresOrderRepository {
    async fn create(&self, order: &NewOrder) -> Result<Order, DomainError> {
        let model = orders::ActiveModel {
            id: Set(Uuid::new_v4()),
            product_id: Set(order.product_id.0),
            buyer_name: Set(order.buyer_name.clone()),
            buyer_email: Set(order.buyer_email.clone()),
            buyer_phone: Set(order.buyer_phone.clone()),
            message: Set(order.message.clone()),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, DomainError> {
        let result = orders::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }
}

impl From<orders::Model> for Order {
    fn from(model: orders::Model) -> Self {
        Order {
            id: OrderId(model.id),
            product_id: ProductId(model.product_id),
            buyer_name: model.buyer_name,
            buyer_email: model.buyer_email,
            buyer_phone: model.buyer_phone,
            message: model.message,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}
