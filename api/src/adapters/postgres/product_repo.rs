//! PostgreSQL adapter for ProductRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

use crate::domain::entities::{NewProduct, Product, ProductId};
use crate::domain::ports::ProductRepository;
use crate::entity::products;
use crate::error::DomainError;

/// PostgreSQL implementation of ProductRepository
pub struct PostgresProductRepository {
    db: DatabaseConnection,
}

impl PostgresProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn create(&self, product: &NewProduct) -> Result<Product, DomainError> {
        let model = products::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(product.title.clone()),
            description: Set(product.description.clone()),
            price: Set(product.price),
            unit: Set(product.unit.clone()),
            quantity: Set(product.quantity),
            category: Set(product.category.clone()),
            location: Set(product.location.clone()),
            image_url: Set(product.image_url.clone()),
            seller_email: Set(product.seller_email.clone()),
            seller_mobile: Set(product.seller_mobile.clone()),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn list_recent(&self) -> Result<Vec<Product>, DomainError> {
        let results = products::Entity::find()
            .order_by_desc(products::Column::CreatedAt)
            // Stable order for equal timestamps
            .order_by_desc(products::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError> {
        let result = products::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn delete(&self, id: &ProductId) -> Result<bool, DomainError> {
        let result = products::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.rows_affected > 0)
    }
}

/// Convert SeaORM model to domain entity
impl From<products::Model> for Product {
    fn from(model: products::Model) -> Self {
        Product {
            id: ProductId(model.id),
            title: model.title,
            description: model.description,
            price: model.price,
            unit: model.unit,
            quantity: model.quantity,
            category: model.category,
            location: model.location,
            image_url: model.image_url,
            seller_email: model.seller_email,
            seller_mobile: model.seller_mobile,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}
