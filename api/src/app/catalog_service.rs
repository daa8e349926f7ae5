//! Catalog service
//!
//! Validates and stores product listings. Products are created and deleted,
//! never edited.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use super::validation::{
    coerce_integer, non_blank, numeric_present, INVALID_NUMERIC_FIELDS, MISSING_REQUIRED_FIELDS,
};
use crate::domain::entities::{NewProduct, Product, ProductId};
use crate::domain::ports::ProductRepository;
use crate::error::AppError;

pub const PRODUCT_NOT_FOUND: &str = "Product not found";
pub const PRODUCT_ID_REQUIRED: &str = "Product ID is required";

/// Product listing as submitted by a seller
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSubmission {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Number or numeric string
    pub price: Option<Value>,
    pub unit: Option<String>,
    /// Number or numeric string
    pub quantity: Option<Value>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub image_url: Option<String>,
    pub seller_email: Option<String>,
    pub seller_mobile: Option<String>,
}

impl ProductSubmission {
    /// Check required fields and coerce numbers
    fn into_new_product(self) -> Result<NewProduct, AppError> {
        let price_present = numeric_present(self.price.as_ref());
        let quantity_present = numeric_present(self.quantity.as_ref());

        let (Some(title), Some(description), Some(unit), Some(location), true, true) = (
            non_blank(self.title),
            non_blank(self.description),
            non_blank(self.unit),
            non_blank(self.location),
            price_present,
            quantity_present,
        ) else {
            return Err(AppError::validation(MISSING_REQUIRED_FIELDS));
        };

        let price = self
            .price
            .as_ref()
            .and_then(coerce_integer)
            .filter(|p| *p >= 0);
        let quantity = self
            .quantity
            .as_ref()
            .and_then(coerce_integer)
            .and_then(|q| i32::try_from(q).ok())
            .filter(|q| *q > 0);

        let (Some(price), Some(quantity)) = (price, quantity) else {
            return Err(AppError::validation(INVALID_NUMERIC_FIELDS));
        };

        Ok(NewProduct {
            title,
            description,
            price,
            unit,
            quantity,
            category: non_blank(self.category),
            location,
            image_url: non_blank(self.image_url),
            seller_email: non_blank(self.seller_email),
            seller_mobile: non_blank(self.seller_mobile),
        })
    }
}

/// Service for managing the product catalog
pub struct CatalogService<PR>
where
    PR: ProductRepository + ?Sized,
{
    products: Arc<PR>,
}

impl<PR> CatalogService<PR>
where
    PR: ProductRepository + ?Sized,
{
    pub fn new(products: Arc<PR>) -> Self {
        Self { products }
    }

    /// Validate and store a new product
    pub async fn create_product(&self, submission: ProductSubmission) -> Result<Product, AppError> {
        let new_product = submission.into_new_product()?;
        let product = self.products.create(&new_product).await?;

        tracing::info!(product_id = %product.id, "Product listed: {}", product.title);
        Ok(product)
    }

    /// All products, newest first
    pub async fn list_products(&self) -> Result<Vec<Product>, AppError> {
        Ok(self.products.list_recent().await?)
    }

    /// Fetch a single product
    pub async fn get_product(&self, id: &str) -> Result<Product, AppError> {
        let found = match ProductId::parse(id) {
            Some(id) => self.products.find_by_id(&id).await?,
            None => None,
        };

        found.ok_or_else(|| AppError::not_found(PRODUCT_NOT_FOUND))
    }

    /// Delete a product that must currently exist
    pub async fn delete_product(&self, id: Option<&str>) -> Result<(), AppError> {
        let raw = id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| AppError::validation(PRODUCT_ID_REQUIRED))?;

        let product = self.get_product(raw).await?;

        // Lost a race with another delete: still a miss for this caller
        if !self.products.delete(&product.id).await? {
            return Err(AppError::not_found(PRODUCT_NOT_FOUND));
        }

        tracing::info!(product_id = %product.id, "Product deleted");
        Ok(())
    }
}
