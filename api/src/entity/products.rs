//! `SeaORM` Entity for the `products` table

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub price: i64,
    pub unit: String,
    pub quantity: i32,
    pub category: Option<String>,
    pub location: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub image_url: Option<String>,
    pub seller_email: Option<String>,
    pub seller_mobile: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
