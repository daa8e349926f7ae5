//! SeaORM entities
//!
//! Table mappings used by the PostgreSQL adapters. Schema lives in
//! `migrations/001_init.sql`.

pub mod orders;
pub mod products;
