//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod mail;
pub mod postgres;

pub use mail::transport_from_settings;
pub use postgres::{PostgresOrderRepository, PostgresProductRepository};
