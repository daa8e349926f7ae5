//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models for products and orders
//! - `ports`: Trait definitions for storage and mail delivery

pub mod entities;
pub mod ports;
