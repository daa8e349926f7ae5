//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod order;
pub mod product;

pub use order::{NewOrder, Order, OrderId};
pub use product::{NewProduct, Product, ProductId};
