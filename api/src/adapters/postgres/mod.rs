//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod order_repo;
pub mod product_repo;


pub use order_repo::PostgresOrderRepository;
pub use product_repo::PostgresProductRepository;
