//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod catalog_service;
pub mod notification_gateway;
pub mod order_service;
pub mod validation;

pub use catalog_service::{CatalogService, ProductSubmission};
pub use notification_gateway::NotificationGateway;
pub use order_service::{OrderService, OrderSubmission};
