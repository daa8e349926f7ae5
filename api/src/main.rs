//! AgriHarvest API Server
//!
//! Marketplace backend connecting produce sellers to buyers: sellers list
//! products, buyers send inquiries, sellers are notified by email.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Json, Router,
};
use sea_orm::Database;
use serde::Serialize;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{transport_from_settings, PostgresOrderRepository, PostgresProductRepository};
use app::{CatalogService, NotificationGateway, OrderService};
use config::Config;
use domain::ports::{OrderRepository, ProductRepository};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog_service: Arc<CatalogService<dyn ProductRepository>>,
    pub order_service: Arc<OrderService<dyn ProductRepository, dyn OrderRepository>>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the HTTP router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/products",
            get(handlers::list_products)
                .post(handlers::create_product)
                .delete(handlers::delete_product),
        )
        .route("/products/:id", get(handlers::get_product))
        .route("/orders", post(handlers::create_order))
        .route("/orders/:id", get(handlers::get_order))
        // The storefront and admin UI are served from another origin
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,agriharvest_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting AgriHarvest API...");

    // Load configuration
    let config = Config::from_env()?;

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    // Create adapters
    let product_repo: Arc<dyn ProductRepository> =
        Arc::new(PostgresProductRepository::new(db.clone()));
    let order_repo: Arc<dyn OrderRepository> = Arc::new(PostgresOrderRepository::new(db));

    let mail = config.mail.clone();
    if mail.smtp_enabled() {
        tracing::info!(
            "Seller notifications via SMTP {}:{}",
            mail.smtp_host.as_deref().unwrap_or_default(),
            mail.smtp_port
        );
    } else {
        tracing::warn!("SMTP not configured, outbound mail will be captured to the log");
    }

    // Transport is built on the first notification, not here
    let fallback_recipient = mail.fallback_seller_email.clone();
    let notifications = Arc::new(NotificationGateway::new(
        mail.mail_from.clone(),
        Box::new(move || transport_from_settings(&mail)),
    ));

    // Create application services
    let catalog_service = Arc::new(CatalogService::new(product_repo.clone()));
    let order_service = Arc::new(OrderService::new(
        product_repo,
        order_repo,
        notifications,
        fallback_recipient,
    ));

    let state = AppState {
        catalog_service,
        order_service,
    };

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, router(state))
        .await
        .context("Server error")?;

    Ok(())
}
