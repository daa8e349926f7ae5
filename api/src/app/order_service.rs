//! Order service
//!
//! Records buyer inquiries and notifies the seller by email.
//!
//! Order creation is two independent steps: persist the order, then try to
//! notify. Only the first step decides the outcome. A delivery failure is
//! logged and otherwise ignored, and nothing is rolled back.

use std::sync::Arc;

use serde::Deserialize;

use super::catalog_service::PRODUCT_NOT_FOUND;
use super::notification_gateway::NotificationGateway;
use super::validation::{non_blank, MISSING_REQUIRED_FIELDS};
use crate::domain::entities::{NewOrder, Order, OrderId, Product, ProductId};
use crate::domain::ports::{OrderRepository, ProductRepository};
use crate::error::AppError;

pub const ORDER_NOT_FOUND: &str = "Order not found";

/// Buyer inquiry as submitted from the storefront
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSubmission {
    pub product_id: Option<String>,
    pub buyer_name: Option<String>,
    pub buyer_email: Option<String>,
    pub buyer_phone: Option<String>,
    pub message: Option<String>,
}

/// Mail sent to the seller for a new inquiry
#[derive(Debug, Clone, PartialEq)]
pub struct SellerNotification {
    pub subject: String,
    pub html: String,
}

/// Service for buyer inquiries
pub struct OrderService<PR, OR>
where
    PR: ProductRepository + ?Sized,
    OR: OrderRepository + ?Sized,
{
    products: Arc<PR>,
    orders: Arc<OR>,
    notifications: Arc<NotificationGateway>,
    /// Recipient when the product has no seller email
    fallback_recipient: Option<String>,
}

impl<PR, OR> OrderService<PR, OR>
where
    PR: ProductRepository + ?Sized,
    OR: OrderRepository + ?Sized,
{
    pub fn new(
        products: Arc<PR>,
        orders: Arc<OR>,
        notifications: Arc<NotificationGateway>,
        fallback_recipient: Option<String>,
    ) -> Self {
        Self {
            products,
            orders,
            notifications,
            fallback_recipient,
        }
    }

    /// Record a buyer inquiry and notify the seller
    ///
    /// Validation and the product lookup both happen before anything is
    /// written. Returns the id of the new order.
    pub async fn create_order(&self, submission: OrderSubmission) -> Result<OrderId, AppError> {
        let (Some(product_ref), Some(buyer_name), Some(buyer_email), Some(message)) = (
            non_blank(submission.product_id),
            non_blank(submission.buyer_name),
            non_blank(submission.buyer_email),
            non_blank(submission.message),
        ) else {
            return Err(AppError::validation(MISSING_REQUIRED_FIELDS));
        };

        let product = match ProductId::parse(&product_ref) {
            Some(id) => self.products.find_by_id(&id).await?,
            None => None,
        }
        .ok_or_else(|| AppError::not_found(PRODUCT_NOT_FOUND))?;

        let order = self
            .orders
            .create(&NewOrder {
                product_id: product.id,
                buyer_name,
                buyer_email,
                buyer_phone: non_blank(submission.buyer_phone),
                message,
            })
            .await?;

        tracing::info!(order_id = %order.id, product_id = %product.id, "Order created");

        self.notify_seller(&product, &order).await;

        Ok(order.id)
    }

    /// Fetch a stored order
    pub async fn get_order(&self, id: &str) -> Result<Order, AppError> {
        let found = match OrderId::parse(id) {
            Some(id) => self.orders.find_by_id(&id).await?,
            None => None,
        };

        found.ok_or_else(|| AppError::not_found(ORDER_NOT_FOUND))
    }

    /// Best-effort seller notification. Never fails.
    async fn notify_seller(&self, product: &Product, order: &Order) {
        let Some(recipient) = product
            .seller_email
            .as_deref()
            .or(self.fallback_recipient.as_deref())
        else {
            tracing::debug!(order_id = %order.id, "No seller email or fallback; skipping notification");
            return;
        };

        let notification = compose_notification(product, order);

        match self
            .notifications
            .send(recipient, &notification.subject, &notification.html)
            .await
        {
            Ok(()) => tracing::info!(
                order_id = %order.id,
                via = self.notifications.transport_name().unwrap_or("unknown"),
                "Seller notified at {}",
                recipient
            ),
            Err(e) => tracing::warn!(
                order_id = %order.id,
                "Failed to notify seller at {}: {}",
                recipient,
                e
            ),
        }
    }
}

/// Build the seller notification for an order
pub fn compose_notification(product: &Product, order: &Order) -> SellerNotification {
    let phone = order
        .buyer_phone
        .as_deref()
        .map(|phone| {
            format!(
                "<p><strong>Buyer Phone:</strong> {}</p>\n",
                escape_html(phone)
            )
        })
        .unwrap_or_default();

    let message = escape_html(&order.message)
        .replace("\r\n", "\n")
        .replace('\n', "<br/>");

    let html = format!(
        "<p>You have a new order inquiry on AgriHarvest.</p>\n\
         <p><strong>Product:</strong> {title}</p>\n\
         <p><strong>Buyer Name:</strong> {name}</p>\n\
         <p><strong>Buyer Email:</strong> {email}</p>\n\
         {phone}\
         <p><strong>Message:</strong></p>\n\
         <p>{message}</p>\n\
         <hr/>\n\
         <p>Order ID: {id}</p>\n",
        title = escape_html(&product.title),
        name = escape_html(&order.buyer_name),
        email = escape_html(&order.buyer_email),
        phone = phone,
        message = message,
        id = order.id,
    );

    SellerNotification {
        subject: format!("New order inquiry for {}", product.title),
        html,
    }
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
