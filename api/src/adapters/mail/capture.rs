//! Capture mail transport
//!
//! Used when no SMTP credentials are configured. Messages are rendered as JSON
//! into the log and then dropped, so the order flow behaves the same on
//! machines without mail infrastructure.

use async_trait::async_trait;

use crate::domain::ports::{MailTransport, OutgoingMail};
use crate::error::MailError;

/// Stateless: nothing is kept after a message is logged
#[derive(Debug, Default, Clone, Copy)]
pub struct CaptureTransport;

impl CaptureTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MailTransport for CaptureTransport {
    fn name(&self) -> &'static str {
        "capture"
    }

    async fn deliver(&self, mail: &OutgoingMail) -> Result<(), MailError> {
        match serde_json::to_string(mail) {
            Ok(json) => tracing::info!("Captured outbound mail (SMTP not configured): {}", json),
            Err(e) => tracing::warn!("Captured outbound mail to {} ({})", mail.to, e),
        }

        Ok(())
    }
}
