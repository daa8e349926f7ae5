//! Mail transport port
//!
//! A transport either delivers a message over the network or records it
//! locally. Which one is used is decided once per process by the
//! notification gateway.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::MailError;

/// A fully addressed HTML message
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutgoingMail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
}

#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Short name for logs ("smtp", "capture")
    fn name(&self) -> &'static str;

    /// Deliver a single message. One attempt, no retries.
    async fn deliver(&self, mail: &OutgoingMail) -> Result<(), MailError>;
}
