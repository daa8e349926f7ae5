//! Notification gateway
//!
//! Single entry point for outbound mail. The transport is built lazily on the
//! first send and then reused for the rest of the process lifetime.

use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::domain::ports::{MailTransport, OutgoingMail};
use crate::error::MailError;

/// Builds the transport on first use
pub type TransportFactory =
    Box<dyn Fn() -> Result<Arc<dyn MailTransport>, MailError> + Send + Sync>;

pub struct NotificationGateway {
    from: String,
    factory: TransportFactory,
    transport: OnceCell<Arc<dyn MailTransport>>,
}

impl NotificationGateway {
    pub fn new(from: impl Into<String>, factory: TransportFactory) -> Self {
        Self {
            from: from.into(),
            factory,
            transport: OnceCell::new(),
        }
    }

    /// Resolve the cached transport, building it if this is the first use.
    ///
    /// A failed build leaves the cell empty, so the next send tries again.
    async fn transport(&self) -> Result<&Arc<dyn MailTransport>, MailError> {
        self.transport
            .get_or_try_init(|| async {
                let transport = (self.factory)()?;
                tracing::info!("Mail transport initialised: {}", transport.name());
                Ok::<_, MailError>(transport)
            })
            .await
    }

    /// Send an HTML message from the configured sender address
    pub async fn send(&self, to: &str, subject: &str, html: &str) -> Result<(), MailError> {
        let transport = self.transport().await?;

        let mail = OutgoingMail {
            from: self.from.clone(),
            to: to.to_string(),
            subject: subject.to_string(),
            html: html.to_string(),
        };

        transport.deliver(&mail).await?;
        tracing::debug!(to, via = transport.name(), "Mail delivered");
        Ok(())
    }

    /// Name of the transport in use, once one has been built
    pub fn transport_name(&self) -> Option<&'static str> {
        self.transport.get().map(|t| t.name())
    }
}
