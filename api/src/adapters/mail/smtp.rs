//! SMTP mail transport
//!
//! Delivers messages through a real mail server using lettre's async SMTP
//! transport on the tokio runtime. Each delivery opens its own connection;
//! building the transport does no I/O and spawns nothing.

use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::client::{Tls, TlsParameters};
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::domain::ports::{MailTransport, OutgoingMail};
use crate::error::MailError;

pub struct SmtpMailTransport {
    inner: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailTransport {
    /// Build a transport for `host:port`.
    ///
    /// `secure` selects implicit TLS from the first byte; otherwise the
    /// connection starts in plain text and upgrades with STARTTLS when the
    /// server offers it.
    pub fn new(
        host: &str,
        port: u16,
        user: &str,
        pass: &str,
        secure: bool,
    ) -> Result<Self, MailError> {
        let credentials = Credentials::new(user.to_string(), pass.to_string());

        let builder = if secure {
            AsyncSmtpTransport::<Tokio1Executor>::relay(host)
                .map_err(|e| MailError::Transport(e.to_string()))?
        } else {
            let tls = TlsParameters::new(host.to_string())
                .map_err(|e| MailError::Transport(e.to_string()))?;
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
                .tls(Tls::Opportunistic(tls))
        };

        let inner = builder.port(port).credentials(credentials).build();

        tracing::debug!(host, port, secure, "SMTP transport configured");
        Ok(Self { inner })
    }
}

/// Convert an outgoing mail into a lettre message
fn build_message(mail: &OutgoingMail) -> Result<Message, MailError> {
    let from: Mailbox = mail
        .from
        .parse()
        .map_err(|_| MailError::InvalidAddress(mail.from.clone()))?;
    let to: Mailbox = mail
        .to
        .parse()
        .map_err(|_| MailError::InvalidAddress(mail.to.clone()))?;

    Message::builder()
        .from(from)
        .to(to)
        .subject(mail.subject.clone())
        .header(ContentType::TEXT_HTML)
        .body(mail.html.clone())
        .map_err(|e| MailError::Build(e.to_string()))
}

#[async_trait]
impl MailTransport for SmtpMailTransport {
    fn name(&self) -> &'static str {
        "smtp"
    }

    async fn deliver(&self, mail: &OutgoingMail) -> Result<(), MailError> {
        let message = build_message(mail)?;

        self.inner
            .send(message)
            .await
            .map_err(|e| MailError::Transport(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mail(from: &str, to: &str) -> OutgoingMail {
        OutgoingMail {
            from: from.to_string(),
            to: to.to_string(),
            subject: "New order inquiry for Tomatoes".to_string(),
            html: "<p>Hello</p>".to_string(),
        }
    }

    #[test]
    fn builds_html_message() {
        let message =
            build_message(&mail("no-reply@agriharvest.local", "seller@farm.co.ke")).unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();

        assert!(raw.contains("To: seller@farm.co.ke"));
        assert!(raw.contains("Subject: New order inquiry for Tomatoes"));
        assert!(raw.contains("text/html"));
    }

    #[test]
    fn accepts_display_name_sender() {
        let result = build_message(&mail(
            "AgriHarvest <orders@agriharvest.co.ke>",
            "seller@farm.co.ke",
        ));
        assert!(result.is_ok());
    }

    #[test]
    fn rejects_malformed_recipient() {
        let result = build_message(&mail("no-reply@agriharvest.local", "not an address"));
        assert!(matches!(result, Err(MailError::InvalidAddress(addr)) if addr == "not an address"));
    }

    #[test]
    fn builds_outside_a_runtime() {
        for secure in [true, false] {
            let transport = SmtpMailTransport::new("smtp.example.com", 465, "user", "pass", secure);
            assert!(transport.is_ok());
        }
    }

    #[tokio::test]
    async fn unreachable_server_is_a_transport_error() {
        // Nothing listens on port 1 locally, so the connection is refused.
        let transport = SmtpMailTransport::new("localhost", 1, "user", "pass", false).unwrap();

        let result = transport
            .deliver(&mail("no-reply@agriharvest.local", "seller@farm.co.ke"))
            .await;

        assert!(matches!(result, Err(MailError::Transport(_))));
    }
}
