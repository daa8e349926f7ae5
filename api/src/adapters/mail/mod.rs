//! Mail adapters
//!
//! Implementations of the mail transport port.

pub mod capture;
pub mod smtp;

use std::sync::Arc;

pub use capture::CaptureTransport;
pub use smtp::SmtpMailTransport;

use crate::config::MailSettings;
use crate::domain::ports::MailTransport;
use crate::error::MailError;

/// Pick the transport for the configured environment.
///
/// SMTP when host, user and password are all set, capture otherwise.
pub fn transport_from_settings(
    settings: &MailSettings,
) -> Result<Arc<dyn MailTransport>, MailError> {
    match (
        settings.smtp_host.as_deref(),
        settings.smtp_user.as_deref(),
        settings.smtp_pass.as_deref(),
    ) {
        (Some(host), Some(user), Some(pass)) => Ok(Arc::new(SmtpMailTransport::new(
            host,
            settings.smtp_port,
            user,
            pass,
            settings.smtp_secure,
        )?)),
        _ => Ok(Arc::new(CaptureTransport::new())),
    }
}
