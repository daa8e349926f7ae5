use std::env;

use anyhow::Context;

pub const DEFAULT_SMTP_PORT: u16 = 587;
pub const DEFAULT_MAIL_FROM: &str = "no-reply@agriharvest.local";

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    /// Port the HTTP server listens on
    pub port: u16,
    pub mail: MailSettings,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            mail: MailSettings::from_env(),
        })
    }
}

/// Outbound mail settings
///
/// SMTP delivery is only used when host, user and password are all present.
#[derive(Clone)]
pub struct MailSettings {
    pub smtp_host: Option<String>,
    pub smtp_port: u16,
    pub smtp_user: Option<String>,
    pub smtp_pass: Option<String>,
    /// Implicit TLS when true, opportunistic STARTTLS otherwise
    pub smtp_secure: bool,
    pub mail_from: String,
    /// Recipient for inquiries about products without a seller email
    pub fallback_seller_email: Option<String>,
}

impl MailSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            smtp_host: var("SMTP_HOST"),
            smtp_port: var("SMTP_PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            smtp_user: var("SMTP_USER"),
            smtp_pass: var("SMTP_PASS"),
            smtp_secure: var("SMTP_SECURE").is_some_and(|v| v.trim() == "true"),
            mail_from: var("MAIL_FROM").unwrap_or_else(|| DEFAULT_MAIL_FROM.to_string()),
            fallback_seller_email: var("FALLBACK_SELLER_EMAIL"),
        }
    }

    /// Check if a complete set of SMTP credentials is configured
    pub fn smtp_enabled(&self) -> bool {
        self.smtp_host.is_some() && self.smtp_user.is_some() && self.smtp_pass.is_some()
    }
}

impl Default for MailSettings {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
