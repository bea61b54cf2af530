use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:5555";
const DEFAULT_SMTP_PORT: u16 = 25;
const DEFAULT_MAIL_FROM: &str = "Superheroes API <noreply@superheroes.com>";
const DEFAULT_NOTIFY_EMAIL: &str = "admin@superheroes.com";

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    /// SMTP settings for hero power notifications.
    ///
    /// `None` when no SMTP host is configured; notifications are then
    /// disabled and creation requests proceed without a side effect.
    pub mail: Option<MailConfig>,
}

pub struct MailConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_user: String,
    pub smtp_password: String,
    pub mail_from: String,
    pub notify_email: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            mail: MailConfig::from_env()?,
        })
    }
}

impl MailConfig {
    /// Reads SMTP settings, keyed off `SMTP_HOST`.
    ///
    /// Missing `SMTP_HOST` disables mail entirely rather than failing
    /// startup; the other variables fall back to local-relay defaults.
    fn from_env() -> Result<Option<Self>, AppError> {
        let Ok(smtp_host) = std::env::var("SMTP_HOST") else {
            return Ok(None);
        };

        let smtp_port = match std::env::var("SMTP_PORT") {
            Ok(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidEnvVar("SMTP_PORT".to_string()))?,
            Err(_) => DEFAULT_SMTP_PORT,
        };

        Ok(Some(Self {
            smtp_host,
            smtp_port,
            smtp_user: std::env::var("SMTP_USER").unwrap_or_default(),
            smtp_password: std::env::var("SMTP_PASSWORD").unwrap_or_default(),
            mail_from: std::env::var("MAIL_FROM").unwrap_or_else(|_| DEFAULT_MAIL_FROM.to_string()),
            notify_email: std::env::var("NOTIFY_EMAIL")
                .unwrap_or_else(|_| DEFAULT_NOTIFY_EMAIL.to_string()),
        }))
    }
}
