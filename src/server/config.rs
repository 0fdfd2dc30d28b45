use lettre::message::Mailbox;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

pub struct Config {
    pub database_url: String,

    pub host: String,
    pub port: u16,

    pub mail: MailConfig,
}

/// SMTP relay settings used by the mail transport.
#[derive(Clone)]
pub struct MailConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    /// Sender of every outbound message, `Name <addr>` or a bare address.
    pub from: Mailbox,
    /// Implicit TLS when `true`, otherwise STARTTLS when the server offers it.
    pub secure: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_lookup(|name| std::env::var(name).ok())?)
    }

    /// Builds the configuration from a variable lookup.
    ///
    /// # Returns
    /// - `Ok(Config)` - Every required variable is present and parsable
    /// - `Err(ConfigError::MissingEnvVar)` - A required variable is absent
    /// - `Err(ConfigError::InvalidEnvVar)` - A required variable is empty, or a port or the
    ///   sender address cannot be parsed
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &str| match lookup(name) {
            None => Err(ConfigError::MissingEnvVar(name.to_string())),
            Some(value) if value.trim().is_empty() => Err(ConfigError::InvalidEnvVar {
                name: name.to_string(),
                reason: "must not be empty".to_string(),
            }),
            Some(value) => Ok(value),
        };

        let port = match lookup("PORT") {
            Some(port) => parse_port("PORT", &port)?,
            None => DEFAULT_PORT,
        };

        let from = required("EMAIL_FROM")?;
        let from = from
            .parse::<Mailbox>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: "EMAIL_FROM".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            mail: MailConfig {
                host: required("EMAIL_HOST")?,
                port: parse_port("EMAIL_PORT", &required("EMAIL_PORT")?)?,
                user: required("EMAIL_USER")?,
                password: required("EMAIL_PASSWORD")?,
                from,
                secure: required("EMAIL_SECURE")? == "true",
            },
        })
    }

    /// Address the HTTP listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_port(name: &str, value: &str) -> Result<u16, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: format!("'{}' is not a valid port", value),
    })
}
