use thiserror::Error;

const DEFAULT_DATABASE: &str = "developerjobs";
const DEFAULT_COLLECTION: &str = "jobs";
const DEFAULT_CONTACT_ADDRESS: &str = "contact@developerjobs.info";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
    pub collection: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtpConfig {
    pub server: String,
    pub user: Option<String>,
    pub password: Option<String>,
    /// Where contact-form messages are delivered.
    pub contact_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub mongo: MongoConfig,
    pub smtp: SmtpConfig,
    pub port: u16,
}

impl AppConfig {
    /// Read settings from the process environment (after `dotenv`).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read settings through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let required = |name: &'static str| var(name).ok_or(ConfigError::Missing(name));

        let port = match var("PORT") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::Invalid { name: "PORT", value })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            mongo: MongoConfig {
                uri: required("MONGODB_URI")?,
                database: var("MONGODB_DATABASE").unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
                collection: var("JOBS_COLLECTION")
                    .unwrap_or_else(|| DEFAULT_COLLECTION.to_string()),
            },
            smtp: SmtpConfig {
                server: required("SMTP_SERVER")?,
                user: var("SMTP_USER"),
                password: var("SMTP_PASS"),
                contact_address: var("CONTACT_ADDRESS")
                    .unwrap_or_else(|| DEFAULT_CONTACT_ADDRESS.to_string()),
            },
            port,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
