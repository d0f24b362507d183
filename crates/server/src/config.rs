//! Server configuration, read from the environment (and `.env` if present).

use anyhow::{Context, Result};
use utils::logging::LogFormat;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_DATABASE_URL: &str = "sqlite://kelas.db?mode=rwc";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load from `HOST`, `PORT`, `DATABASE_URL` and `LOG_FORMAT`.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("invalid PORT: {raw:?}"))?,
            None => defaults.port,
        };
        let log_format = match lookup("LOG_FORMAT") {
            Some(raw) => raw.parse::<LogFormat>()?,
            None => defaults.log_format,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            log_format,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
