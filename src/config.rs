use std::env;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_UPLOAD_LIMIT_BYTES: usize = 32 * 1024 * 1024;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{key} is invalid: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub seed_demo_data: bool,
    pub upload_limit_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            seed_demo_data: false,
            upload_limit_bytes: DEFAULT_UPLOAD_LIMIT_BYTES,
        }
    }
}

impl Config {
    /// Load configuration from the process environment, reading `.env` first
    /// when one is present
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Unset keys take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|err| ConfigError::Invalid {
                key: "PORT",
                reason: format!("{raw:?}: {err}"),
            })?,
            None => defaults.port,
        };

        let seed_demo_data = match lookup("SEED_DEMO_DATA") {
            Some(raw) => parse_flag("SEED_DEMO_DATA", &raw)?,
            None => defaults.seed_demo_data,
        };

        let upload_limit_bytes = match lookup("UPLOAD_LIMIT_BYTES") {
            Some(raw) => raw.trim().parse::<usize>().map_err(|err| ConfigError::Invalid {
                key: "UPLOAD_LIMIT_BYTES",
                reason: format!("{raw:?}: {err}"),
            })?,
            None => defaults.upload_limit_bytes,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            seed_demo_data,
            upload_limit_bytes,
        })
    }

    /// Address string the listener binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_flag(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(ConfigError::Invalid {
            key,
            reason: format!("{other:?} is not a boolean"),
        }),
    }
}
