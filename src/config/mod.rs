//! Environment-backed configuration.
//!
//! Credentials and the testnet endpoint come from the environment (loaded
//! from `.env` by `main` via `dotenvy`). Loading fails fast with a
//! [`ConfigError`] naming the first missing variable.

mod logging;

use std::env;

pub use logging::LoggingConfig;

use crate::error::ConfigError;

/// Default REST endpoint for the Binance USDT-M futures testnet.
pub const DEFAULT_TESTNET_URL: &str = "https://testnet.binancefuture.com";

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "BINANCE_API_KEY";

/// Environment variable holding the API secret.
pub const API_SECRET_VAR: &str = "BINANCE_API_SECRET";

/// Environment variable overriding the testnet endpoint.
pub const TESTNET_URL_VAR: &str = "BINANCE_TESTNET_URL";

/// Resolved application settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// API key sent in the `X-MBX-APIKEY` header.
    pub api_key: String,
    /// API secret used for HMAC request signing.
    pub api_secret: String,
    /// REST endpoint base URL.
    pub base_url: String,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

impl Settings {
    /// Load settings from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVar`] for the first absent or empty
    /// credential variable, and [`ConfigError::InvalidValue`] when the
    /// endpoint override is not an http(s) URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = require(API_KEY_VAR)?;
        let api_secret = require(API_SECRET_VAR)?;

        let base_url =
            env::var(TESTNET_URL_VAR).unwrap_or_else(|_| DEFAULT_TESTNET_URL.to_string());
        if !base_url.starts_with("http") {
            return Err(ConfigError::InvalidValue {
                name: TESTNET_URL_VAR,
                reason: format!("must be an http(s) URL, got: {base_url}"),
            });
        }

        Ok(Self {
            api_key,
            api_secret,
            base_url,
            logging: LoggingConfig::from_env(),
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar { name }),
    }
}
