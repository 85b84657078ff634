//! Configuration management for the document signature server.
//!
//! This module provides configuration loading from both base configuration file
//! and environment variables. Environment variables override the base configuration
//! and use the prefix `SECSPACE_`.

use config::{ConfigError, Environment, File, FileFormat};
use secspace_docsign_domain::fee::Fee;
use serde::Deserialize;

/// Loads the application configuration from base config and environment variables.
///
/// Environment variables use double underscores `__` to denote nested keys.
/// For example, `SECSPACE_APP__LISTEN` corresponds to `app.listen`.
///
/// # Errors
///
/// If the configuration could not be loaded or parsed
pub fn get_configuration() -> Result<Config, ConfigError> {
    config::Config::builder()
        .add_source(File::from_str(include_str!("base_config.ron"), FileFormat::Ron))
        .add_source(
            Environment::with_prefix(Config::CONFIG_ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?
        .try_deserialize()
}

/// Root configuration structure containing all application settings.
#[derive(Deserialize)]
pub struct Config {
    /// Application-specific configuration
    pub app: AppConfig,

    /// Ledger seeding and billing configuration
    pub ledger: LedgerConfig,
}

/// Application-specific configuration settings.
#[derive(Deserialize)]
pub struct AppConfig {
    /// The address to listen on (e.g., "0.0.0.0:59060")
    pub listen: String,

    /// CORS allowed origins (e.g., ["http://localhost:3000", "https://example.com"])
    /// Use ["*"] to allow all origins
    pub cors_allowed_origins: Vec<String>,
}

/// Ledger configuration settings.
#[derive(Deserialize)]
pub struct LedgerConfig {
    /// Path to a RON seed file; the embedded demo seed is used when unset
    pub seed_path: Option<String>,

    /// The flat fee announced for every notarization
    pub notarization_fee: FeeConfig,
}

/// A flat fee.
#[derive(Deserialize)]
pub struct FeeConfig {
    /// The amount in whole currency units
    pub amount: u64,

    /// The ISO 4217 currency code
    pub currency: String,
}

impl Config {
    const CONFIG_ENV_PREFIX: &str = "SECSPACE";
}

impl From<FeeConfig> for Fee {
    fn from(FeeConfig { amount, currency }: FeeConfig) -> Self {
        Fee::builder().amount(amount).currency(currency).build()
    }
}
