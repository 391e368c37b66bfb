//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use storefront_commerce::{cart::PricingPolicy, Currency};

/// File names searched for, in order, in each directory.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["cart.toml", ".cart.toml", "cart.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Where the cart is persisted.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Pricing rules.
    #[serde(default)]
    pub pricing: PricingPolicy,

    /// Display settings.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|e| e == "json")
}

/// Storage configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the persisted cart.
    #[serde(default = "default_storage_dir")]
    pub dir: PathBuf,
}

fn default_storage_dir() -> PathBuf {
    PathBuf::from(".cart")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_storage_dir(),
        }
    }
}

/// Display configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Currency used when printing amounts.
    #[serde(default)]
    pub currency: Currency,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Compact single-line text.
    #[default]
    Compact,
    /// One JSON object per event.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_commerce::Money;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: CliConfig = toml::from_str("").unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.storage.dir, PathBuf::from(".cart"));
        assert_eq!(config.pricing, PricingPolicy::default());
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_partial_toml() {
        let config: CliConfig = toml::from_str(
            r#"
            [storage]
            dir = "/var/lib/cart"

            [pricing]
            shipping_fee = 150
            tax_rate_bps = 500

            [display]
            currency = "USD"

            [logging]
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.storage.dir, PathBuf::from("/var/lib/cart"));
        assert_eq!(config.pricing.shipping_fee, Money::from_major(150));
        assert_eq!(config.pricing.free_shipping_threshold, Money::from_major(1000));
        assert_eq!(config.pricing.tax_rate_bps, 500);
        assert_eq!(config.display.currency, Currency::USD);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = CliConfig::default();
        config.pricing.shipping_fee = Money::from_decimal(99.5);
        config.display.currency = Currency::EUR;

        for name in ["cart.toml", "cart.json"] {
            let path = dir.path().join(name);
            config.save(&path).unwrap();
            assert_eq!(CliConfig::load(&path).unwrap(), config);
        }
    }

    #[test]
    fn test_invalid_config_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.toml");
        std::fs::write(&path, "[pricing]\ntax_rate_bps = \"lots\"").unwrap();

        let err = CliConfig::load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("cart.toml"));
    }
}
