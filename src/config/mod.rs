// ABOUTME: Configuration management for atelier
// Handles checkout amounts and timings plus UI preferences, loaded from TOML

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::checkout::CheckoutSettings;
use crate::models::Money;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application version
    #[serde(default = "default_version")]
    pub version: String,

    /// Checkout amounts and timings
    #[serde(default)]
    pub checkout: CheckoutConfig,

    /// UI preferences
    #[serde(default, rename = "ui")]
    pub ui_preferences: UiPreferences,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// Flat shipping fee in cents (default: 2500)
    #[serde(default = "default_shipping_fee_cents")]
    pub shipping_fee_cents: u64,

    /// Estimated tax in cents (default: 6400)
    #[serde(default = "default_tax_cents")]
    pub tax_cents: u64,

    /// Delay before returning home after an order is placed (default: 2000ms)
    #[serde(default = "default_redirect_delay_ms")]
    pub redirect_delay_ms: u64,

    /// How long checkout notifications stay visible (default: 5s)
    #[serde(default = "default_notification_duration_secs")]
    pub notification_duration_secs: u64,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            shipping_fee_cents: default_shipping_fee_cents(),
            tax_cents: default_tax_cents(),
            redirect_delay_ms: default_redirect_delay_ms(),
            notification_duration_secs: default_notification_duration_secs(),
        }
    }
}

impl CheckoutConfig {
    pub fn settings(&self) -> CheckoutSettings {
        CheckoutSettings {
            shipping_fee: Money::from_cents(self.shipping_fee_cents),
            tax: Money::from_cents(self.tax_cents),
            redirect_delay: Duration::from_millis(self.redirect_delay_ms),
            notification_duration: Duration::from_secs(self.notification_duration_secs),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiPreferences {
    /// Event loop tick in milliseconds (default: 250ms)
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl UiPreferences {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_shipping_fee_cents() -> u64 {
    2500
}

fn default_tax_cents() -> u64 {
    6400
}

fn default_redirect_delay_ms() -> u64 {
    2000
}

fn default_notification_duration_secs() -> u64 {
    5
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl AppConfig {
    /// Load configuration from the first location that has a config file
    pub fn load() -> Result<Self> {
        for path in Self::get_config_paths() {
            if path.exists() {
                return Self::load_from_path(&path);
            }
        }
        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config: AppConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to the given file, creating parent directories
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        Ok(())
    }

    /// Get configuration file paths in order of precedence
    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![];

        // 1. Local project config
        if let Ok(cwd) = std::env::current_dir() {
            paths.push(cwd.join(".atelier").join("config.toml"));
        }

        // 2. User config (~/.atelier/config.toml)
        if let Ok(base_dir) = Self::base_dir() {
            paths.push(base_dir.join("config.toml"));
        }

        paths
    }

    /// Base directory for user config and logs
    pub fn base_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".atelier"))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            checkout: CheckoutConfig::default(),
            ui_preferences: UiPreferences::default(),
        }
    }
}
