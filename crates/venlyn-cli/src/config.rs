//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use venlyn_sla::SlaThresholds;

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Window length used when a command does not pass --window-days
    #[serde(default = "default_window_days")]
    pub default_window_days: u32,

    /// SLA threshold table used when the sla command passes no overrides
    #[serde(default)]
    pub thresholds: ThresholdsConfig,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Configured SLA thresholds.
///
/// Kept as plain fields so a hand-edited TOML file deserializes before the
/// ordering invariant is checked; validation happens on conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThresholdsConfig {
    /// Remaining minutes at or below which a timer is warning
    pub warning_minutes: u32,

    /// Remaining minutes at or below which a timer is critical
    pub critical_minutes: u32,
}

impl ThresholdsConfig {
    /// Convert into a validated threshold table.
    pub fn to_thresholds(&self) -> Result<SlaThresholds> {
        SlaThresholds::new(self.warning_minutes, self.critical_minutes).map_err(CliError::from)
    }
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        let defaults = SlaThresholds::default();
        Self {
            warning_minutes: defaults.warning_minutes,
            critical_minutes: defaults.critical_minutes,
        }
    }
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact JSON
    Quiet,
}

impl Config {
    /// Get the configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".venlyn").join("config.toml"))
    }

    /// Load configuration from file or create default.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        if path.exists() {
            let contents = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(&path, contents)?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_window_days: 7,
            thresholds: ThresholdsConfig::default(),
            settings: Settings::default(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_window_days() -> u32 {
    7
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}
