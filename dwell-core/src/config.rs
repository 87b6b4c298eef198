//! # Configuration Management
//!
//! Handles application configuration and directory management for dwell,
//! including XDG base directory support and the persisted report settings.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::changelog::ItemScan;
use crate::consts::{DEFAULT_END_STATE, DEFAULT_START_STATE};
use crate::report::ReportSettings;
use crate::timestamp::TimestampParser;

/// Represents the configuration directories for the dwell application
#[derive(Debug, Clone)]
pub struct ConfigDirs {
  pub config_dir: PathBuf,
}

impl ConfigDirs {
  /// Create a new ConfigDirs instance
  pub fn new() -> Result<Self> {
    let proj_dirs = ProjectDirs::from("", "", "dwell").context("Failed to determine project directories")?;

    Ok(Self {
      config_dir: proj_dirs.config_dir().to_path_buf(),
    })
  }

  /// Get the config directory
  pub fn config_dir(&self) -> &PathBuf {
    &self.config_dir
  }

  /// Get the path to the report configuration file
  pub fn report_config_path(&self) -> PathBuf {
    self.config_dir.join("report.toml")
  }

  /// Load report configuration from file or return default
  pub fn load_report_config(&self) -> Result<ReportConfig> {
    let config_path = self.report_config_path();

    if config_path.exists() {
      let content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read report config from {}", config_path.display()))?;

      let config: ReportConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse report config from {}", config_path.display()))?;

      Ok(config)
    } else {
      Ok(ReportConfig::default())
    }
  }

  /// Save report configuration to file
  pub fn save_report_config(&self, config: &ReportConfig) -> Result<()> {
    let config_path = self.report_config_path();

    if let Some(parent) = config_path.parent() {
      fs::create_dir_all(parent).with_context(|| format!("Failed to create config directory {}", parent.display()))?;
    }

    let content = toml::to_string_pretty(config).context("Failed to serialize report config to TOML")?;

    fs::write(&config_path, content)
      .with_context(|| format!("Failed to write report config to {}", config_path.display()))?;

    Ok(())
  }
}

/// Get the configuration directories
pub fn get_config_dirs() -> Result<ConfigDirs> {
  ConfigDirs::new()
}

/// Persisted settings for Jira access and the transition report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
  /// Jira host URL (e.g., https://company.atlassian.net)
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub host: Option<String>,

  /// Label that opens the reported interval
  #[serde(default = "default_start_state")]
  pub start_state: String,

  /// Label that closes the reported interval
  #[serde(default = "default_end_state")]
  pub end_state: String,

  #[serde(default)]
  pub item_scan: ItemScan,

  #[serde(default)]
  pub timestamp: TimestampParser,
}

fn default_start_state() -> String {
  DEFAULT_START_STATE.to_string()
}

fn default_end_state() -> String {
  DEFAULT_END_STATE.to_string()
}

impl Default for ReportConfig {
  fn default() -> Self {
    Self {
      host: None,
      start_state: default_start_state(),
      end_state: default_end_state(),
      item_scan: ItemScan::default(),
      timestamp: TimestampParser::default(),
    }
  }
}

impl ReportConfig {
  /// Build report settings from this configuration
  pub fn settings(&self) -> ReportSettings {
    ReportSettings {
      start_state: self.start_state.clone(),
      end_state: self.end_state.clone(),
      item_scan: self.item_scan,
      timestamp: self.timestamp.clone(),
      ..ReportSettings::default()
    }
  }
}

#[cfg(test)]
mod tests {
  use dwell_test_utils::EnvTestGuard;

  use super::*;

  #[test]
  fn test_report_config_path() {
    let config_dirs = ConfigDirs::new().unwrap();
    let path = config_dirs.report_config_path();

    assert!(path.ends_with("report.toml"));
    assert!(path.starts_with(config_dirs.config_dir()));
  }

  #[test]
  fn test_default_report_config() {
    let config = ReportConfig::default();
    assert_eq!(config.host, None);
    assert_eq!(config.start_state, "MSP Sprint 1");
    assert_eq!(config.end_state, "Done");
    assert_eq!(config.item_scan, ItemScan::First);

    let settings = config.settings();
    assert_eq!(settings.relevant_fields, ["status", "resolution", "Sprint"]);
  }

  #[test]
  fn test_partial_config_uses_defaults() {
    let config: ReportConfig = toml::from_str(
      r#"
end_state = "Closed"
item_scan = "all"

[timestamp]
strip_suffix = 9
"#,
    )
    .unwrap();

    assert_eq!(config.start_state, "MSP Sprint 1");
    assert_eq!(config.end_state, "Closed");
    assert_eq!(config.item_scan, ItemScan::All);
    assert_eq!(config.timestamp.format, "%Y-%m-%dT%H:%M:%S");
    assert_eq!(config.timestamp.strip_suffix, Some(9));
  }

  #[test]
  fn test_save_and_load_report_config() {
    let _env = EnvTestGuard::new();
    let config_dirs = ConfigDirs::new().unwrap();
    assert!(!config_dirs.report_config_path().exists());
    assert_eq!(config_dirs.load_report_config().unwrap(), ReportConfig::default());

    let config = ReportConfig {
      host: Some("https://jira.example.com".to_string()),
      start_state: "In Progress".to_string(),
      ..ReportConfig::default()
    };
    config_dirs.save_report_config(&config).unwrap();

    assert_eq!(config_dirs.load_report_config().unwrap(), config);
  }

  #[test]
  fn test_load_invalid_report_config() {
    let _env = EnvTestGuard::new();
    let config_dirs = ConfigDirs::new().unwrap();
    fs::create_dir_all(config_dirs.config_dir()).unwrap();
    fs::write(config_dirs.report_config_path(), "item_scan = 42").unwrap();

    let err = config_dirs.load_report_config().unwrap_err();
    assert!(err.to_string().contains("Failed to parse report config"));
  }
}
