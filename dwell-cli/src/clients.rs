//! # Client Creation
//!
//! Resolves the Jira host from flags, environment and configuration, then
//! builds an authenticated client together with the runtime that drives it.

use anyhow::{Context, Result};
use directories::BaseDirs;
use dwell_core::get_config_dirs;
use dwell_core::url::resolve_jira_base_url;
use dwell_jira::JiraClient;
use tokio::runtime::Runtime;

/// Resolve the Jira base URL, preferring `$JIRA_HOST` over the configured host
pub fn get_jira_host() -> Result<String> {
  let config = get_config_dirs()?.load_report_config()?;
  resolve_jira_base_url(config.host.as_deref())
}

/// Creates a tokio runtime and an authenticated Jira client for the
/// configured host
///
/// Credentials come from `~/.netrc`.
pub fn create_jira_runtime_and_client() -> Result<(Runtime, JiraClient)> {
  let base_dirs = BaseDirs::new().context("Failed to get $HOME directory")?;
  let jira_host = get_jira_host()?;

  dwell_jira::create_jira_runtime_and_client(base_dirs.home_dir(), &jira_host)
}
