//! Authentication helpers for the Jira client.
//!
//! Credential lookup and runtime construction live here so every CLI command
//! goes through the same authentication flow.

use std::path::Path;

use anyhow::{Context, Result};
use dwell_core::creds::Credentials;
use dwell_core::creds::netrc::{get_netrc_path, has_insecure_permissions, normalize_host, parse_netrc_file};
use tokio::runtime::Runtime;
use tracing::{debug, warn};

use crate::client::{JiraClient, create_jira_client};

/// Check if Jira credentials are available for the provided host.
pub fn check_jira_credentials(home: &Path, jira_host: &str) -> Result<bool> {
  Ok(get_jira_credentials(home, jira_host).is_ok())
}

/// Retrieve Jira credentials for a host from `~/.netrc`.
///
/// The entry for the exact `host[:port]` wins; otherwise an entry for the bare
/// host name is used.
pub fn get_jira_credentials(home: &Path, jira_host: &str) -> Result<Credentials> {
  let netrc_path = get_netrc_path(home);
  let normalized_host = normalize_host(jira_host);

  if netrc_path.exists() {
    if has_insecure_permissions(&netrc_path)? {
      warn!(
        "{} is readable by other users; consider running chmod 600 on it",
        netrc_path.display()
      );
    }

    if let Some(creds) = parse_netrc_file(&netrc_path, &normalized_host)? {
      return Ok(creds);
    }

    if let Some((bare_host, _port)) = normalized_host.split_once(':') {
      debug!("No .netrc entry for {}, trying {}", normalized_host, bare_host);
      if let Some(creds) = parse_netrc_file(&netrc_path, bare_host)? {
        return Ok(creds);
      }
    }
  }

  Err(anyhow::anyhow!(
    "Jira credentials not found in .netrc file. Please add credentials for machine '{normalized_host}' or run 'dwell creds set'."
  ))
}

/// Creates an authenticated Jira client using credentials from .netrc.
pub fn create_jira_client_from_netrc(home: &Path, jira_host: &str) -> Result<JiraClient> {
  let credentials = get_jira_credentials(home, jira_host).context("Failed to get credentials")?;

  Ok(create_jira_client(
    jira_host,
    &credentials.username,
    &credentials.password,
  ))
}

/// Creates a tokio runtime and an authenticated Jira client.
pub fn create_jira_runtime_and_client(home: &Path, jira_host: &str) -> Result<(Runtime, JiraClient)> {
  let rt = Runtime::new().context("Failed to create async runtime")?;
  let client = create_jira_client_from_netrc(home, jira_host)?;
  Ok((rt, client))
}
