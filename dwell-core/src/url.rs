//! URL helpers for locating the Jira server.

use anyhow::{Context, Result};
use url::{Position, Url};

use crate::consts::ENV_JIRA_HOST;

/// Resolve the Jira base URL with a proper scheme.
///
/// `$JIRA_HOST` takes precedence over the host stored in the configuration
/// file. Hosts without a scheme are assumed to be `https://`.
pub fn resolve_jira_base_url(configured_host: Option<&str>) -> Result<String> {
  if let Ok(host) = std::env::var(ENV_JIRA_HOST)
    && !host.trim().is_empty()
  {
    return ensure_url_scheme(&host).with_context(|| format!("Invalid ${ENV_JIRA_HOST} value '{host}'"));
  }

  match configured_host {
    Some(host) => ensure_url_scheme(host),
    None => Err(anyhow::anyhow!(
      "Jira host not configured. Set ${ENV_JIRA_HOST} or run 'dwell config set --host <url>'"
    )),
  }
}

/// Render a URL without the lone trailing slash `Url` adds to bare hosts.
fn normalize_url(url: &Url) -> String {
  let mut result = url[..Position::BeforePath].to_string();

  let path = url.path();
  if path != "/" {
    result.push_str(path.trim_end_matches('/'));
  }

  result.push_str(&url[Position::AfterPath..]);
  result
}

/// Parse `input` as an https URL, dropping any malformed http(s) prefix.
fn parse_with_https_prefix(input: &str) -> Result<Url> {
  let mut candidate = input;

  if let Some((scheme, rest)) = input.split_once(':')
    && (scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https"))
  {
    let rest = rest.trim_start_matches('/');
    if !rest.is_empty() {
      candidate = rest;
    }
  }

  Url::parse(&format!("https://{candidate}"))
    .with_context(|| format!("Failed to parse URL: '{input}'. Ensure it has a valid scheme."))
}

/// Ensure a URL has a proper scheme (http:// or https://).
///
/// If the input doesn't include a scheme, assumes https://. Malformed schemes
/// like `http:/example.com` are repaired to https.
pub fn ensure_url_scheme(input: &str) -> Result<String> {
  let trimmed = input.trim();
  if trimmed.is_empty() {
    return Err(anyhow::anyhow!("Host cannot be empty"));
  }

  let lowered = trimmed.to_ascii_lowercase();
  let malformed_scheme = (lowered.starts_with("http:") && !lowered.starts_with("http://"))
    || (lowered.starts_with("https:") && !lowered.starts_with("https://"));
  if malformed_scheme {
    return parse_with_https_prefix(trimmed).map(|url| normalize_url(&url));
  }

  let url = match Url::parse(trimmed) {
    Ok(url) if url.scheme().len() > 1 && url.host().is_some() => url,
    _ => parse_with_https_prefix(trimmed)?,
  };

  Ok(normalize_url(&url))
}
