//! # Jira HTTP Client
//!
//! HTTP client for the Jira REST API v2, handling basic authentication,
//! request building and the status-code mapping shared by every endpoint.

use anyhow::{Context, Result};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use tracing::debug;

use crate::consts::{REST_API_PATH, USER_AGENT};
use crate::models::JiraAuth;

/// Represents a Jira API client
pub struct JiraClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
  pub(crate) auth: JiraAuth,
}

impl JiraClient {
  /// Create a new Jira client
  pub fn new(base_url: &str, auth: JiraAuth) -> Self {
    let client = Client::new();
    Self {
      client,
      base_url: base_url.trim_end_matches('/').to_string(),
      auth,
    }
  }

  /// The server base URL this client talks to
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Build the absolute URL of a REST API resource
  pub(crate) fn api_url(&self, resource: &str) -> String {
    format!("{}/{}/{}", self.base_url, REST_API_PATH, resource)
  }

  /// Start an authenticated request against a REST API resource
  pub(crate) fn request(&self, method: Method, resource: &str) -> RequestBuilder {
    let url = self.api_url(resource);
    debug!("{} {}", method, url);

    self
      .client
      .request(method, url)
      .header("User-Agent", USER_AGENT)
      .header("Accept", "application/json")
      .basic_auth(&self.auth.username, Some(&self.auth.api_token))
  }

  /// Test the Jira connection by fetching the current user
  pub async fn test_connection(&self) -> Result<bool> {
    let response = self
      .request(Method::GET, "myself")
      .send()
      .await
      .context("Failed to connect to Jira")?;

    Ok(response.status().is_success())
  }
}

/// Map a non-success response to an error naming the requested resource
pub(crate) async fn status_error(response: Response, resource: &str) -> anyhow::Error {
  match response.status() {
    StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
      anyhow::anyhow!("Authentication failed. Please check your Jira credentials.")
    }
    StatusCode::NOT_FOUND => anyhow::anyhow!("{} not found", resource),
    StatusCode::BAD_REQUEST => anyhow::anyhow!(
      "Invalid request for {}: {}",
      resource,
      response.text().await.unwrap_or_default()
    ),
    status => anyhow::anyhow!(
      "Unexpected error: HTTP {} - {}",
      status,
      response.text().await.unwrap_or_default()
    ),
  }
}

/// Create a Jira client from credentials
pub fn create_jira_client(base_url: &str, username: &str, api_token: &str) -> JiraClient {
  let auth = JiraAuth {
    username: username.to_string(),
    api_token: api_token.to_string(),
  };

  JiraClient::new(base_url, auth)
}
