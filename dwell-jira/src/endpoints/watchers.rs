//! # Jira Watcher and Vote Endpoints

use anyhow::{Context, Result};
use reqwest::{Method, StatusCode};

use crate::client::{JiraClient, status_error};
use crate::models::{JiraVotes, JiraWatchers};

impl JiraClient {
  /// List the watchers of an issue
  pub async fn get_watchers(&self, issue_key: &str) -> Result<JiraWatchers> {
    let response = self
      .request(Method::GET, &format!("issue/{issue_key}/watchers"))
      .send()
      .await
      .context("Failed to fetch Jira watchers")?;

    match response.status() {
      StatusCode::OK => response
        .json::<JiraWatchers>()
        .await
        .context("Failed to parse Jira watchers"),
      _ => Err(status_error(response, &format!("Issue {issue_key}")).await),
    }
  }

  /// Remove a user from the watchers of an issue
  pub async fn remove_watcher(&self, issue_key: &str, username: &str) -> Result<()> {
    let response = self
      .request(Method::DELETE, &format!("issue/{issue_key}/watchers"))
      .query(&[("username", username)])
      .send()
      .await
      .context("Failed to remove Jira watcher")?;

    match response.status() {
      StatusCode::NO_CONTENT | StatusCode::OK => Ok(()),
      _ => Err(status_error(response, &format!("Watcher {username} on {issue_key}")).await),
    }
  }

  /// Get the votes of an issue
  pub async fn get_votes(&self, issue_key: &str) -> Result<JiraVotes> {
    let response = self
      .request(Method::GET, &format!("issue/{issue_key}/votes"))
      .send()
      .await
      .context("Failed to fetch Jira votes")?;

    match response.status() {
      StatusCode::OK => response.json::<JiraVotes>().await.context("Failed to parse Jira votes"),
      _ => Err(status_error(response, &format!("Issue {issue_key}")).await),
    }
  }

  /// Withdraw the current user's vote from an issue
  pub async fn remove_vote(&self, issue_key: &str) -> Result<()> {
    let response = self
      .request(Method::DELETE, &format!("issue/{issue_key}/votes"))
      .send()
      .await
      .context("Failed to remove Jira vote")?;

    match response.status() {
      StatusCode::NO_CONTENT | StatusCode::OK => Ok(()),
      _ => Err(status_error(response, &format!("Issue {issue_key}")).await),
    }
  }
}

#[cfg(test)]
mod tests {
  use wiremock::matchers::{method, path, query_param};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use crate::client::create_jira_client;

  #[tokio::test]
  async fn test_get_watchers() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "test_user", "test_token");

    Mock::given(method("GET"))
      .and(path("/rest/api/2/issue/MSP-8/watchers"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
          "watchCount": 2,
          "isWatching": true,
          "watchers": [
              { "name": "admin", "displayName": "Administrator" },
              { "name": "jdoe", "displayName": "Jane Doe" }
          ]
      })))
      .mount(&mock_server)
      .await;

    let watchers = client.get_watchers("MSP-8").await?;
    assert_eq!(watchers.watch_count, 2);
    assert!(watchers.is_watching);
    assert_eq!(watchers.watchers[1].name.as_deref(), Some("jdoe"));
    Ok(())
  }

  #[tokio::test]
  async fn test_remove_watcher_passes_username() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "test_user", "test_token");

    Mock::given(method("DELETE"))
      .and(path("/rest/api/2/issue/MSP-8/watchers"))
      .and(query_param("username", "jdoe"))
      .respond_with(ResponseTemplate::new(204))
      .expect(1)
      .mount(&mock_server)
      .await;

    client.remove_watcher("MSP-8", "jdoe").await?;
    Ok(())
  }

  #[tokio::test]
  async fn test_votes() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "test_user", "test_token");

    Mock::given(method("GET"))
      .and(path("/rest/api/2/issue/MSP-9/votes"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
          "votes": 3,
          "hasVoted": true
      })))
      .mount(&mock_server)
      .await;

    Mock::given(method("DELETE"))
      .and(path("/rest/api/2/issue/MSP-9/votes"))
      .respond_with(ResponseTemplate::new(204))
      .expect(1)
      .mount(&mock_server)
      .await;

    let votes = client.get_votes("MSP-9").await?;
    assert_eq!(votes.votes, 3);
    assert!(votes.has_voted);
    assert!(votes.voters.is_empty());

    client.remove_vote("MSP-9").await?;
    Ok(())
  }

  #[tokio::test]
  async fn test_remove_vote_unexpected_status() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "test_user", "test_token");

    Mock::given(method("DELETE"))
      .and(path("/rest/api/2/issue/MSP-9/votes"))
      .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
      .mount(&mock_server)
      .await;

    let err = client.remove_vote("MSP-9").await.unwrap_err();
    assert_eq!(err.to_string(), "Unexpected error: HTTP 500 Internal Server Error - boom");
    Ok(())
  }
}
