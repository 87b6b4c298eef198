//! # Jira Search and Project Endpoints
//!
//! JQL search plus the project and release lookups built on top of it.

use anyhow::{Context, Result};
use reqwest::{Method, StatusCode};

use crate::client::{JiraClient, status_error};
use crate::models::{JiraSearchResult, JiraVersion};

impl JiraClient {
  /// Run a JQL search, returning the requested fields of each match
  pub async fn search_issues(&self, jql: &str, fields: &str) -> Result<JiraSearchResult> {
    let response = self
      .request(Method::GET, "search")
      .query(&[("jql", jql), ("fields", fields)])
      .send()
      .await
      .context("Failed to search Jira issues")?;

    match response.status() {
      StatusCode::OK => response
        .json::<JiraSearchResult>()
        .await
        .context("Failed to parse Jira search results"),
      _ => Err(status_error(response, &format!("Search '{jql}'")).await),
    }
  }

  /// List the issues of a project
  pub async fn get_issues_in_project(&self, project_key: &str, fields: &str) -> Result<JiraSearchResult> {
    self.search_issues(&format!("project=\"{project_key}\""), fields).await
  }

  /// List the issues scheduled for a release
  pub async fn get_issues_in_release(&self, version: &str, fields: &str) -> Result<JiraSearchResult> {
    self.search_issues(&format!("fixVersion=\"{version}\""), fields).await
  }

  /// List the versions (releases) of a project
  pub async fn get_project_versions(&self, project_key: &str) -> Result<Vec<JiraVersion>> {
    let response = self
      .request(Method::GET, &format!("project/{project_key}/versions"))
      .send()
      .await
      .context("Failed to fetch Jira project versions")?;

    match response.status() {
      StatusCode::OK => response
        .json::<Vec<JiraVersion>>()
        .await
        .context("Failed to parse Jira project versions"),
      _ => Err(status_error(response, &format!("Project {project_key}")).await),
    }
  }
}

#[cfg(test)]
mod tests {
  use wiremock::matchers::{method, path, query_param};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use crate::client::create_jira_client;

  #[tokio::test]
  async fn test_get_issues_in_project_builds_jql() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "test_user", "test_token");

    Mock::given(method("GET"))
      .and(path("/rest/api/2/search"))
      .and(query_param("jql", "project=\"MSP\""))
      .and(query_param("fields", "summary"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
          "startAt": 0,
          "maxResults": 50,
          "total": 2,
          "issues": [
              { "id": "1", "key": "MSP-1", "self": "http://jira.local/rest/api/2/issue/1", "fields": { "summary": "First" } },
              { "id": "2", "key": "MSP-2", "self": "http://jira.local/rest/api/2/issue/2", "fields": { "summary": "Second" } }
          ]
      })))
      .expect(1)
      .mount(&mock_server)
      .await;

    let result = client.get_issues_in_project("MSP", "summary").await?;
    assert_eq!(result.total, 2);
    assert_eq!(result.issues[0].key, "MSP-1");
    assert_eq!(result.issues[1].fields.summary, "Second");
    Ok(())
  }

  #[tokio::test]
  async fn test_get_issues_in_release_builds_jql() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "test_user", "test_token");

    Mock::given(method("GET"))
      .and(path("/rest/api/2/search"))
      .and(query_param("jql", "fixVersion=\"1.0\""))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "issues": [] })))
      .expect(1)
      .mount(&mock_server)
      .await;

    let result = client.get_issues_in_release("1.0", "summary").await?;
    assert!(result.issues.is_empty());
    Ok(())
  }

  #[tokio::test]
  async fn test_search_rejects_bad_jql() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "test_user", "test_token");

    Mock::given(method("GET"))
      .and(path("/rest/api/2/search"))
      .respond_with(ResponseTemplate::new(400).set_body_string("Error in the JQL Query"))
      .mount(&mock_server)
      .await;

    let err = client.search_issues("project = ", "summary").await.unwrap_err();
    assert_eq!(
      err.to_string(),
      "Invalid request for Search 'project = ': Error in the JQL Query"
    );
    Ok(())
  }

  #[tokio::test]
  async fn test_get_project_versions() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "test_user", "test_token");

    Mock::given(method("GET"))
      .and(path("/rest/api/2/project/MSP/versions"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
          { "id": "10", "name": "1.0", "released": true, "releaseDate": "2020-03-01" },
          { "id": "11", "name": "1.1", "released": false }
      ])))
      .mount(&mock_server)
      .await;

    let versions = client.get_project_versions("MSP").await?;
    assert_eq!(versions.len(), 2);
    assert_eq!(versions[0].name, "1.0");
    assert!(!versions[1].released);

    Mock::given(method("GET"))
      .and(path("/rest/api/2/project/NOPE/versions"))
      .respond_with(ResponseTemplate::new(404))
      .mount(&mock_server)
      .await;

    let err = client.get_project_versions("NOPE").await.unwrap_err();
    assert_eq!(err.to_string(), "Project NOPE not found");
    Ok(())
  }
}
