//! # Jira Issue Endpoints
//!
//! Jira API endpoint implementations for issue operations, including
//! fetching, creating, editing, assigning and deleting issues and reading
//! their changelog.

use anyhow::{Context, Result};
use reqwest::{Method, StatusCode};

use crate::client::{JiraClient, status_error};
use crate::models::{AssigneeRequest, CreatedIssue, JiraIssue, JiraIssueChangelog};

impl JiraClient {
  /// Get a Jira issue by key, optionally restricted to a comma-separated
  /// list of fields
  pub async fn get_issue(&self, issue_key: &str, fields: Option<&str>) -> Result<JiraIssue> {
    let mut request = self.request(Method::GET, &format!("issue/{issue_key}"));
    if let Some(fields) = fields {
      request = request.query(&[("fields", fields)]);
    }

    let response = request.send().await.context("Failed to fetch Jira issue")?;

    match response.status() {
      StatusCode::OK => response.json::<JiraIssue>().await.context("Failed to parse Jira issue"),
      _ => Err(status_error(response, &format!("Issue {issue_key}")).await),
    }
  }

  /// Get the summary of an issue
  pub async fn get_issue_summary(&self, issue_key: &str) -> Result<String> {
    let issue = self.get_issue(issue_key, Some("summary")).await?;
    Ok(issue.fields.summary)
  }

  /// Get an issue together with its full changelog
  pub async fn get_issue_changelog(&self, issue_key: &str) -> Result<JiraIssueChangelog> {
    let response = self
      .request(Method::GET, &format!("issue/{issue_key}"))
      .query(&[("expand", "changelog"), ("fields", "changelog")])
      .send()
      .await
      .context("Failed to fetch Jira issue changelog")?;

    match response.status() {
      StatusCode::OK => response
        .json::<JiraIssueChangelog>()
        .await
        .context("Failed to parse Jira issue changelog"),
      _ => Err(status_error(response, &format!("Issue {issue_key}")).await),
    }
  }

  /// Create an issue or sub-task from a JSON representation
  pub async fn create_issue(&self, payload: &serde_json::Value) -> Result<CreatedIssue> {
    let response = self
      .request(Method::POST, "issue")
      .json(payload)
      .send()
      .await
      .context("Failed to create Jira issue")?;

    match response.status() {
      StatusCode::CREATED | StatusCode::OK => response
        .json::<CreatedIssue>()
        .await
        .context("Failed to parse created Jira issue"),
      _ => Err(status_error(response, "Issue").await),
    }
  }

  /// Edit an issue from a JSON representation
  pub async fn edit_issue(&self, issue_key: &str, payload: &serde_json::Value) -> Result<()> {
    let response = self
      .request(Method::PUT, &format!("issue/{issue_key}"))
      .json(payload)
      .send()
      .await
      .context("Failed to edit Jira issue")?;

    match response.status() {
      StatusCode::NO_CONTENT | StatusCode::OK => Ok(()),
      _ => Err(status_error(response, &format!("Issue {issue_key}")).await),
    }
  }

  /// Delete an issue
  pub async fn delete_issue(&self, issue_key: &str) -> Result<()> {
    let response = self
      .request(Method::DELETE, &format!("issue/{issue_key}"))
      .send()
      .await
      .context("Failed to delete Jira issue")?;

    match response.status() {
      StatusCode::NO_CONTENT | StatusCode::OK => Ok(()),
      _ => Err(status_error(response, &format!("Issue {issue_key}")).await),
    }
  }

  /// Assign an issue to a user, or unassign it when `assignee` is `None`
  pub async fn assign_issue(&self, issue_key: &str, assignee: Option<&str>) -> Result<()> {
    let payload = AssigneeRequest {
      name: assignee.map(str::to_string),
    };

    let response = self
      .request(Method::PUT, &format!("issue/{issue_key}/assignee"))
      .json(&payload)
      .send()
      .await
      .context("Failed to assign Jira issue")?;

    match response.status() {
      StatusCode::NO_CONTENT | StatusCode::OK => Ok(()),
      _ => Err(status_error(response, &format!("Issue {issue_key} or user")).await),
    }
  }
}
