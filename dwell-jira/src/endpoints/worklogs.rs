//! # Jira Worklog Endpoints

use anyhow::{Context, Result};
use reqwest::{Method, StatusCode};

use crate::client::{JiraClient, status_error};
use crate::models::{JiraWorklog, JiraWorklogs};

impl JiraClient {
  /// List the worklogs of an issue
  pub async fn get_worklogs(&self, issue_key: &str) -> Result<JiraWorklogs> {
    let response = self
      .request(Method::GET, &format!("issue/{issue_key}/worklog"))
      .send()
      .await
      .context("Failed to fetch Jira worklogs")?;

    match response.status() {
      StatusCode::OK => response
        .json::<JiraWorklogs>()
        .await
        .context("Failed to parse Jira worklogs"),
      _ => Err(status_error(response, &format!("Issue {issue_key}")).await),
    }
  }

  /// Get a single worklog by id
  pub async fn get_worklog(&self, issue_key: &str, worklog_id: &str) -> Result<JiraWorklog> {
    let response = self
      .request(Method::GET, &format!("issue/{issue_key}/worklog/{worklog_id}"))
      .send()
      .await
      .context("Failed to fetch Jira worklog")?;

    match response.status() {
      StatusCode::OK => response
        .json::<JiraWorklog>()
        .await
        .context("Failed to parse Jira worklog"),
      _ => Err(status_error(response, &format!("Worklog {worklog_id} on {issue_key}")).await),
    }
  }

  /// Delete a worklog
  pub async fn delete_worklog(&self, issue_key: &str, worklog_id: &str) -> Result<()> {
    let response = self
      .request(Method::DELETE, &format!("issue/{issue_key}/worklog/{worklog_id}"))
      .send()
      .await
      .context("Failed to delete Jira worklog")?;

    match response.status() {
      StatusCode::NO_CONTENT | StatusCode::OK => Ok(()),
      _ => Err(status_error(response, &format!("Worklog {worklog_id} on {issue_key}")).await),
    }
  }
}
