//! # Jira Comment and Attachment Endpoints

use anyhow::{Context, Result};
use reqwest::{Method, StatusCode};

use crate::client::{JiraClient, status_error};

impl JiraClient {
  /// Delete a comment from an issue
  pub async fn delete_comment(&self, issue_key: &str, comment_id: &str) -> Result<()> {
    let response = self
      .request(Method::DELETE, &format!("issue/{issue_key}/comment/{comment_id}"))
      .send()
      .await
      .context("Failed to delete Jira comment")?;

    match response.status() {
      StatusCode::NO_CONTENT | StatusCode::OK => Ok(()),
      _ => Err(status_error(response, &format!("Comment {comment_id} on {issue_key}")).await),
    }
  }

  /// Remove an attachment
  pub async fn remove_attachment(&self, attachment_id: &str) -> Result<()> {
    let response = self
      .request(Method::DELETE, &format!("attachment/{attachment_id}"))
      .send()
      .await
      .context("Failed to remove Jira attachment")?;

    match response.status() {
      StatusCode::NO_CONTENT | StatusCode::OK => Ok(()),
      _ => Err(status_error(response, &format!("Attachment {attachment_id}")).await),
    }
  }
}
