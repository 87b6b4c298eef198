//! [`IssueSource`] implementation backed by the Jira REST API.

use anyhow::Result;
use dwell_core::{HistoryEntry, IssueHeader, IssueSource};

use crate::client::JiraClient;

impl IssueSource for JiraClient {
  async fn list_issues_in_project(&self, project_key: &str, fields: &str) -> Result<Vec<IssueHeader>> {
    let result = self.get_issues_in_project(project_key, fields).await?;

    Ok(
      result
        .issues
        .into_iter()
        .map(|issue| IssueHeader {
          key: issue.key,
          self_link: issue.self_link,
          summary: issue.fields.summary,
        })
        .collect(),
    )
  }

  async fn get_changelog(&self, issue_key: &str) -> Result<Vec<HistoryEntry>> {
    let issue = self.get_issue_changelog(issue_key).await?;
    Ok(issue.changelog.histories)
  }
}
