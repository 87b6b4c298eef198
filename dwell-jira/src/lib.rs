//! # Jira API Client
//!
//! Thin client over the Jira REST API v2: issues, changelogs, comments,
//! attachments, worklogs, watchers, votes, project versions and JQL search.
//! [`JiraClient`] also implements [`dwell_core::IssueSource`] so it can feed
//! the time-in-state report directly.

pub mod auth;
mod client;
mod consts;
mod endpoints;
pub mod models;
mod source;

pub use auth::{
  check_jira_credentials, create_jira_client_from_netrc, create_jira_runtime_and_client, get_jira_credentials,
};
// Re-export the client
pub use client::{JiraClient, create_jira_client};
// Re-export models
pub use models::{
  CreatedIssue, JiraAuth, JiraChangelog, JiraIssue, JiraIssueChangelog, JiraIssueFields, JiraIssueStatus,
  JiraSearchResult, JiraUser, JiraVersion, JiraVotes, JiraWatchers, JiraWorklog, JiraWorklogs,
};
