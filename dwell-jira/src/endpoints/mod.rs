//! # Jira API Endpoints
//!
//! Endpoint implementations grouped by resource type. Each module adds
//! methods to [`JiraClient`](crate::JiraClient).

pub mod comments;
pub mod issues;
pub mod search;
pub mod watchers;
pub mod worklogs;
