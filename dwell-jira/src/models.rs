use dwell_core::HistoryEntry;
use serde::{Deserialize, Serialize};

/// Represents Jira authentication credentials
#[derive(Clone)]
pub struct JiraAuth {
  pub username: String,
  pub api_token: String,
}

/// Represents a Jira issue
#[derive(Debug, Deserialize)]
pub struct JiraIssue {
  #[serde(default)]
  pub id: String,
  pub key: String,
  #[serde(rename = "self", default)]
  pub self_link: String,
  #[serde(default)]
  pub fields: JiraIssueFields,
}

/// Represents Jira issue fields. Every field is optional because callers
/// choose which fields the server returns.
#[derive(Debug, Default, Deserialize)]
pub struct JiraIssueFields {
  #[serde(default)]
  pub summary: String,
  pub description: Option<String>,
  pub status: Option<JiraIssueStatus>,
  pub assignee: Option<JiraUser>,
  pub created: Option<String>,
  pub updated: Option<String>,
}

/// Represents a Jira issue status
#[derive(Debug, Deserialize)]
pub struct JiraIssueStatus {
  pub id: Option<String>,
  pub name: String,
}

/// Represents a Jira user
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraUser {
  pub name: Option<String>,
  #[serde(default)]
  pub display_name: String,
  pub email_address: Option<String>,
}

/// Issue payload returned by `?expand=changelog`
#[derive(Debug, Deserialize)]
pub struct JiraIssueChangelog {
  pub key: String,
  #[serde(default)]
  pub changelog: JiraChangelog,
}

/// The changelog block of an expanded issue
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraChangelog {
  #[serde(default)]
  pub start_at: u64,
  #[serde(default)]
  pub total: u64,
  #[serde(default)]
  pub histories: Vec<HistoryEntry>,
}

/// Represents a page of JQL search results
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraSearchResult {
  #[serde(default)]
  pub start_at: u64,
  #[serde(default)]
  pub max_results: u64,
  #[serde(default)]
  pub total: u64,
  #[serde(default)]
  pub issues: Vec<JiraIssue>,
}

/// Response of a successful issue creation
#[derive(Debug, Deserialize)]
pub struct CreatedIssue {
  pub id: String,
  pub key: String,
  #[serde(rename = "self")]
  pub self_link: String,
}

/// Represents an assignee change request payload
#[derive(Debug, Serialize)]
pub struct AssigneeRequest {
  pub name: Option<String>,
}

/// Represents a single worklog entry
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraWorklog {
  pub id: String,
  pub author: Option<JiraUser>,
  pub comment: Option<String>,
  pub started: Option<String>,
  #[serde(default)]
  pub time_spent: String,
  #[serde(default)]
  pub time_spent_seconds: u64,
}

/// Represents the worklogs of an issue
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraWorklogs {
  #[serde(default)]
  pub start_at: u64,
  #[serde(default)]
  pub max_results: u64,
  #[serde(default)]
  pub total: u64,
  #[serde(default)]
  pub worklogs: Vec<JiraWorklog>,
}

/// Represents the watchers of an issue
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraWatchers {
  #[serde(default)]
  pub watch_count: u64,
  #[serde(default)]
  pub is_watching: bool,
  #[serde(default)]
  pub watchers: Vec<JiraUser>,
}

/// Represents the voting data of an issue
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraVotes {
  #[serde(default)]
  pub votes: u64,
  #[serde(default)]
  pub has_voted: bool,
  #[serde(default)]
  pub voters: Vec<JiraUser>,
}

/// Represents a project version (release)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraVersion {
  pub id: String,
  pub name: String,
  pub description: Option<String>,
  #[serde(default)]
  pub released: bool,
  #[serde(default)]
  pub archived: bool,
  pub release_date: Option<String>,
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn test_jira_issue_deserialization() {
    let json = json!({
        "id": "10000",
        "key": "PROJ-123",
        "self": "http://jira.local/rest/api/2/issue/10000",
        "fields": {
            "summary": "Test issue",
            "description": "This is a test issue",
            "status": {
                "name": "In Progress"
            },
            "assignee": {
                "name": "jdoe",
                "displayName": "Jane Doe"
            }
        }
    });

    let issue: JiraIssue = serde_json::from_value(json).unwrap();

    assert_eq!(issue.id, "10000");
    assert_eq!(issue.key, "PROJ-123");
    assert_eq!(issue.self_link, "http://jira.local/rest/api/2/issue/10000");
    assert_eq!(issue.fields.summary, "Test issue");
    assert_eq!(issue.fields.description, Some("This is a test issue".to_string()));
    assert_eq!(issue.fields.status.unwrap().name, "In Progress");
    assert_eq!(issue.fields.assignee.unwrap().display_name, "Jane Doe");
  }

  #[test]
  fn test_issue_with_restricted_fields() {
    let issue: JiraIssue = serde_json::from_value(json!({
        "key": "PROJ-7",
        "fields": { "summary": "Only the summary" }
    }))
    .unwrap();

    assert_eq!(issue.fields.summary, "Only the summary");
    assert!(issue.fields.status.is_none());
    assert!(issue.self_link.is_empty());
  }

  #[test]
  fn test_changelog_deserialization() {
    let issue: JiraIssueChangelog = serde_json::from_value(json!({
        "key": "PROJ-1",
        "changelog": {
            "startAt": 0,
            "maxResults": 2,
            "total": 2,
            "histories": [
                {
                    "id": "1",
                    "author": { "name": "admin" },
                    "created": "2020-01-01T00:00:00.000+0000",
                    "items": [
                        { "field": "status", "fieldtype": "jira", "from": "1", "fromString": "Open", "to": "3", "toString": "MSP Sprint 1" }
                    ]
                },
                {
                    "id": "2",
                    "created": "2020-01-05T00:00:00.000+0000",
                    "items": [
                        { "field": "status", "fromString": "MSP Sprint 1", "toString": "Done" }
                    ]
                }
            ]
        }
    }))
    .unwrap();

    assert_eq!(issue.changelog.total, 2);
    assert_eq!(issue.changelog.histories.len(), 2);
    assert_eq!(
      issue.changelog.histories[0].items[0].to_value.as_deref(),
      Some("MSP Sprint 1")
    );
  }

  #[test]
  fn test_worklogs_deserialization() {
    let worklogs: JiraWorklogs = serde_json::from_value(json!({
        "startAt": 0,
        "maxResults": 1,
        "total": 1,
        "worklogs": [
            {
                "id": "100",
                "author": { "name": "jdoe", "displayName": "Jane Doe" },
                "comment": "Investigated",
                "started": "2020-01-02T09:00:00.000+0000",
                "timeSpent": "3h 20m",
                "timeSpentSeconds": 12000
            }
        ]
    }))
    .unwrap();

    assert_eq!(worklogs.total, 1);
    assert_eq!(worklogs.worklogs[0].time_spent, "3h 20m");
    assert_eq!(worklogs.worklogs[0].time_spent_seconds, 12000);
  }

  #[test]
  fn test_versions_deserialization() {
    let versions: Vec<JiraVersion> = serde_json::from_value(json!([
        { "id": "1", "name": "1.0", "released": true, "archived": false, "releaseDate": "2020-02-01" },
        { "id": "2", "name": "1.1" }
    ]))
    .unwrap();

    assert_eq!(versions.len(), 2);
    assert!(versions[0].released);
    assert_eq!(versions[0].release_date.as_deref(), Some("2020-02-01"));
    assert!(!versions[1].released);
  }

  #[test]
  fn test_assignee_request_serialization() {
    let json = serde_json::to_value(AssigneeRequest {
      name: Some("jdoe".to_string()),
    })
    .unwrap();
    assert_eq!(json, json!({ "name": "jdoe" }));

    let json = serde_json::to_value(AssigneeRequest { name: None }).unwrap();
    assert_eq!(json, json!({ "name": null }));
  }
}
