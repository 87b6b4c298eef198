//! # Issue Command
//!
//! View, create, edit, assign and delete Jira issues, and inspect their
//! changelog.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use dwell_core::output::format_issue_key;
use dwell_core::{print_info, print_success};
use dwell_jira::JiraIssue;
use owo_colors::OwoColorize;

use crate::clients::create_jira_runtime_and_client;

/// Command for issue management
#[derive(Args)]
pub struct IssueArgs {
  /// The subcommand to execute
  #[command(subcommand)]
  pub subcommand: IssueSubcommands,
}

/// JSON body given inline or read from a file
#[derive(Args)]
pub struct PayloadArgs {
  /// JSON representation of the issue
  #[arg(long, value_name = "JSON", conflicts_with = "file", required_unless_present = "file")]
  pub json: Option<String>,

  /// Read the JSON representation from a file
  #[arg(long, value_name = "PATH")]
  pub file: Option<PathBuf>,
}

/// Subcommands for the issue command
#[derive(Subcommand)]
pub enum IssueSubcommands {
  /// View a Jira issue
  #[command(long_about = "View details of a Jira issue.\n\n\
                   Displays the key, summary, status, assignee and description.")]
  View {
    /// The Jira issue key (e.g., PROJ-123)
    #[arg(required = true, index = 1)]
    issue_key: String,
  },

  /// Print the changelog of an issue
  Changelog {
    /// The Jira issue key (e.g., PROJ-123)
    #[arg(required = true, index = 1)]
    issue_key: String,
  },

  /// Print the summary of an issue
  Summary {
    /// The Jira issue key (e.g., PROJ-123)
    #[arg(required = true, index = 1)]
    issue_key: String,
  },

  /// Create an issue or sub-task from JSON
  #[command(long_about = "Create an issue or sub-task from its JSON representation.\n\n\
                   The body follows the Jira REST API, e.g.\n\
                   {\"fields\": {\"project\": {\"key\": \"MSP\"}, \"summary\": \"...\", \"issuetype\": {\"name\": \"Task\"}}}")]
  Create {
    #[command(flatten)]
    payload: PayloadArgs,
  },

  /// Edit an issue from JSON
  Edit {
    /// The Jira issue key (e.g., PROJ-123)
    #[arg(required = true, index = 1)]
    issue_key: String,

    #[command(flatten)]
    payload: PayloadArgs,
  },

  /// Assign an issue, or unassign it when no user is given
  Assign {
    /// The Jira issue key (e.g., PROJ-123)
    #[arg(required = true, index = 1)]
    issue_key: String,

    /// The username of the new assignee
    #[arg(index = 2)]
    username: Option<String>,
  },

  /// Delete an issue
  Delete {
    /// The Jira issue key (e.g., PROJ-123)
    #[arg(required = true, index = 1)]
    issue_key: String,
  },
}

/// Handle the issue command
pub(crate) fn handle_issue_command(issue: IssueArgs) -> Result<()> {
  let (rt, jira_client) = create_jira_runtime_and_client()?;

  match issue.subcommand {
    IssueSubcommands::View { issue_key } => {
      let issue = rt.block_on(jira_client.get_issue(&issue_key, None))?;
      print_issue(&issue);
    }
    IssueSubcommands::Changelog { issue_key } => {
      let issue = rt.block_on(jira_client.get_issue_changelog(&issue_key))?;
      if issue.changelog.histories.is_empty() {
        print_info(&format!("{} has no changelog entries", format_issue_key(&issue.key)));
      }
      for history in &issue.changelog.histories {
        for item in &history.items {
          println!(
            "{}  {}: {} -> {}",
            history.created.dimmed(),
            item.field.bold(),
            item.from_value.as_deref().unwrap_or("-"),
            item.to_value.as_deref().unwrap_or("-")
          );
        }
      }
    }
    IssueSubcommands::Summary { issue_key } => {
      println!("{}", rt.block_on(jira_client.get_issue_summary(&issue_key))?);
    }
    IssueSubcommands::Create { payload } => {
      let body = read_payload(&payload)?;
      let created = rt.block_on(jira_client.create_issue(&body))?;
      print_success(&format!("Created {} ({})", format_issue_key(&created.key), created.self_link));
    }
    IssueSubcommands::Edit { issue_key, payload } => {
      let body = read_payload(&payload)?;
      rt.block_on(jira_client.edit_issue(&issue_key, &body))?;
      print_success(&format!("Updated {}", format_issue_key(&issue_key)));
    }
    IssueSubcommands::Assign { issue_key, username } => {
      rt.block_on(jira_client.assign_issue(&issue_key, username.as_deref()))?;
      match username {
        Some(user) => print_success(&format!("Assigned {} to {user}", format_issue_key(&issue_key))),
        None => print_success(&format!("Unassigned {}", format_issue_key(&issue_key))),
      }
    }
    IssueSubcommands::Delete { issue_key } => {
      rt.block_on(jira_client.delete_issue(&issue_key))?;
      print_success(&format!("Deleted {}", format_issue_key(&issue_key)));
    }
  }

  Ok(())
}

/// Parse the JSON body of a create or edit request
fn read_payload(payload: &PayloadArgs) -> Result<serde_json::Value> {
  let text = match (&payload.json, &payload.file) {
    (Some(json), _) => json.clone(),
    (None, Some(path)) => read_payload_file(path)?,
    (None, None) => return Err(anyhow::anyhow!("Provide the issue JSON with --json or --file")),
  };

  serde_json::from_str(&text).context("Issue representation is not valid JSON")
}

fn read_payload_file(path: &Path) -> Result<String> {
  fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

const LINE_WIDTH: usize = 78;

/// Left and right rule lengths that center a title within `width` columns
fn title_padding(title: &str, width: usize) -> (usize, usize) {
  let free = width.saturating_sub(title.chars().count());
  let left = free / 2;
  (left, free - left)
}

fn print_issue(issue: &JiraIssue) {
  let title = format!(" Jira Issue: {} ", issue.key);
  let (left_padding, right_padding) = title_padding(&title, LINE_WIDTH);

  println!(
    "\n{}{}{}",
    "─".repeat(left_padding),
    title.blue().bold(),
    "─".repeat(right_padding)
  );

  let status = issue
    .fields
    .status
    .as_ref()
    .map(|status| status.name.as_str())
    .unwrap_or("Unknown");
  let assignee = issue
    .fields
    .assignee
    .as_ref()
    .map(|user| user.display_name.as_str())
    .unwrap_or("Unassigned");

  println!("\n  {} {}", "•".blue(), format!("Key:      {}", issue.key).bold());
  println!("  {} {}", "•".blue(), format!("Summary:  {}", issue.fields.summary).bold());
  println!("  {} {}", "•".blue(), format!("Status:   {status}").yellow().bold());
  println!("  {} Assignee: {}", "•".blue(), assignee);

  if let Some(description) = &issue.fields.description {
    println!();
    for line in description.lines() {
      println!("  {line}");
    }
  }

  println!("\n{}\n", "─".repeat(LINE_WIDTH));
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_title_padding_centers_title() {
    let title = " Jira Issue: MSP-1 ";
    let (left, right) = title_padding(title, LINE_WIDTH);

    assert_eq!(left + title.len() + right, LINE_WIDTH);
    assert!(right - left <= 1);
    assert_eq!(title_padding(&"x".repeat(100), LINE_WIDTH), (0, 0));
  }

  #[test]
  fn test_read_payload_inline() {
    let payload = PayloadArgs {
      json: Some(r#"{"fields": {"summary": "Renamed"}}"#.to_string()),
      file: None,
    };

    let body = read_payload(&payload).unwrap();
    assert_eq!(body["fields"]["summary"], "Renamed");
  }

  #[test]
  fn test_read_payload_from_file() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("issue.json");
    fs::write(&path, r#"{"fields": {"project": {"key": "MSP"}}}"#).unwrap();

    let payload = PayloadArgs {
      json: None,
      file: Some(path),
    };

    let body = read_payload(&payload).unwrap();
    assert_eq!(body["fields"]["project"]["key"], "MSP");
  }

  #[test]
  fn test_read_payload_rejects_invalid_json() {
    let payload = PayloadArgs {
      json: Some("{not json".to_string()),
      file: None,
    };

    let err = read_payload(&payload).unwrap_err();
    assert!(err.to_string().contains("not valid JSON"));
  }
}
