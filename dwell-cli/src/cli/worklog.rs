//! # Worklog Command
//!
//! List, show and delete the worklogs of an issue.

use anyhow::Result;
use clap::{Args, Subcommand};
use dwell_core::output::format_issue_key;
use dwell_core::{print_info, print_success};
use dwell_jira::JiraWorklog;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::clients::create_jira_runtime_and_client;

/// Command for worklog management
#[derive(Args)]
pub struct WorklogArgs {
  /// The subcommand to execute
  #[command(subcommand)]
  pub subcommand: WorklogSubcommands,
}

/// Subcommands for the worklog command
#[derive(Subcommand)]
pub enum WorklogSubcommands {
  /// List the worklogs of an issue
  #[command(alias = "ls")]
  List {
    /// The Jira issue key (e.g., PROJ-123)
    #[arg(required = true, index = 1)]
    issue_key: String,
  },

  /// Show a single worklog
  Get {
    /// The Jira issue key (e.g., PROJ-123)
    #[arg(required = true, index = 1)]
    issue_key: String,

    /// The worklog id
    #[arg(required = true, index = 2)]
    worklog_id: String,
  },

  /// Delete a worklog
  Delete {
    /// The Jira issue key (e.g., PROJ-123)
    #[arg(required = true, index = 1)]
    issue_key: String,

    /// The worklog id
    #[arg(required = true, index = 2)]
    worklog_id: String,
  },
}

#[derive(Tabled)]
struct WorklogRow {
  #[tabled(rename = "ID")]
  id: String,
  #[tabled(rename = "Author")]
  author: String,
  #[tabled(rename = "Started")]
  started: String,
  #[tabled(rename = "Time Spent")]
  time_spent: String,
  #[tabled(rename = "Comment")]
  comment: String,
}

impl From<&JiraWorklog> for WorklogRow {
  fn from(worklog: &JiraWorklog) -> Self {
    Self {
      id: worklog.id.clone(),
      author: worklog
        .author
        .as_ref()
        .map(|author| author.display_name.clone())
        .unwrap_or_default(),
      started: worklog.started.clone().unwrap_or_default(),
      time_spent: worklog.time_spent.clone(),
      comment: worklog.comment.clone().unwrap_or_default(),
    }
  }
}

/// Handle the worklog command
pub(crate) fn handle_worklog_command(worklog: WorklogArgs) -> Result<()> {
  let (rt, jira_client) = create_jira_runtime_and_client()?;

  match worklog.subcommand {
    WorklogSubcommands::List { issue_key } => {
      let worklogs = rt.block_on(jira_client.get_worklogs(&issue_key))?;
      if worklogs.worklogs.is_empty() {
        print_info(&format!("No worklogs on {}", format_issue_key(&issue_key)));
      } else {
        println!("{}", render_worklogs(&worklogs.worklogs));
      }
    }
    WorklogSubcommands::Get { issue_key, worklog_id } => {
      let worklog = rt.block_on(jira_client.get_worklog(&issue_key, &worklog_id))?;
      println!("{}", render_worklogs(std::slice::from_ref(&worklog)));
    }
    WorklogSubcommands::Delete { issue_key, worklog_id } => {
      rt.block_on(jira_client.delete_worklog(&issue_key, &worklog_id))?;
      print_success(&format!(
        "Deleted worklog {worklog_id} from {}",
        format_issue_key(&issue_key)
      ));
    }
  }

  Ok(())
}

fn render_worklogs(worklogs: &[JiraWorklog]) -> String {
  let rows: Vec<WorklogRow> = worklogs.iter().map(WorklogRow::from).collect();
  Table::new(rows).with(Style::sharp()).to_string()
}
