//! # Release Command
//!
//! List the versions of a project and the issues scheduled for a version.

use anyhow::Result;
use clap::{Args, Subcommand};
use dwell_core::consts::REPORT_ISSUE_FIELDS;
use dwell_core::print_info;
use dwell_jira::{JiraIssue, JiraVersion};
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::clients::create_jira_runtime_and_client;

/// Command for releases
#[derive(Args)]
pub struct ReleaseArgs {
  /// The subcommand to execute
  #[command(subcommand)]
  pub subcommand: ReleaseSubcommands,
}

/// Subcommands for the release command
#[derive(Subcommand)]
pub enum ReleaseSubcommands {
  /// List the versions of a project
  #[command(alias = "ls")]
  List {
    /// The Jira project key (e.g., MSP)
    #[arg(required = true, index = 1)]
    project: String,
  },

  /// List the issues whose fix version is the given release
  Issues {
    /// The version name (e.g., 1.0)
    #[arg(required = true, index = 1, value_name = "VERSION")]
    fix_version: String,
  },
}

/// Handle the release command
pub(crate) fn handle_release_command(release: ReleaseArgs) -> Result<()> {
  let (rt, jira_client) = create_jira_runtime_and_client()?;

  match release.subcommand {
    ReleaseSubcommands::List { project } => {
      let versions = rt.block_on(jira_client.get_project_versions(&project))?;
      if versions.is_empty() {
        print_info(&format!("Project {project} has no versions"));
      } else {
        println!("{}", render_versions(&versions));
      }
    }
    ReleaseSubcommands::Issues { fix_version } => {
      let result = rt.block_on(jira_client.get_issues_in_release(&fix_version, REPORT_ISSUE_FIELDS))?;
      if result.issues.is_empty() {
        print_info(&format!("No issues scheduled for {fix_version}"));
      } else {
        println!("{}", render_issues(&result.issues));
      }
    }
  }

  Ok(())
}

fn render_versions(versions: &[JiraVersion]) -> String {
  #[derive(Tabled)]
  struct VersionRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Released")]
    released: String,
    #[tabled(rename = "Release Date")]
    release_date: String,
    #[tabled(rename = "Description")]
    description: String,
  }

  let rows: Vec<VersionRow> = versions
    .iter()
    .map(|version| VersionRow {
      name: version.name.clone(),
      released: if version.released { "yes" } else { "no" }.to_string(),
      release_date: version.release_date.clone().unwrap_or_default(),
      description: version.description.clone().unwrap_or_default(),
    })
    .collect();

  Table::new(rows).with(Style::sharp()).to_string()
}

fn render_issues(issues: &[JiraIssue]) -> String {
  #[derive(Tabled)]
  struct IssueRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Summary")]
    summary: String,
  }

  let rows: Vec<IssueRow> = issues
    .iter()
    .map(|issue| IssueRow {
      key: issue.key.clone(),
      summary: issue.fields.summary.clone(),
    })
    .collect();

  Table::new(rows).with(Style::sharp()).to_string()
}
