//! # Report Command
//!
//! Runs the time-in-state report for a project and prints it either as
//! semicolon-delimited lines or as a table.

use std::io;

use anyhow::Result;
use clap::Args;
use dwell_core::output::format_issue_key;
use dwell_core::{
  CollectingSink, DelimitedSink, IssueReportRow, ItemScan, ReportConfig, ReportOutcome, ReportSettings,
  format_elapsed, generate_transition_report, get_config_dirs, print_info, print_warning,
};
use tabled::settings::Style;
use tabled::{Table, Tabled};
use tracing::info;

use crate::clients::create_jira_runtime_and_client;

/// Arguments for the report command
#[derive(Args)]
pub struct ReportArgs {
  /// The Jira project key (e.g., MSP)
  #[arg(required = true, index = 1)]
  pub project: String,

  /// Label that opens the interval (defaults to the configured start state)
  #[arg(long, value_name = "LABEL")]
  pub from: Option<String>,

  /// Label that closes the interval (defaults to the configured end state)
  #[arg(long, value_name = "LABEL")]
  pub to: Option<String>,

  /// Consider every item of a changelog entry instead of only the first
  #[arg(long)]
  pub scan_all_items: bool,

  /// Print a table instead of delimited lines
  #[arg(long)]
  pub table: bool,
}

/// Handle the report command
pub(crate) fn handle_report_command(args: ReportArgs) -> Result<()> {
  let config = get_config_dirs()?.load_report_config()?;
  let settings = resolve_settings(&config, &args);

  let (rt, jira_client) = create_jira_runtime_and_client()?;

  let outcome = if args.table {
    let mut sink = CollectingSink::default();
    let outcome = rt.block_on(generate_transition_report(&jira_client, &args.project, &settings, &mut sink))?;

    if sink.rows.is_empty() {
      print_info(&format!("No issues found in project {}", format_issue_key(&args.project)));
    } else {
      println!("{}", render_report_table(&sink.rows));
    }
    outcome
  } else {
    let mut sink = DelimitedSink::new(io::stdout().lock());
    rt.block_on(generate_transition_report(&jira_client, &args.project, &settings, &mut sink))?
  };

  report_skipped(&outcome);
  info!(
    "Reported {} issues, skipped {}",
    outcome.emitted,
    outcome.skipped.len()
  );

  Ok(())
}

/// Merge command-line overrides into the configured report settings
fn resolve_settings(config: &ReportConfig, args: &ReportArgs) -> ReportSettings {
  let mut settings = config.settings();

  if let Some(from) = &args.from {
    settings.start_state = from.clone();
  }
  if let Some(to) = &args.to {
    settings.end_state = to.clone();
  }
  if args.scan_all_items {
    settings.item_scan = ItemScan::All;
  }

  settings
}

fn report_skipped(outcome: &ReportOutcome) {
  for skipped in &outcome.skipped {
    print_warning(&format!("Skipped {}: {}", skipped.key, skipped.reason));
  }
}

/// Render report rows as a table
fn render_report_table(rows: &[IssueReportRow]) -> String {
  #[derive(Tabled)]
  struct ReportRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Summary")]
    summary: String,
    #[tabled(rename = "Time in State")]
    duration: String,
    #[tabled(rename = "Link")]
    link: String,
  }

  let table_rows: Vec<ReportRow> = rows
    .iter()
    .map(|row| ReportRow {
      key: row.key.clone(),
      summary: row.summary.clone(),
      duration: format_elapsed(row.duration),
      link: row.self_link.clone(),
    })
    .collect();

  Table::new(table_rows).with(Style::sharp()).to_string()
}
