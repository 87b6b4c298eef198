//! # Time-in-State Report
//!
//! Drives the transition report: lists the issues of a project, replays each
//! issue's changelog through the interval calculator and emits one row per
//! issue to a [`ReportSink`].
//!
//! The generator only talks to the upstream tracker through [`IssueSource`],
//! so callers inject whichever client they have.

use std::future::Future;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::changelog::{HistoryEntry, ItemScan, flatten_changelog};
use crate::consts::{DEFAULT_END_STATE, DEFAULT_START_STATE, RELEVANT_FIELDS, REPORT_ISSUE_FIELDS};
use crate::interval::compute_interval;
use crate::sink::{IssueReportRow, ReportSink};
use crate::timestamp::TimestampParser;

/// The identifying fields of a listed issue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueHeader {
  pub key: String,
  #[serde(rename = "self")]
  pub self_link: String,
  pub summary: String,
}

/// Read access to the upstream tracker needed by the report
pub trait IssueSource {
  /// List the issues of a project, in upstream order
  fn list_issues_in_project(
    &self,
    project_key: &str,
    fields: &str,
  ) -> impl Future<Output = anyhow::Result<Vec<IssueHeader>>> + Send;

  /// Fetch the ordered changelog of an issue
  fn get_changelog(&self, issue_key: &str) -> impl Future<Output = anyhow::Result<Vec<HistoryEntry>>> + Send;
}

/// Parameters of a report run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSettings {
  pub start_state: String,
  pub end_state: String,
  pub relevant_fields: Vec<String>,
  pub item_scan: ItemScan,
  pub timestamp: TimestampParser,
}

impl Default for ReportSettings {
  fn default() -> Self {
    Self {
      start_state: DEFAULT_START_STATE.to_string(),
      end_state: DEFAULT_END_STATE.to_string(),
      relevant_fields: RELEVANT_FIELDS.iter().map(|field| field.to_string()).collect(),
      item_scan: ItemScan::default(),
      timestamp: TimestampParser::default(),
    }
  }
}

/// An issue left out of the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedIssue {
  pub key: String,
  pub reason: String,
}

/// Summary of a finished report run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportOutcome {
  pub emitted: usize,
  pub skipped: Vec<SkippedIssue>,
}

/// Errors that abort a report run
#[derive(Debug, Error)]
pub enum ReportError {
  #[error("Failed to query the issue tracker: {0:#}")]
  Collaborator(anyhow::Error),
  #[error("Failed to emit report row: {0:#}")]
  Sink(anyhow::Error),
}

/// Generate the time-in-state report for every issue of a project.
///
/// Issues whose changelog carries a malformed timestamp are skipped and
/// recorded in the outcome; tracker and sink failures abort the run.
pub async fn generate_transition_report<S, K>(
  source: &S,
  project_key: &str,
  settings: &ReportSettings,
  sink: &mut K,
) -> Result<ReportOutcome, ReportError>
where
  S: IssueSource,
  K: ReportSink + ?Sized,
{
  info!(
    project = project_key,
    from = %settings.start_state,
    to = %settings.end_state,
    "Generating transition report"
  );

  let issues = source
    .list_issues_in_project(project_key, REPORT_ISSUE_FIELDS)
    .await
    .map_err(ReportError::Collaborator)?;
  debug!("Found {} issues in project {}", issues.len(), project_key);

  let mut outcome = ReportOutcome::default();

  for issue in issues {
    let histories = source
      .get_changelog(&issue.key)
      .await
      .map_err(ReportError::Collaborator)?;
    let events = flatten_changelog(&histories, settings.item_scan);

    let window = match compute_interval(
      &events,
      &settings.start_state,
      &settings.end_state,
      settings.relevant_fields.as_slice(),
      &settings.timestamp,
    ) {
      Ok(window) => window,
      Err(e) => {
        warn!("Skipping {}: {}", issue.key, e);
        outcome.skipped.push(SkippedIssue {
          key: issue.key,
          reason: e.to_string(),
        });
        continue;
      }
    };

    debug!(
      "{}: {} change events, window {:?} -> {:?}",
      issue.key,
      events.len(),
      window.start,
      window.end
    );

    let row = IssueReportRow {
      key: issue.key,
      summary: issue.summary,
      self_link: issue.self_link,
      duration: window.duration(),
    };
    sink.emit(&row).map_err(ReportError::Sink)?;
    outcome.emitted += 1;
  }

  info!(
    "Report finished: {} rows emitted, {} issues skipped",
    outcome.emitted,
    outcome.skipped.len()
  );
  Ok(outcome)
}
