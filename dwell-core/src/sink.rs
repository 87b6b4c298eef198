//! # Report Sinks
//!
//! Destinations for report rows. The delimited sink produces the
//! `key;summary;selfLink;duration` text lines consumed by spreadsheets and
//! shell pipelines.

use std::io::Write;

use anyhow::{Context, Result};
use chrono::TimeDelta;

/// One emitted report row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueReportRow {
  pub key: String,
  pub summary: String,
  pub self_link: String,
  pub duration: TimeDelta,
}

/// Receives report rows in emission order
pub trait ReportSink {
  fn emit(&mut self, row: &IssueReportRow) -> Result<()>;
}

/// Writes semicolon-delimited lines to any writer
pub struct DelimitedSink<W: Write> {
  writer: W,
}

impl<W: Write> DelimitedSink<W> {
  pub fn new(writer: W) -> Self {
    Self { writer }
  }

  pub fn into_inner(self) -> W {
    self.writer
  }
}

impl<W: Write> ReportSink for DelimitedSink<W> {
  fn emit(&mut self, row: &IssueReportRow) -> Result<()> {
    writeln!(
      self.writer,
      "{};{};{};{}",
      row.key,
      row.summary,
      row.self_link,
      format_elapsed(row.duration)
    )
    .context("Failed to write report row")?;
    self.writer.flush().context("Failed to flush report output")
  }
}

/// Keeps every row in memory
#[derive(Debug, Default)]
pub struct CollectingSink {
  pub rows: Vec<IssueReportRow>,
}

impl ReportSink for CollectingSink {
  fn emit(&mut self, row: &IssueReportRow) -> Result<()> {
    self.rows.push(row.clone());
    Ok(())
  }
}

/// Render an elapsed duration as `[N day[s], ]H:MM:SS[.ffffff]`.
///
/// Report windows never produce negative durations; a negative input is
/// clamped to `0:00:00`.
pub fn format_elapsed(duration: TimeDelta) -> String {
  let duration = duration.max(TimeDelta::zero());

  let days = duration.num_days();
  let seconds_of_day = duration.num_seconds() - days * 86_400;
  let hours = seconds_of_day / 3_600;
  let minutes = (seconds_of_day % 3_600) / 60;
  let seconds = seconds_of_day % 60;
  let micros = duration.subsec_nanos() / 1_000;

  let mut out = String::new();
  if days != 0 {
    let plural = if days == 1 { "" } else { "s" };
    out.push_str(&format!("{days} day{plural}, "));
  }
  out.push_str(&format!("{hours}:{minutes:02}:{seconds:02}"));
  if micros != 0 {
    out.push_str(&format!(".{micros:06}"));
  }
  out
}
