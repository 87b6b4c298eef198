//! # Dwell Core Library
//!
//! Core library for dwell: the transition interval calculator that measures how
//! long an issue spent between two workflow states, the report generator that
//! drives it over a whole project, and the configuration, credential and
//! output helpers shared by the Jira client and the CLI.

pub mod changelog;
pub mod config;
pub mod consts;
pub mod creds;
pub mod interval;
pub mod output;
pub mod report;
pub mod sink;
pub mod timestamp;
pub mod url;

// Re-export main types
pub use changelog::{ChangeEvent, ChangeItem, HistoryEntry, ItemScan, flatten_changelog};
pub use config::{ConfigDirs, ReportConfig, get_config_dirs};
pub use interval::{TransitionWindow, compute_interval};
pub use output::{ColorMode, print_error, print_info, print_success, print_warning};
pub use report::{
  IssueHeader, IssueSource, ReportError, ReportOutcome, ReportSettings, SkippedIssue, generate_transition_report,
};
pub use sink::{CollectingSink, DelimitedSink, IssueReportRow, ReportSink, format_elapsed};
pub use timestamp::{TimestampParseError, TimestampParser};
