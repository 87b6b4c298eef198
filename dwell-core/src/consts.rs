//! Constants shared across the dwell crates.

/// Environment variable storing the Jira host configuration.
pub const ENV_JIRA_HOST: &str = "JIRA_HOST";

/// Label whose last occurrence opens the reported interval.
pub const DEFAULT_START_STATE: &str = "MSP Sprint 1";

/// Label whose last occurrence closes the reported interval.
pub const DEFAULT_END_STATE: &str = "Done";

/// Changelog fields whose transitions are considered by the report.
pub const RELEVANT_FIELDS: [&str; 3] = ["status", "resolution", "Sprint"];

/// Issue fields requested when listing a project for the report.
pub const REPORT_ISSUE_FIELDS: &str = "summary";

/// Default chrono format for changelog `created` timestamps.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
