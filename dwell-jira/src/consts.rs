//! Constants for the dwell-jira client.

/// User-Agent header value for the Jira API client
pub const USER_AGENT: &str = concat!("dwell/", env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Path of the Jira REST API relative to the server base URL
pub const REST_API_PATH: &str = "rest/api/2";
