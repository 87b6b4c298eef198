//! # Credential Management
//!
//! Retrieval and storage of the basic-auth credentials used to talk to Jira.
//! Credentials live in the user's `.netrc` file so they are shared with curl
//! and other tools.

pub mod netrc;

/// Represents credentials for a service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
  pub username: String,
  pub password: String,
}
