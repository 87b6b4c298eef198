//! # Credentials Command
//!
//! Check and store the Jira credentials kept in `~/.netrc`.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use directories::BaseDirs;
use dwell_core::creds::netrc::{get_netrc_path, has_insecure_permissions, normalize_host, write_netrc_entry};
use dwell_core::output::{format_command, format_path};
use dwell_core::url::ensure_url_scheme;
use dwell_core::{print_error, print_info, print_success, print_warning};
use dwell_jira::{check_jira_credentials, create_jira_client, create_jira_client_from_netrc};
use tokio::runtime::Runtime;

use crate::clients::get_jira_host;

/// Command for credential management
#[derive(Args)]
pub struct CredsArgs {
  /// The subcommand to execute
  #[command(subcommand)]
  pub subcommand: CredsSubcommands,
}

/// Subcommands for the creds command
#[derive(Subcommand)]
pub enum CredsSubcommands {
  /// Check if credentials are properly configured
  #[command(long_about = "Checks that Jira credentials are configured and accepted.\n\n\
                      Verifies that your .netrc file exists with secure permissions, holds\n\
                      an entry for the configured Jira host, and that the server accepts it.")]
  Check,

  /// Store credentials for a Jira host
  #[command(long_about = "Stores a username and API token for a Jira host in ~/.netrc.\n\n\
                      The credentials are validated against the server before they are\n\
                      written, unless --no-verify is given.")]
  Set {
    /// Jira username or email
    #[arg(long, required = true)]
    username: String,

    /// Jira API token or password
    #[arg(long, required = true)]
    token: String,

    /// Jira host (defaults to $JIRA_HOST or the configured host)
    #[arg(long)]
    host: Option<String>,

    /// Store the credentials without contacting the server
    #[arg(long)]
    no_verify: bool,
  },
}

/// Handle the creds command
pub(crate) fn handle_creds_command(creds: CredsArgs) -> Result<()> {
  let base_dirs = BaseDirs::new().context("Failed to get $HOME directory")?;
  let home = base_dirs.home_dir();

  match creds.subcommand {
    CredsSubcommands::Check => handle_check_command(home),
    CredsSubcommands::Set {
      username,
      token,
      host,
      no_verify,
    } => handle_set_command(home, &username, &token, host.as_deref(), no_verify),
  }
}

/// Handle the check command
fn handle_check_command(home: &std::path::Path) -> Result<()> {
  let netrc_path = get_netrc_path(home);

  if !netrc_path.exists() {
    print_error("No .netrc file found.");
    println!(
      "Create one with {}.",
      format_command("dwell creds set --username <user> --token <token>")
    );
    return Ok(());
  }

  if has_insecure_permissions(&netrc_path)? {
    print_warning("Your .netrc file has insecure permissions.");
    println!(
      "For security, change permissions to 600: {}",
      format_command(&format!("chmod 600 {}", netrc_path.display()))
    );
  } else {
    print_success(&format!(
      "{} has secure permissions.",
      format_path(&netrc_path.display().to_string())
    ));
  }

  let jira_host = match get_jira_host() {
    Ok(host) => host,
    Err(e) => {
      print_warning(&format!("{e}"));
      return Ok(());
    }
  };

  if !check_jira_credentials(home, &jira_host)? {
    print_warning(&format!("No Jira credentials found for {}.", normalize_host(&jira_host)));
    return Ok(());
  }
  print_success(&format!("Jira credentials found for {}.", normalize_host(&jira_host)));

  let rt = Runtime::new().context("Failed to create async runtime")?;
  let client = create_jira_client_from_netrc(home, &jira_host)?;
  match rt.block_on(client.test_connection()) {
    Ok(true) => print_success("Jira accepted the credentials."),
    Ok(false) => print_error("Jira rejected the credentials."),
    Err(e) => print_error(&format!("Could not reach Jira: {e:#}")),
  }

  Ok(())
}

/// Handle the set command
fn handle_set_command(
  home: &std::path::Path,
  username: &str,
  token: &str,
  host: Option<&str>,
  no_verify: bool,
) -> Result<()> {
  let base_url = match host {
    Some(host) => ensure_url_scheme(host)?,
    None => get_jira_host()?,
  };

  if !no_verify {
    print_info(&format!("Validating credentials against {base_url}..."));
    let rt = Runtime::new().context("Failed to create async runtime")?;
    let client = create_jira_client(&base_url, username, token);

    if !rt.block_on(client.test_connection())? {
      return Err(anyhow::anyhow!(
        "Authentication failed. Please check your Jira credentials."
      ));
    }
  }

  let netrc_path = get_netrc_path(home);
  let machine = normalize_host(&base_url);
  write_netrc_entry(&netrc_path, &machine, username, token)?;

  print_success(&format!(
    "Stored credentials for {machine} in {}",
    format_path(&netrc_path.display().to_string())
  ));
  Ok(())
}
