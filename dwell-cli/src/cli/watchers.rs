//! # Watchers Command

use anyhow::Result;
use clap::{Args, Subcommand};
use dwell_core::output::format_issue_key;
use dwell_core::{print_info, print_success};

use crate::clients::create_jira_runtime_and_client;

/// Command for watcher management
#[derive(Args)]
pub struct WatchersArgs {
  /// The subcommand to execute
  #[command(subcommand)]
  pub subcommand: WatchersSubcommands,
}

/// Subcommands for the watchers command
#[derive(Subcommand)]
pub enum WatchersSubcommands {
  /// List the watchers of an issue
  #[command(alias = "ls")]
  List {
    /// The Jira issue key (e.g., PROJ-123)
    #[arg(required = true, index = 1)]
    issue_key: String,
  },

  /// Stop a user from watching an issue
  #[command(alias = "rm")]
  Remove {
    /// The Jira issue key (e.g., PROJ-123)
    #[arg(required = true, index = 1)]
    issue_key: String,

    /// The username to remove
    #[arg(required = true, index = 2)]
    username: String,
  },
}

/// Handle the watchers command
pub(crate) fn handle_watchers_command(watchers: WatchersArgs) -> Result<()> {
  let (rt, jira_client) = create_jira_runtime_and_client()?;

  match watchers.subcommand {
    WatchersSubcommands::List { issue_key } => {
      let watchers = rt.block_on(jira_client.get_watchers(&issue_key))?;
      print_info(&format!(
        "{} has {} watcher(s)",
        format_issue_key(&issue_key),
        watchers.watch_count
      ));
      for watcher in &watchers.watchers {
        match &watcher.name {
          Some(name) => println!("  {} ({name})", watcher.display_name),
          None => println!("  {}", watcher.display_name),
        }
      }
    }
    WatchersSubcommands::Remove { issue_key, username } => {
      rt.block_on(jira_client.remove_watcher(&issue_key, &username))?;
      print_success(&format!(
        "{username} no longer watches {}",
        format_issue_key(&issue_key)
      ));
    }
  }

  Ok(())
}
