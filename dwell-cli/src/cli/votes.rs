//! # Votes Command

use anyhow::Result;
use clap::{Args, Subcommand};
use dwell_core::output::format_issue_key;
use dwell_core::{print_info, print_success};

use crate::clients::create_jira_runtime_and_client;

/// Command for vote management
#[derive(Args)]
pub struct VotesArgs {
  /// The subcommand to execute
  #[command(subcommand)]
  pub subcommand: VotesSubcommands,
}

/// Subcommands for the votes command
#[derive(Subcommand)]
pub enum VotesSubcommands {
  /// Show the votes of an issue
  Show {
    /// The Jira issue key (e.g., PROJ-123)
    #[arg(required = true, index = 1)]
    issue_key: String,
  },

  /// Withdraw your vote from an issue
  #[command(alias = "rm")]
  Remove {
    /// The Jira issue key (e.g., PROJ-123)
    #[arg(required = true, index = 1)]
    issue_key: String,
  },
}

/// Handle the votes command
pub(crate) fn handle_votes_command(votes: VotesArgs) -> Result<()> {
  let (rt, jira_client) = create_jira_runtime_and_client()?;

  match votes.subcommand {
    VotesSubcommands::Show { issue_key } => {
      let votes = rt.block_on(jira_client.get_votes(&issue_key))?;
      let voted = if votes.has_voted { " (including yours)" } else { "" };
      print_info(&format!(
        "{} has {} vote(s){voted}",
        format_issue_key(&issue_key),
        votes.votes
      ));
      for voter in &votes.voters {
        println!("  {}", voter.display_name);
      }
    }
    VotesSubcommands::Remove { issue_key } => {
      rt.block_on(jira_client.remove_vote(&issue_key))?;
      print_success(&format!("Removed your vote from {}", format_issue_key(&issue_key)));
    }
  }

  Ok(())
}
