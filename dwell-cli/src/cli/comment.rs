//! # Comment Command

use anyhow::Result;
use clap::{Args, Subcommand};
use dwell_core::output::format_issue_key;
use dwell_core::print_success;

use crate::clients::create_jira_runtime_and_client;

/// Command for comment management
#[derive(Args)]
pub struct CommentArgs {
  /// The subcommand to execute
  #[command(subcommand)]
  pub subcommand: CommentSubcommands,
}

/// Subcommands for the comment command
#[derive(Subcommand)]
pub enum CommentSubcommands {
  /// Delete a comment from an issue
  Delete {
    /// The Jira issue key (e.g., PROJ-123)
    #[arg(required = true, index = 1)]
    issue_key: String,

    /// The comment id
    #[arg(required = true, index = 2)]
    comment_id: String,
  },
}

/// Handle the comment command
pub(crate) fn handle_comment_command(comment: CommentArgs) -> Result<()> {
  let (rt, jira_client) = create_jira_runtime_and_client()?;

  match comment.subcommand {
    CommentSubcommands::Delete { issue_key, comment_id } => {
      rt.block_on(jira_client.delete_comment(&issue_key, &comment_id))?;
      print_success(&format!(
        "Deleted comment {comment_id} from {}",
        format_issue_key(&issue_key)
      ));
    }
  }

  Ok(())
}
