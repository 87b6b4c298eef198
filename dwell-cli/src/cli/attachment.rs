//! # Attachment Command

use anyhow::Result;
use clap::{Args, Subcommand};
use dwell_core::print_success;

use crate::clients::create_jira_runtime_and_client;

/// Command for attachment management
#[derive(Args)]
pub struct AttachmentArgs {
  /// The subcommand to execute
  #[command(subcommand)]
  pub subcommand: AttachmentSubcommands,
}

/// Subcommands for the attachment command
#[derive(Subcommand)]
pub enum AttachmentSubcommands {
  /// Remove an attachment
  #[command(alias = "rm")]
  Remove {
    /// The attachment id
    #[arg(required = true, index = 1)]
    attachment_id: String,
  },
}

/// Handle the attachment command
pub(crate) fn handle_attachment_command(attachment: AttachmentArgs) -> Result<()> {
  let (rt, jira_client) = create_jira_runtime_and_client()?;

  match attachment.subcommand {
    AttachmentSubcommands::Remove { attachment_id } => {
      rt.block_on(jira_client.remove_attachment(&attachment_id))?;
      print_success(&format!("Removed attachment {attachment_id}"));
    }
  }

  Ok(())
}
