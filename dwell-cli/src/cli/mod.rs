//! # Command Line Interface
//!
//! Defines the CLI structure and command handlers for the dwell tool: the
//! time-in-state report plus thin wrappers over the Jira REST API.

mod attachment;
mod comment;
mod config;
mod creds;
mod issue;
mod release;
pub mod report;
mod votes;
mod watchers;
mod worklog;

use anyhow::Result;
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, Parser, Subcommand};
use dwell_core::ColorMode;

/// Top-level CLI command for the dwell tool
#[derive(Parser)]
#[command(name = "dwell")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(about = "Jira client and time-in-state reporting tool")]
#[command(
  long_about = "Dwell talks to a Jira server over its REST API.\n\n\
        Besides managing issues, worklogs, watchers and votes, it can report how\n\
        long every issue of a project spent between two workflow states."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
#[command(subcommand_required(true))]
#[command(disable_help_subcommand = true)]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::BrightGreen.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
)]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    global = true,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Controls when colored output is used
  #[arg(
    long,
    value_enum,
    ignore_case = true,
    default_value_t = ColorMode::Auto,
  )]
  pub colors: ColorMode,

  /// Subcommands
  #[command(subcommand)]
  pub command: Commands,
}

/// Subcommands for the dwell tool
#[derive(Subcommand)]
pub enum Commands {
  /// Remove attachments
  #[command(arg_required_else_help = true)]
  Attachment(attachment::AttachmentArgs),

  /// Delete comments
  #[command(arg_required_else_help = true)]
  Comment(comment::CommentArgs),

  /// Show or change the stored configuration
  #[command(long_about = "Show or change the settings stored in report.toml.\n\n\
            The configuration holds the Jira host and the default report settings.\n\
            $JIRA_HOST, when set, takes precedence over the stored host.")]
  #[command(arg_required_else_help = true)]
  Config(config::ConfigArgs),

  /// Credential management
  #[command(long_about = "Check and store the credentials used to talk to Jira.\n\n\
            Credentials are stored in your .netrc file for compatibility with\n\
            curl and other tools.")]
  #[command(arg_required_else_help = true)]
  Creds(creds::CredsArgs),

  /// View and manage issues
  #[command(arg_required_else_help = true)]
  Issue(issue::IssueArgs),

  /// List releases and their issues
  #[command(arg_required_else_help = true)]
  Release(release::ReleaseArgs),

  /// Report how long each issue of a project spent between two states
  #[command(long_about = "Report how long each issue of a project spent between two states.\n\n\
            For every issue the changelog is replayed; the latest change to the start\n\
            label opens the interval and the latest change to the end label closes it.\n\
            Issues that never reached the start label, or whose end precedes their\n\
            start, report a zero duration.\n\n\
            Output is one 'key;summary;self;duration' line per issue, or a table with --table.")]
  Report(report::ReportArgs),

  /// Show or withdraw votes
  #[command(arg_required_else_help = true)]
  Votes(votes::VotesArgs),

  /// List or remove watchers
  #[command(arg_required_else_help = true)]
  Watchers(watchers::WatchersArgs),

  /// List, show or delete worklogs
  #[command(arg_required_else_help = true)]
  Worklog(worklog::WorklogArgs),
}

pub fn handle_cli(cli: Cli) -> Result<()> {
  cli.colors.apply();

  match cli.command {
    Commands::Attachment(attachment) => attachment::handle_attachment_command(attachment),
    Commands::Comment(comment) => comment::handle_comment_command(comment),
    Commands::Config(config) => config::handle_config_command(config),
    Commands::Creds(creds) => creds::handle_creds_command(creds),
    Commands::Issue(issue) => issue::handle_issue_command(issue),
    Commands::Release(release) => release::handle_release_command(release),
    Commands::Report(report) => report::handle_report_command(report),
    Commands::Votes(votes) => votes::handle_votes_command(votes),
    Commands::Watchers(watchers) => watchers::handle_watchers_command(watchers),
    Commands::Worklog(worklog) => worklog::handle_worklog_command(worklog),
  }
}
