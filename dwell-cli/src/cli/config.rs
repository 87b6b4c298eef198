//! # Config Command
//!
//! Show and change the settings persisted in `report.toml`.

use anyhow::Result;
use clap::{Args, Subcommand};
use dwell_core::consts::ENV_JIRA_HOST;
use dwell_core::output::format_path;
use dwell_core::url::ensure_url_scheme;
use dwell_core::{ItemScan, ReportConfig, get_config_dirs, print_error, print_info, print_success};

/// Command for configuration management
#[derive(Args)]
pub struct ConfigArgs {
  /// The subcommand to execute
  #[command(subcommand)]
  pub subcommand: ConfigSubcommands,
}

/// Subcommands for the config command
#[derive(Subcommand)]
pub enum ConfigSubcommands {
  /// Show the current configuration
  Show,

  /// Change stored settings
  Set(ConfigSetArgs),
}

/// Settings accepted by `config set`
#[derive(Args, Default)]
pub struct ConfigSetArgs {
  /// Jira host URL (e.g., https://company.atlassian.net)
  #[arg(long)]
  pub host: Option<String>,

  /// Default label that opens the reported interval
  #[arg(long, value_name = "LABEL")]
  pub from: Option<String>,

  /// Default label that closes the reported interval
  #[arg(long, value_name = "LABEL")]
  pub to: Option<String>,

  /// Whether the report considers every item of a changelog entry
  #[arg(long, value_name = "BOOL")]
  pub scan_all_items: Option<bool>,

  /// chrono format of changelog timestamps
  #[arg(long, value_name = "FORMAT")]
  pub timestamp_format: Option<String>,
}

/// Handle the config command
pub(crate) fn handle_config_command(config: ConfigArgs) -> Result<()> {
  match config.subcommand {
    ConfigSubcommands::Show => handle_show_command(),
    ConfigSubcommands::Set(args) => handle_set_command(&args),
  }
}

fn handle_show_command() -> Result<()> {
  let config_dirs = get_config_dirs()?;
  let config = config_dirs.load_report_config()?;

  print_info(&format!(
    "Configuration file: {}",
    format_path(&config_dirs.report_config_path().display().to_string())
  ));
  match (&config.host, std::env::var(ENV_JIRA_HOST)) {
    (_, Ok(env_host)) if !env_host.trim().is_empty() => println!("  Host: {env_host} (from ${ENV_JIRA_HOST})"),
    (Some(host), _) => println!("  Host: {host}"),
    (None, _) => println!("  Host: Not configured"),
  }
  println!("  Start state: {}", config.start_state);
  println!("  End state: {}", config.end_state);
  println!("  Scan all items: {}", config.item_scan == ItemScan::All);
  println!("  Timestamp format: {}", config.timestamp.format);
  if let Some(strip_suffix) = config.timestamp.strip_suffix {
    println!("  Timestamp suffix length: {strip_suffix}");
  }

  Ok(())
}

fn handle_set_command(args: &ConfigSetArgs) -> Result<()> {
  let config_dirs = get_config_dirs()?;
  let mut config = config_dirs.load_report_config()?;

  let changes = apply_config_changes(&mut config, args)?;
  if changes.is_empty() {
    print_error("No configuration changes specified");
    return Ok(());
  }

  config_dirs.save_report_config(&config)?;

  print_success("Configuration updated:");
  for change in changes {
    print_success(&format!("  {change}"));
  }

  Ok(())
}

/// Apply the requested changes, returning a description of each one
fn apply_config_changes(config: &mut ReportConfig, args: &ConfigSetArgs) -> Result<Vec<String>> {
  let mut changes = Vec::new();

  if let Some(host) = &args.host {
    let host = ensure_url_scheme(host)?;
    changes.push(format!("host set to: {host}"));
    config.host = Some(host);
  }
  if let Some(from) = &args.from {
    config.start_state = from.clone();
    changes.push(format!("start state set to: {from}"));
  }
  if let Some(to) = &args.to {
    config.end_state = to.clone();
    changes.push(format!("end state set to: {to}"));
  }
  if let Some(scan_all_items) = args.scan_all_items {
    config.item_scan = if scan_all_items { ItemScan::All } else { ItemScan::First };
    changes.push(format!("scan all items set to: {scan_all_items}"));
  }
  if let Some(format) = &args.timestamp_format {
    config.timestamp.format = format.clone();
    changes.push(format!("timestamp format set to: {format}"));
  }

  Ok(changes)
}
