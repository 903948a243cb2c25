//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;

/// Reconcile a JSON or YAML config file against desired keys
///
/// Prints a JSON report to stdout. The file is only rewritten when its
/// canonical rendering changes.
///
/// Examples:
///   recon app.yaml --input '{"server": {"port": 8080}}'
///   recon app.yaml --state absent --input '{"server": {"debug": null}}'
///   recon ~/.config/tool.json --state empty --backup
///   recon new.json --format json --input-file desired.yaml --check --diff
#[derive(Parser, Debug)]
#[command(name = "recon")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// File to reconcile (a leading `~` is expanded)
    pub path: String,

    /// Desired state of the keys: present, absent or empty
    #[arg(short, long, default_value = "present", env = "RECON_STATE")]
    pub state: String,

    /// Keys and values as an inline JSON or YAML mapping
    #[arg(short, long, conflicts_with = "input_file")]
    pub input: Option<String>,

    /// Read keys and values from a JSON or YAML file
    #[arg(long, value_name = "FILE")]
    pub input_file: Option<PathBuf>,

    /// Output format used when the file has no content yet (json or yaml)
    #[arg(short, long, default_value = "yaml", env = "RECON_FORMAT")]
    pub format: String,

    /// Back up the original file before overwriting it
    #[arg(short, long)]
    pub backup: bool,

    /// Fail instead of creating missing parent directories
    #[arg(long)]
    pub no_create_path: bool,

    /// Report what would change without writing anything
    #[arg(long, visible_alias = "dry-run")]
    pub check: bool,

    /// Include a unified diff of the change in the report
    #[arg(long)]
    pub diff: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
