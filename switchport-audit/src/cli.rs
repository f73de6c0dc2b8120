use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "switchport-audit")]
#[command(about = "Audit switchport VLAN and ISE configuration on Cisco switches")]
pub struct Cli {
    /// Log extraction progress to stderr.
    #[arg(long, global = true)]
    pub debug: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Audit running-config files (or directories of them).
    Config(ConfigArgs),
    /// Audit RESTCONF documents (merged JSON files or per-switch directories).
    Restconf(RestconfArgs),
    /// Show the indented block structure of one running-config.
    Inspect(InspectArgs),
    /// Check a netconf-state capabilities response for the required YANG models.
    Capabilities(CapabilitiesArgs),
}

#[derive(Args, Debug)]
pub struct AuditOptions {
    /// Optional audit profile TOML (interface types, ISE lines, YANG models).
    #[arg(long)]
    pub profile: Option<PathBuf>,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Only print totals.
    #[arg(long)]
    pub summary: bool,
    /// Write per-hostname export sheets as JSON.
    #[arg(long)]
    pub output: Option<PathBuf>,
    /// Fail when any access port is not ISE compliant.
    #[arg(long)]
    pub strict: bool,
    /// Show profile source metadata.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Config files or directories containing config files.
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
    #[command(flatten)]
    pub options: AuditOptions,
}

#[derive(Parser, Debug)]
pub struct RestconfArgs {
    /// Merged JSON documents, or directories holding native.json, vlans.json
    /// and optionally capabilities.json.
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
    #[command(flatten)]
    pub options: AuditOptions,
}

#[derive(Parser, Debug)]
pub struct InspectArgs {
    pub file: PathBuf,
    #[arg(long, default_value_t = 1)]
    pub depth: usize,
    /// Only show top-level blocks whose header matches this regex.
    #[arg(long = "match")]
    pub pattern: Option<String>,
}

#[derive(Parser, Debug)]
pub struct CapabilitiesArgs {
    /// JSON response of `restconf/data/netconf-state/capabilities`.
    pub file: PathBuf,
    /// Optional audit profile TOML providing the required models.
    #[arg(long)]
    pub profile: Option<PathBuf>,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
