use anyhow::{Context, Result};
use clap::Parser;
use ios_config_core::parse_file;
use regex::Regex;
use switchport_audit::inspect::render_config_tree;
use tracing::Level;

mod capabilities_cmd;
mod cli;
mod config_cmd;
mod output;
mod restconf_cmd;

use cli::{Cli, Command, InspectArgs};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.debug { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Config(args) => config_cmd::run_config(args),
        Command::Restconf(args) => restconf_cmd::run_restconf(args),
        Command::Inspect(args) => run_inspect(args),
        Command::Capabilities(args) => capabilities_cmd::run_capabilities(args),
    }
}

fn run_inspect(args: InspectArgs) -> Result<()> {
    let index = parse_file(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let filter = args
        .pattern
        .as_deref()
        .map(Regex::new)
        .transpose()
        .context("invalid --match pattern")?;

    print!("{}", render_config_tree(&index, args.depth, filter.as_ref()));
    Ok(())
}
