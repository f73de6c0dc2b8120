use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ios_config_core::read_config_file;
use switchport_audit::assemble::assemble_text_switch;
use switchport_audit::profile::load_profile_with_source;
use tracing::debug;

use crate::cli::ConfigArgs;
use crate::output::emit_audit;

pub fn run_config(args: ConfigArgs) -> Result<()> {
    let (profile, profile_source) = load_profile_with_source(args.options.profile.as_deref())?;
    let files = collect_config_files(&args.paths)?;

    let mut switches = Vec::with_capacity(files.len());
    for file in &files {
        debug!(file = %file.display(), "auditing running-config");
        let config = read_config_file(file)
            .with_context(|| format!("failed to read {}", file.display()))?;
        let origin = file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());
        switches.push(assemble_text_switch(&config, origin.as_deref(), &profile));
    }

    let inputs: Vec<&Path> = files.iter().map(PathBuf::as_path).collect();
    emit_audit(&switches, &profile_source, &args.options, &inputs)
}

/// Expand directories into their regular files, sorted by name.
fn collect_config_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if !path.is_dir() {
            files.push(path.clone());
            continue;
        }

        let mut entries = Vec::new();
        for entry in fs::read_dir(path)
            .with_context(|| format!("failed to list directory {}", path.display()))?
        {
            let entry = entry.with_context(|| format!("failed to list {}", path.display()))?;
            if entry.path().is_file() {
                entries.push(entry.path());
            }
        }
        entries.sort();
        files.extend(entries);
    }
    Ok(files)
}
