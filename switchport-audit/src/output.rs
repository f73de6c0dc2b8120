use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use switchport_audit::export::build_sheets;
use switchport_audit::model::Switch;
use switchport_audit::report::{render_summary, render_switches, AuditReport};

use crate::cli::{AuditOptions, OutputFormat};

/// Print the audit, write the export file if asked, and apply the strict gate.
pub fn emit_audit(
    switches: &[Switch],
    profile_source: &str,
    options: &AuditOptions,
    inputs: &[&Path],
) -> Result<()> {
    if let Some(out_path) = &options.output {
        guard_export_path(out_path, inputs)?;
        let sheets = build_sheets(switches);
        fs::write(out_path, serde_json::to_string_pretty(&sheets)?)
            .with_context(|| format!("failed to write export file {}", out_path.display()))?;
    }

    let report = AuditReport::new(switches, profile_source);
    match (options.format, options.summary) {
        (OutputFormat::Text, true) => println!("{}", render_summary(&report.summary)),
        (OutputFormat::Text, false) => {
            if options.verbose {
                println!("profile: {profile_source}");
            }
            println!("{}", render_switches(switches));
            println!("{}", render_summary(&report.summary));
        }
        (OutputFormat::Json, true) => {
            println!("{}", serde_json::to_string_pretty(&report.summary)?)
        }
        (OutputFormat::Json, false) => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if options.strict {
        let failing = switches
            .iter()
            .flat_map(|switch| switch.ise_noncompliant_ports())
            .count();
        if failing > 0 {
            bail!("strict mode failed: {failing} access ports are not ISE compliant");
        }
    }

    Ok(())
}

/// Refuse an export path that resolves to one of the files the audit read.
///
/// Inputs were just read, so they exist and canonicalize directly.
fn guard_export_path(output: &Path, inputs: &[&Path]) -> Result<()> {
    let target = resolve_export_path(output)?;
    for input in inputs {
        let input_path = input
            .canonicalize()
            .with_context(|| format!("failed to resolve input path {}", input.display()))?;
        if input_path == target {
            bail!(
                "refusing to overwrite input file: output {} matches input {}",
                output.display(),
                input.display()
            );
        }
    }
    Ok(())
}

// An export file that does not exist yet is resolved through its parent directory.
fn resolve_export_path(output: &Path) -> Result<PathBuf> {
    if output.exists() {
        return output
            .canonicalize()
            .with_context(|| format!("failed to resolve output path {}", output.display()));
    }

    let Some(file_name) = output.file_name() else {
        bail!("output path {} has no file name", output.display());
    };
    let parent = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let parent = parent
        .canonicalize()
        .with_context(|| format!("output directory {} does not exist", parent.display()))?;
    Ok(parent.join(file_name))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::{guard_export_path, resolve_export_path};

    #[test]
    fn rejects_export_over_an_input() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = dir.path().join("sw1.cfg");
        fs::write(&input, "hostname SW1").expect("write input");

        assert!(guard_export_path(&input, &[input.as_path()]).is_err());
        let export = dir.path().join("export.json");
        assert!(guard_export_path(&export, &[input.as_path()]).is_ok());
    }

    #[test]
    fn new_export_path_resolves_parent_dot_dot() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::create_dir(dir.path().join("nested")).expect("mkdir");
        let native = dir.path().join("native.json");
        fs::write(&native, "{}").expect("write native");

        let roundabout = dir.path().join("nested").join("..").join("export.json");
        let resolved = resolve_export_path(&roundabout).expect("resolve");
        assert_eq!(
            resolved,
            dir.path().canonicalize().expect("canonical dir").join("export.json")
        );

        let over_input = dir.path().join("nested").join("..").join("native.json");
        assert!(guard_export_path(&over_input, &[native.as_path()]).is_err());
    }

    #[test]
    fn missing_export_directory_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let export = dir.path().join("absent").join("export.json");
        assert!(resolve_export_path(&export).is_err());
    }
}
