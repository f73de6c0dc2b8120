use anyhow::{bail, Context, Result};
use ios_config_core::parse_json_file;
use switchport_audit::capabilities::{check_yang_models, render_capability_text};
use switchport_audit::profile::load_profile_with_source;

use crate::cli::{CapabilitiesArgs, OutputFormat};

pub fn run_capabilities(args: CapabilitiesArgs) -> Result<()> {
    let (profile, _) = load_profile_with_source(args.profile.as_deref())?;
    let doc = parse_json_file(&args.file)
        .with_context(|| format!("failed to parse {}", args.file.display()))?;
    let report = check_yang_models(&doc, &profile.required_yang_models);

    let host = args
        .file
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    match args.format {
        OutputFormat::Text => println!("{}", render_capability_text(&host, &report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if !report.is_supported() {
        bail!(
            "required YANG models not supported: {}",
            report.missing.join(", ")
        );
    }
    Ok(())
}
