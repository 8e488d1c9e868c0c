//! # Validate Subcommand
//!
//! Loads a constraints manifest through the full reader pipeline; any
//! schema, version, ordering or formatting problem fails the command.

use std::path::PathBuf;

use clap::Args;

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the constraints manifest.
    pub manifest: PathBuf,
}

/// Dispatch the validate subcommand.
pub fn run(args: ValidateArgs) -> anyhow::Result<()> {
    let set = constrain_manifest::read_manifest(&args.manifest)?;
    tracing::info!(
        manifest = %args.manifest.display(),
        constraints = set.len(),
        "constraints manifest is valid"
    );
    Ok(())
}
