//! # Schema Subcommand
//!
//! Sync operations over the constraints schema's YAML/JSON file pair.

use std::path::PathBuf;

use clap::Args;

use constrain_schema::SchemaSync;

/// Default location of the YAML source document, relative to the
/// repository root.
pub const DEFAULT_YAML_PATH: &str = "schema/dependency-constraints-schema.yaml";

/// Default location of the JSON mirror document, relative to the
/// repository root.
pub const DEFAULT_JSON_PATH: &str = "schema/dependency-constraints-schema.json";

/// Arguments for the schema subcommand.
#[derive(Args, Debug)]
pub struct SchemaArgs {
    #[command(subcommand)]
    pub action: SchemaAction,
}

/// Sync actions over the schema file pair.
#[derive(clap::Subcommand, Debug)]
pub enum SchemaAction {
    /// Regenerate the JSON mirror from the YAML source.
    Convert(SyncPathArgs),
    /// Verify that the JSON mirror matches the YAML source.
    Check(SyncPathArgs),
}

/// The configured file pair, shared by both actions.
#[derive(Args, Debug)]
pub struct SyncPathArgs {
    /// Path to the YAML source document.
    #[arg(long, default_value = DEFAULT_YAML_PATH)]
    pub yaml: PathBuf,

    /// Path to the JSON mirror document.
    #[arg(long, default_value = DEFAULT_JSON_PATH)]
    pub json: PathBuf,
}

/// Dispatch the schema subcommand.
pub fn run(args: SchemaArgs) -> anyhow::Result<()> {
    match args.action {
        SchemaAction::Convert(paths) => {
            let sync = SchemaSync::new(paths.yaml, paths.json);
            sync.convert()?;
            tracing::info!(
                mirror = %sync.json_path().display(),
                "regenerated JSON mirror"
            );
        }
        SchemaAction::Check(paths) => {
            let sync = SchemaSync::new(paths.yaml, paths.json);
            sync.check()?;
            tracing::info!(
                mirror = %sync.json_path().display(),
                "JSON mirror is in sync"
            );
        }
    }
    Ok(())
}
