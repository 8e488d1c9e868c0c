//! # constrain CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// Dependency-constraint toolchain.
///
/// Keeps the constraints schema's YAML source and JSON mirror in sync, and
/// validates constraints manifests against schema, ordering and formatting
/// conventions.
#[derive(Parser, Debug)]
#[command(name = "constrain", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Sync the constraints schema's JSON mirror with its YAML source.
    Schema(constrain_cli::schema::SchemaArgs),
    /// Validate a constraints manifest.
    Validate(constrain_cli::validate::ValidateArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Schema(args) => constrain_cli::schema::run(args),
        Commands::Validate(args) => constrain_cli::validate::run(args),
    }
}
