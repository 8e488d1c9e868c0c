//! # constrain-cli — Command-Line Interface
//!
//! Subcommand argument structs and handlers for the `constrain` binary.
//!
//! ## Subcommands
//!
//! - `schema` — keep the constraints schema's JSON mirror in sync with its
//!   YAML source (`convert` to write, `check` to verify)
//! - `validate` — load a constraints manifest, reporting every schema,
//!   ordering or formatting problem
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handler functions delegate to domain crates — no business logic here.

pub mod schema;
pub mod validate;
