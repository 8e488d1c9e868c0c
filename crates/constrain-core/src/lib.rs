//! # constrain-core — Canonical Rendering Primitives
//!
//! This crate is the bedrock of the dependency-constrain toolchain. It owns
//! the two operations every other crate builds on:
//!
//! 1. **Tree projection** ([`yaml_to_tree`]) — maps a parsed YAML document
//!    onto a JSON value tree. Insertion order of mappings is preserved;
//!    scalar keys are stringified; values with no JSON counterpart are
//!    rejected with a structured error.
//!
//! 2. **Canonical rendering** ([`render_canonical`]) — the sole byte
//!    production path for checked-in mirror documents. The pretty-printing
//!    style (two-space indent, `": "` separator, one element per line,
//!    exactly one trailing newline) is fixed by constants in [`render`] and
//!    pinned by tests. Any file compared against or generated from a tree
//!    must go through this function; ad-hoc `serde_json` serialization would
//!    reintroduce formatting drift.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `constrain-*` crates (leaf of the DAG).
//! - No `unsafe` code, no `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod render;
pub mod tree;

pub use error::{RenderError, TreeError};
pub use render::render_canonical;
pub use tree::yaml_to_tree;
