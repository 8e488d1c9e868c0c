//! # constrain-schema — Schema Sync & Manifest Validation
//!
//! The constraints manifest format is described by a JSON Schema that is
//! authored as YAML and checked in twice: the YAML source for humans, and a
//! generated JSON mirror for tooling. This crate owns both sides of that
//! arrangement.
//!
//! ## Schema Sync (`sync`)
//!
//! [`SchemaSync`] keeps the mirror consistent with the source, in either
//! write or verify mode:
//!
//! - [`SchemaSync::convert`] — regenerate the mirror from the YAML source.
//! - [`SchemaSync::check`] — verify the checked-in mirror byte-for-byte
//!   against a fresh rendering, without touching it.
//!
//! ## Manifest Validation (`validate`)
//!
//! [`SchemaValidator`] compiles the JSON mirror (embedded at build time) and
//! validates manifest documents against it, reporting every violation with
//! its instance path.

pub mod sync;
pub mod validate;

pub use sync::{SchemaSync, SyncError};
pub use validate::{SchemaValidationError, SchemaValidator, ValidationViolations, Violation};
