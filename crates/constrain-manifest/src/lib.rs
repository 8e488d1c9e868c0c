//! # constrain-manifest — Constraint Model & Manifest Reader
//!
//! A constraints manifest is a checked-in JSON document pinning a suggested
//! version (and optionally rejecting version ranges) for third-party
//! dependencies, each with a documented reason.
//!
//! The [`reader`] module loads a manifest through a strict pipeline: schema
//! validation, format-version gating, sort-order enforcement and canonical
//! formatting verification. A manifest that loads successfully is therefore
//! review-clean: any byte a contributor would be asked to change in review
//! is already rejected here, with a patch in the error message.
//!
//! The [`model`] module holds the resulting typed [`Constraint`] /
//! [`ConstraintSet`] values.

pub mod model;
pub mod reader;

pub use model::{Constraint, ConstraintSet, UnsortedConstraints};
pub use reader::{
    load_manifest_dir, read_manifest, read_manifest_str, ManifestError, MANIFEST_FILE_NAME,
    SUPPORTED_MANIFEST_VERSION,
};
