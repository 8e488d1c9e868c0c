//! # Manifest Reader
//!
//! Loads a constraints manifest through a strict pipeline:
//!
//! 1. Reject empty input.
//! 2. Parse the JSON into a generic tree.
//! 3. Validate the tree against the constraints schema.
//! 4. Deserialize the wire structures and gate on the supported manifest
//!    format version.
//! 5. Assemble the typed constraints (advisory identifiers folded into the
//!    `because` text) and enforce coordinate sort order.
//! 6. Verify the input is in canonical form; the error carries the patch
//!    that would fix it.
//!
//! Steps 5 and 6 make review feedback mechanical: the loader itself tells a
//! contributor the exact reordering or formatting change to apply.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use constrain_core::{render_canonical, RenderError};
use constrain_schema::{SchemaValidationError, SchemaValidator};

use crate::model::{Constraint, ConstraintSet, UnsortedConstraints};

/// The manifest format version this reader supports.
pub const SUPPORTED_MANIFEST_VERSION: &str = "1.0.0";

/// File name of the constraints manifest inside a configuration directory.
pub const MANIFEST_FILE_NAME: &str = "constraints.json";

/// Error while reading a constraints manifest.
#[derive(Error, Debug)]
pub enum ManifestError {
    /// The manifest file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The manifest is empty.
    #[error("{path} is empty")]
    Empty {
        /// Origin of the manifest text.
        path: String,
    },

    /// The manifest is not parseable JSON.
    #[error("{path} is not valid JSON: {reason}")]
    InvalidJson {
        /// Origin of the manifest text.
        path: String,
        /// Underlying parse error text.
        reason: String,
    },

    /// The manifest does not conform to the constraints schema.
    #[error(transparent)]
    Schema(#[from] SchemaValidationError),

    /// The manifest declares a format version this reader does not support.
    #[error("unsupported constraints manifest version: {found} (supported: 1.0.0)")]
    UnsupportedVersion {
        /// The version string found in the manifest.
        found: String,
    },

    /// The constraints are not in coordinate order.
    #[error(transparent)]
    Unsorted(#[from] UnsortedConstraints),

    /// Canonical rendering failed during formatting verification.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// The manifest text is not in canonical form.
    #[error(
        "{path} is not formatted canonically; \
         apply this patch to fix the formatting:\n{diff}"
    )]
    Formatting {
        /// Origin of the manifest text.
        path: String,
        /// Unified diff from the manifest text to its canonical form.
        diff: String,
    },
}

/// Wire structure of the manifest document.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireManifest {
    version: String,
    dependency_constraints: Vec<WireConstraint>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireConstraint {
    group: String,
    name: String,
    suggested_version: String,
    #[serde(default)]
    rejected_versions: Option<Vec<String>>,
    because: WireBecause,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireBecause {
    #[serde(default)]
    advisory_identifiers: Option<Vec<String>>,
    reason: String,
}

/// Read a constraints manifest from a string.
///
/// `origin` names the text's source (usually a file path) in errors.
///
/// # Errors
///
/// Any pipeline step failing aborts the read; see [`ManifestError`].
pub fn read_manifest_str(text: &str, origin: &str) -> Result<ConstraintSet, ManifestError> {
    if text.trim().is_empty() {
        return Err(ManifestError::Empty {
            path: origin.to_string(),
        });
    }

    let tree: Value = serde_json::from_str(text).map_err(|e| ManifestError::InvalidJson {
        path: origin.to_string(),
        reason: e.to_string(),
    })?;

    SchemaValidator::new()?.validate(&tree)?;

    // Schema validation already constrains the shape, so deserialization
    // failures here would indicate a schema/wire-struct divergence.
    let wire: WireManifest =
        serde_json::from_value(tree.clone()).map_err(|e| ManifestError::InvalidJson {
            path: origin.to_string(),
            reason: e.to_string(),
        })?;

    if wire.version != SUPPORTED_MANIFEST_VERSION {
        return Err(ManifestError::UnsupportedVersion {
            found: wire.version,
        });
    }

    let constraints: Vec<Constraint> = wire
        .dependency_constraints
        .into_iter()
        .map(|c| Constraint {
            because: assemble_because(&c.because),
            group: c.group,
            name: c.name,
            suggested_version: c.suggested_version,
            rejected: c.rejected_versions.unwrap_or_default(),
        })
        .collect();
    let set = ConstraintSet::from_vec(constraints)?;

    verify_canonical_formatting(text, &tree, origin)?;

    Ok(set)
}

/// Read a constraints manifest from a file.
pub fn read_manifest(path: &Path) -> Result<ConstraintSet, ManifestError> {
    let text = fs::read_to_string(path).map_err(|e| ManifestError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    read_manifest_str(&text, &path.display().to_string())
}

/// Load the constraints manifest from a configuration directory.
///
/// Reads `<dir>/constraints.json`. A directory without a manifest yields
/// the empty set; an unreadable or invalid manifest is an error.
pub fn load_manifest_dir(dir: &Path) -> Result<ConstraintSet, ManifestError> {
    let path = dir.join(MANIFEST_FILE_NAME);
    if !path.exists() {
        return Ok(ConstraintSet::empty());
    }
    read_manifest(&path)
}

/// Fold advisory identifiers into the constraint's reason text.
fn assemble_because(because: &WireBecause) -> String {
    match &because.advisory_identifiers {
        Some(ids) => format!("[{}]: {}", ids.join(", "), because.reason),
        None => because.reason.clone(),
    }
}

/// Verify that the manifest text equals the canonical rendering of its tree.
fn verify_canonical_formatting(
    text: &str,
    tree: &Value,
    origin: &str,
) -> Result<(), ManifestError> {
    let rendered = render_canonical(tree)?;
    if rendered != text {
        let diff = similar::TextDiff::from_lines(text, &rendered)
            .unified_diff()
            .context_radius(0)
            .header(origin, origin)
            .to_string();
        return Err(ManifestError::Formatting {
            path: origin.to_string(),
            diff,
        });
    }
    Ok(())
}
