//! # Schema Sync — YAML Source, JSON Mirror
//!
//! Keeps the canonical JSON rendering of a YAML document consistent with the
//! checked-in mirror file, in either write or verify mode.
//!
//! Both modes perform the same parse and rendering; they differ only in what
//! happens to the result. `convert` overwrites the mirror file; `check`
//! compares the rendering byte-for-byte against the mirror's current
//! contents and reports a mismatch without touching the file.
//!
//! One invocation is one scoped read/render/(write|compare). There is no
//! partial-failure recovery: any I/O error aborts the operation.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

use constrain_core::{render_canonical, yaml_to_tree, RenderError, TreeError};

/// Error during a schema sync operation.
#[derive(Error, Debug)]
pub enum SyncError {
    /// A configured file could not be read.
    #[error("cannot read {path}: {source}")]
    Read {
        /// Path that failed to read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The mirror file could not be written.
    #[error("cannot write {path}: {source}")]
    Write {
        /// Path that failed to write.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The source document is not parseable YAML.
    #[error("{path} is not valid YAML: {source}")]
    InvalidYaml {
        /// Path of the source document.
        path: String,
        /// Underlying parse error.
        source: serde_yaml::Error,
    },

    /// The source document has no JSON projection.
    #[error("{path} cannot be represented as JSON: {source}")]
    Projection {
        /// Path of the source document.
        path: String,
        /// Underlying projection error.
        source: TreeError,
    },

    /// Canonical rendering failed.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// The mirror differs from the canonical rendering of the source.
    #[error(
        "{json_path} is not in sync with {yaml_path}; \
         run `constrain schema convert` to regenerate the JSON mirror"
    )]
    Mismatch {
        /// Path of the YAML source document.
        yaml_path: String,
        /// Path of the stale JSON mirror.
        json_path: String,
    },
}

/// A configured YAML-source/JSON-mirror file pair.
///
/// The pair is immutable once constructed; each operation opens, processes
/// and closes the files it needs within the call.
#[derive(Debug, Clone)]
pub struct SchemaSync {
    yaml_path: PathBuf,
    json_path: PathBuf,
}

impl SchemaSync {
    /// Configure a sync pair from the two file paths.
    pub fn new(yaml_path: impl Into<PathBuf>, json_path: impl Into<PathBuf>) -> Self {
        Self {
            yaml_path: yaml_path.into(),
            json_path: json_path.into(),
        }
    }

    /// Path of the YAML source document.
    pub fn yaml_path(&self) -> &Path {
        &self.yaml_path
    }

    /// Path of the JSON mirror document.
    pub fn json_path(&self) -> &Path {
        &self.json_path
    }

    /// Regenerate the JSON mirror from the YAML source.
    ///
    /// Parses the source into a generic tree, renders it canonically and
    /// overwrites the mirror. The written file ends with exactly one
    /// trailing newline.
    ///
    /// # Errors
    ///
    /// Any read, parse, projection or write failure aborts the operation.
    pub fn convert(&self) -> Result<(), SyncError> {
        let rendered = self.rendered_mirror()?;
        fs::write(&self.json_path, rendered).map_err(|e| SyncError::Write {
            path: self.json_path.display().to_string(),
            source: e,
        })
    }

    /// Verify that the JSON mirror matches the YAML source.
    ///
    /// Performs the same parse and rendering as [`convert`](Self::convert)
    /// into memory, then compares byte-for-byte against the mirror's current
    /// contents. Pure read; the mirror is never modified.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Mismatch`] if the rendering differs from the
    /// checked-in mirror.
    pub fn check(&self) -> Result<(), SyncError> {
        let rendered = self.rendered_mirror()?;
        let existing = fs::read_to_string(&self.json_path).map_err(|e| SyncError::Read {
            path: self.json_path.display().to_string(),
            source: e,
        })?;
        if rendered != existing {
            return Err(SyncError::Mismatch {
                yaml_path: self.yaml_path.display().to_string(),
                json_path: self.json_path.display().to_string(),
            });
        }
        Ok(())
    }

    /// Parse the YAML source and produce the canonical mirror text.
    fn rendered_mirror(&self) -> Result<String, SyncError> {
        let source_path = || self.yaml_path.display().to_string();
        let text = fs::read_to_string(&self.yaml_path).map_err(|e| SyncError::Read {
            path: source_path(),
            source: e,
        })?;
        let document: serde_yaml::Value =
            serde_yaml::from_str(&text).map_err(|e| SyncError::InvalidYaml {
                path: source_path(),
                source: e,
            })?;
        let tree: Value = yaml_to_tree(&document).map_err(|e| SyncError::Projection {
            path: source_path(),
            source: e,
        })?;
        Ok(render_canonical(&tree)?)
    }
}
