//! # Manifest Validation
//!
//! Validates constraints-manifest documents against the JSON Schema
//! (draft 2019-09) embedded from the checked-in mirror.
//!
//! Validation happens before any deserialization into typed structures, so
//! a malformed manifest is rejected with every violation listed rather than
//! with the first deserializer complaint.

use std::fmt;

use jsonschema::Validator;
use serde_json::Value;
use thiserror::Error;

/// The canonical JSON mirror of the constraints schema, embedded at build
/// time. [`SchemaSync`](crate::SchemaSync) keeps the file itself in sync
/// with its YAML source.
pub const MANIFEST_SCHEMA_JSON: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../schema/dependency-constraints-schema.json"
));

/// Error during manifest schema validation.
#[derive(Error, Debug)]
pub enum SchemaValidationError {
    /// The embedded schema is not parseable JSON.
    #[error("embedded constraints schema is not valid JSON: {0}")]
    SchemaParse(#[from] serde_json::Error),

    /// The embedded schema does not compile to a validator.
    #[error("cannot compile the constraints schema: {reason}")]
    ValidatorBuild {
        /// Reason the validator could not be built.
        reason: String,
    },

    /// The manifest does not conform to the schema.
    #[error("manifest contains schema violations:\n{violations}")]
    ValidationFailed {
        /// Structured list of individual violations.
        violations: ValidationViolations,
    },
}

/// A single schema violation with the path of the offending value.
#[derive(Debug, Clone)]
pub struct Violation {
    /// JSON Pointer path to the violating value in the manifest.
    pub instance_path: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "  - (root): {}", self.message)
        } else {
            write!(f, "  - {}: {}", self.instance_path, self.message)
        }
    }
}

/// Collection of schema violations.
#[derive(Debug, Clone)]
pub struct ValidationViolations {
    violations: Vec<Violation>,
}

impl ValidationViolations {
    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns a slice of all violations.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }
}

impl fmt::Display for ValidationViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// A compiled validator for constraints manifests.
pub struct SchemaValidator {
    validator: Validator,
}

impl SchemaValidator {
    /// Compile the embedded constraints schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaParse` if the embedded mirror is not valid JSON and
    /// `ValidatorBuild` if it does not compile as a draft 2019-09 schema.
    pub fn new() -> Result<Self, SchemaValidationError> {
        let schema: Value = serde_json::from_str(MANIFEST_SCHEMA_JSON)?;
        let mut opts = jsonschema::options();
        opts.with_draft(jsonschema::Draft::Draft201909);
        let validator = opts
            .build(&schema)
            .map_err(|e| SchemaValidationError::ValidatorBuild {
                reason: e.to_string(),
            })?;
        Ok(Self { validator })
    }

    /// Validate a parsed manifest document, collecting every violation.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaValidationError::ValidationFailed`] with the full
    /// violation list if the document does not conform.
    pub fn validate(&self, manifest: &Value) -> Result<(), SchemaValidationError> {
        let violations: Vec<Violation> = self
            .validator
            .iter_errors(manifest)
            .map(|e| Violation {
                instance_path: e.instance_path.to_string(),
                message: e.to_string(),
            })
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(SchemaValidationError::ValidationFailed {
                violations: ValidationViolations { violations },
            })
        }
    }
}
