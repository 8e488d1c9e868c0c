//! # Constraint Model
//!
//! Typed representation of loaded dependency constraints.
//!
//! Constraints are ordered: a [`ConstraintSet`] only constructs from a list
//! sorted lexicographically by `group:name:suggestedVersion`, so the
//! checked-in manifest stays mergeable and diffs stay local. Violations are
//! reported as the reordering diff a contributor should apply.

use thiserror::Error;

/// One dependency constraint loaded from a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    /// Group identifier of the constrained module.
    pub group: String,
    /// Name of the constrained module.
    pub name: String,
    /// Version suggested for dependency resolution.
    pub suggested_version: String,
    /// Versions (or version ranges) rejected outright.
    pub rejected: Vec<String>,
    /// Human-readable justification, prefixed with advisory identifiers
    /// when the manifest carries them.
    pub because: String,
}

impl Constraint {
    /// The `group:name:suggestedVersion` coordinate. Sort key of the
    /// manifest and identity of the constraint in error messages.
    pub fn coordinate(&self) -> String {
        format!("{}:{}:{}", self.group, self.name, self.suggested_version)
    }

    /// The `group:name` module notation, without the version.
    pub fn module_notation(&self) -> String {
        format!("{}:{}", self.group, self.name)
    }
}

/// The constraints are not in lexicographic coordinate order.
#[derive(Error, Debug)]
#[error(
    "constraints are not sorted by group:name:suggestedVersion in \
     lexicographical order; apply this reordering:\n{diff}"
)]
pub struct UnsortedConstraints {
    /// Unified diff from the manifest's order to the sorted order.
    pub diff: String,
}

/// An ordered collection of loaded constraints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintSet {
    constraints: Vec<Constraint>,
}

impl ConstraintSet {
    /// The empty set. Result of loading a directory without a manifest.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a set from constraints in manifest order.
    ///
    /// # Errors
    ///
    /// Returns [`UnsortedConstraints`] if the list is not sorted by
    /// coordinate, with a unified diff describing the required reordering.
    pub fn from_vec(constraints: Vec<Constraint>) -> Result<Self, UnsortedConstraints> {
        let actual: Vec<String> = constraints.iter().map(Constraint::coordinate).collect();
        let mut sorted = actual.clone();
        sorted.sort();
        if actual != sorted {
            let actual_text = actual.join("\n");
            let sorted_text = sorted.join("\n");
            let diff = similar::TextDiff::from_lines(&actual_text, &sorted_text)
                .unified_diff()
                .context_radius(0)
                .header("manifest order", "sorted order")
                .to_string();
            return Err(UnsortedConstraints { diff });
        }
        Ok(Self { constraints })
    }

    /// Returns a slice of all constraints, in coordinate order.
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Returns the number of constraints.
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    /// Returns true if the set holds no constraints.
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Iterate over the constraints.
    pub fn iter(&self) -> std::slice::Iter<'_, Constraint> {
        self.constraints.iter()
    }
}

impl<'a> IntoIterator for &'a ConstraintSet {
    type Item = &'a Constraint;
    type IntoIter = std::slice::Iter<'a, Constraint>;

    fn into_iter(self) -> Self::IntoIter {
        self.constraints.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constraint(group: &str, name: &str, version: &str) -> Constraint {
        Constraint {
            group: group.to_string(),
            name: name.to_string(),
            suggested_version: version.to_string(),
            rejected: Vec::new(),
            because: "test".to_string(),
        }
    }

    #[test]
    fn test_coordinate_and_module_notation() {
        let c = constraint("com.example", "netlib", "4.1.68");
        assert_eq!(c.coordinate(), "com.example:netlib:4.1.68");
        assert_eq!(c.module_notation(), "com.example:netlib");
    }

    #[test]
    fn test_sorted_list_accepted() {
        let set = ConstraintSet::from_vec(vec![
            constraint("com.example", "alpha", "1.0.0"),
            constraint("com.example", "beta", "2.0.0"),
            constraint("org.other", "gamma", "3.0.0"),
        ])
        .unwrap();
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_same_module_sorted_by_version_text() {
        ConstraintSet::from_vec(vec![
            constraint("com.example", "alpha", "1.10.0"),
            constraint("com.example", "alpha", "1.9.0"),
        ])
        .unwrap();
    }

    #[test]
    fn test_unsorted_list_rejected_with_diff() {
        let err = ConstraintSet::from_vec(vec![
            constraint("org.other", "gamma", "3.0.0"),
            constraint("com.example", "alpha", "1.0.0"),
        ])
        .unwrap_err();
        assert!(err.diff.contains("@@"), "not a unified diff: {}", err.diff);
        assert!(
            err.diff.contains("org.other:gamma:3.0.0")
                || err.diff.contains("com.example:alpha:1.0.0"),
            "diff names no coordinate: {}",
            err.diff
        );
        assert!(err.to_string().contains("lexicographical order"));
    }

    #[test]
    fn test_empty_set() {
        let set = ConstraintSet::empty();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(set.iter().next().is_none());
    }
}
