//! Validation outcomes and fatal failures
//!
//! [`ValidationError`] values describe problems found in the data and are
//! returned as a list. [`ValidationFailure`] means validation itself could not
//! run, e.g. because the reasoner gave up.

use ontocheck_core::Triple;
use ontocheck_rdfs::RdfsError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

/// A violation found while checking data against a schema
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValidationError {
    /// The subject of `triple` is not an instance of any domain class of `property`
    DomainMismatch {
        triple: Triple,
        property: String,
        expected: BTreeSet<String>,
        actual: BTreeSet<String>,
    },

    /// The object of `triple` is not an instance of any range class of `property`
    RangeMismatch {
        triple: Triple,
        property: String,
        expected: BTreeSet<String>,
        actual: BTreeSet<String>,
    },

    /// `resource` is a member of two classes declared disjoint
    DisjointClassMembership {
        resource: String,
        class_a: String,
        class_b: String,
    },

    /// `triple` refers to `class`, which the schema never declares
    UnknownClassError { class: String, triple: Triple },

    /// `triple` uses `property`, which the schema never declares
    UnknownPropertyError { property: String, triple: Triple },
}

/// Variant tag of a [`ValidationError`], for comparisons that ignore the payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ViolationKind {
    DomainMismatch,
    RangeMismatch,
    DisjointClassMembership,
    UnknownClass,
    UnknownProperty,
}

impl ValidationError {
    pub fn kind(&self) -> ViolationKind {
        match self {
            ValidationError::DomainMismatch { .. } => ViolationKind::DomainMismatch,
            ValidationError::RangeMismatch { .. } => ViolationKind::RangeMismatch,
            ValidationError::DisjointClassMembership { .. } => ViolationKind::DisjointClassMembership,
            ValidationError::UnknownClassError { .. } => ViolationKind::UnknownClass,
            ValidationError::UnknownPropertyError { .. } => ViolationKind::UnknownProperty,
        }
    }

    /// The offending triple, when the violation stems from a single statement
    pub fn triple(&self) -> Option<&Triple> {
        match self {
            ValidationError::DomainMismatch { triple, .. }
            | ValidationError::RangeMismatch { triple, .. }
            | ValidationError::UnknownClassError { triple, .. }
            | ValidationError::UnknownPropertyError { triple, .. } => Some(triple),
            ValidationError::DisjointClassMembership { .. } => None,
        }
    }
}

fn fmt_set(classes: &BTreeSet<String>) -> String {
    if classes.is_empty() {
        return "none".to_string();
    }
    classes.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::DomainMismatch { triple, property, expected, actual } => write!(
                f,
                "Domain mismatch in {}: subject {} must be an instance of one of [{}] to use {}, but has types [{}]",
                triple,
                triple.subject,
                fmt_set(expected),
                property,
                fmt_set(actual)
            ),
            ValidationError::RangeMismatch { triple, property, expected, actual } => write!(
                f,
                "Range mismatch in {}: value {} must be an instance of one of [{}] to be the object of {}, but has types [{}]",
                triple,
                triple.object,
                fmt_set(expected),
                property,
                fmt_set(actual)
            ),
            ValidationError::DisjointClassMembership { resource, class_a, class_b } => write!(
                f,
                "Disjoint class membership: {} is an instance of both {} and {}, which are declared disjoint",
                resource, class_a, class_b
            ),
            ValidationError::UnknownClassError { class, triple } => {
                write!(f, "Unknown class {} referenced in {}", class, triple)
            }
            ValidationError::UnknownPropertyError { property, triple } => {
                write!(f, "Unknown property {} used in {}", property, triple)
            }
        }
    }
}

impl std::fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ViolationKind::DomainMismatch => "DomainMismatch",
            ViolationKind::RangeMismatch => "RangeMismatch",
            ViolationKind::DisjointClassMembership => "DisjointClassMembership",
            ViolationKind::UnknownClass => "UnknownClassError",
            ViolationKind::UnknownProperty => "UnknownPropertyError",
        };
        write!(f, "{}", name)
    }
}

/// Conditions that stop validation from producing a result
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    #[error("Reasoner failed while building the type closure: {0}")]
    Reasoner(#[from] RdfsError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_domain_mismatch_message() {
        let error = ValidationError::DomainMismatch {
            triple: Triple::new("ex:b1", "ex:relatedTo", "ex:a1"),
            property: "ex:relatedTo".to_string(),
            expected: classes(&["ex:classA"]),
            actual: classes(&["ex:classB"]),
        };
        let message = error.to_string();
        assert!(message.contains("ex:b1"));
        assert!(message.contains("[ex:classA]"));
        assert!(message.contains("[ex:classB]"));
        assert_eq!(error.kind(), ViolationKind::DomainMismatch);
    }

    #[test]
    fn test_untyped_resource_message() {
        let error = ValidationError::RangeMismatch {
            triple: Triple::new("ex:a1", "ex:relatedTo", "ex:ghost"),
            property: "ex:relatedTo".to_string(),
            expected: classes(&["ex:classB"]),
            actual: BTreeSet::new(),
        };
        assert!(error.to_string().contains("has types [none]"));
    }

    #[test]
    fn test_serialized_with_kind_tag() {
        let error = ValidationError::DisjointClassMembership {
            resource: "ex:r".to_string(),
            class_a: "ex:A".to_string(),
            class_b: "ex:B".to_string(),
        };
        let value = serde_json::to_value(&error).unwrap();
        assert_eq!(value["kind"], "DisjointClassMembership");
        assert_eq!(value["class_b"], "ex:B");
        assert!(error.triple().is_none());
    }

    #[test]
    fn test_failure_wraps_reasoner_error() {
        let failure: ValidationFailure = RdfsError::Timeout(10).into();
        assert_eq!(failure.to_string(), "Reasoner failed while building the type closure: Inference timeout after 10ms");
    }
}
