//! Validation report

use crate::{ValidationError, ViolationKind};
use serde::{Deserialize, Serialize};

/// Ordered violations from one validation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub conforms: bool,
    pub results: Vec<ValidationError>,
}

impl ValidationReport {
    pub fn new(results: Vec<ValidationError>) -> Self {
        Self {
            conforms: results.is_empty(),
            results,
        }
    }

    pub fn conforms(&self) -> bool {
        self.conforms
    }

    /// Number of violations of the given kind
    pub fn count(&self, kind: ViolationKind) -> usize {
        self.results.iter().filter(|r| r.kind() == kind).count()
    }

    /// Violation kinds in result order
    pub fn kinds(&self) -> Vec<ViolationKind> {
        self.results.iter().map(ValidationError::kind).collect()
    }

    /// Serialize as a JSON value
    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Human-readable rendering
    pub fn to_simple_string(&self) -> String {
        let mut output = format!(
            "Validation Report: {}\n",
            if self.conforms { "CONFORMS" } else { "DOES NOT CONFORM" }
        );

        for (i, result) in self.results.iter().enumerate() {
            output.push_str(&format!("Violation {}: {}\n", i + 1, result.kind()));
            output.push_str(&format!("  {}\n", result));
            if let Some(triple) = result.triple() {
                output.push_str(&format!("  Triple: {}\n", triple));
            }
            output.push('\n');
        }

        output
    }
}

impl From<Vec<ValidationError>> for ValidationReport {
    fn from(results: Vec<ValidationError>) -> Self {
        Self::new(results)
    }
}
