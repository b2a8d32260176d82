//! RDFS (RDF Schema) closure reasoner
//!
//! Implements the entailment rules the validator relies on:
//! - transitive closure of rdfs:subClassOf and rdfs:subPropertyOf
//! - rdf:type inference from rdfs:domain, rdfs:range and the class hierarchy
//! - optional OWL-RL rules (equivalentClass, equivalentProperty, inverseOf,
//!   SymmetricProperty, TransitiveProperty)
//!
//! The entailment profile is part of [`RdfsConfig`] and is passed per call;
//! there is no process-wide reasoner selection.

pub mod hierarchy;
pub mod reasoner;

pub use hierarchy::Hierarchy;
pub use reasoner::RdfsReasoner;

use ontocheck_core::Graph;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Set of inference rules applied during closure computation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntailmentProfile {
    /// RDFS rules only
    Rdfs,
    /// RDFS rules plus the supported OWL-RL rules
    #[default]
    RdfsOwlRl,
}

impl EntailmentProfile {
    pub fn includes_owl_rl(self) -> bool {
        matches!(self, EntailmentProfile::RdfsOwlRl)
    }
}

impl std::fmt::Display for EntailmentProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntailmentProfile::Rdfs => write!(f, "rdfs"),
            EntailmentProfile::RdfsOwlRl => write!(f, "rdfs-owl-rl"),
        }
    }
}

/// Reasoner configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RdfsConfig {
    pub profile: EntailmentProfile,
    /// Upper bound on saturation rounds for property assertions
    pub max_iterations: usize,
    /// Wall-clock budget in milliseconds, 0 disables the check
    pub timeout_ms: u64,
}

impl Default for RdfsConfig {
    fn default() -> Self {
        Self {
            profile: EntailmentProfile::default(),
            max_iterations: 1000,
            timeout_ms: 30000, // 30s
        }
    }
}

impl RdfsConfig {
    pub fn with_profile(profile: EntailmentProfile) -> Self {
        Self {
            profile,
            ..Self::default()
        }
    }
}

/// RDFS inference errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RdfsError {
    #[error("Inference timeout after {0}ms")]
    Timeout(u64),

    #[error("Maximum iterations ({0}) exceeded")]
    MaxIterationsExceeded(usize),

    #[error("Invalid RDFS triple: {0}")]
    InvalidTriple(String),
}

/// Expand `graph` with everything it entails under `config`
pub fn expand(graph: &Graph, config: &RdfsConfig) -> Result<Graph, RdfsError> {
    RdfsReasoner::new(config.clone()).expand(graph)
}
