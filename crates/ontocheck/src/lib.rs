//! # ontocheck
//!
//! Structural validation of RDF instance data against an OWL/RDFS schema.
//! Given a data graph and a schema graph, ontocheck computes the closed set of
//! rdf:type statements and reports object properties used outside their
//! declared domain or range and resources that belong to disjoint classes.
//!
//! ## Quick Start
//!
//! ```rust
//! use ontocheck::prelude::*;
//!
//! let mut schema = Graph::new();
//! schema.add("ex:Dog", vocabulary::RDFS_SUBCLASS_OF, "ex:Animal");
//! schema.add("ex:owns", vocabulary::RDF_TYPE, vocabulary::OWL_OBJECT_PROPERTY);
//! schema.add("ex:owns", vocabulary::RDFS_RANGE, "ex:Animal");
//!
//! let mut data = Graph::new();
//! data.add("ex:rex", vocabulary::RDF_TYPE, "ex:Dog");
//! data.add("ex:ann", "ex:owns", "ex:rex");
//!
//! let errors = validate(&data, &schema).unwrap();
//! assert!(errors.is_empty());
//! ```
//!
//! ## Architecture
//!
//! - **`ontocheck-core`**: triples, the indexed in-memory graph, vocabulary IRIs
//! - **`ontocheck-rdfs`**: RDFS / OWL-RL forward-chaining reasoner
//! - **`ontocheck-validate`**: type closure, property and disjointness checks, facade
//! - **`ontocheck-cli`**: `ontocheck` command-line tool
//!
//! ## Feature Flags
//!
//! - `full` (default): all crates included
//! - `core`: data model only
//! - `rdfs`: data model and reasoner
//! - `validate`: data model, reasoner and validator
//! - `cli`: command-line front end

#[cfg(feature = "ontocheck-core")]
pub use ontocheck_core as core;

#[cfg(feature = "ontocheck-rdfs")]
pub use ontocheck_rdfs as rdfs;

#[cfg(feature = "ontocheck-validate")]
pub use ontocheck_validate as validation;

#[cfg(feature = "ontocheck-cli")]
pub use ontocheck_cli as cli;

#[cfg(feature = "ontocheck-core")]
pub use ontocheck_core::{vocabulary, Graph, GraphError, Triple};

#[cfg(feature = "ontocheck-rdfs")]
pub use ontocheck_rdfs::{EntailmentProfile, RdfsConfig, RdfsError, RdfsReasoner};

#[cfg(feature = "ontocheck-validate")]
pub use ontocheck_validate::{
    validate, validate_with_config, ValidationConfig, ValidationError, ValidationFailure, ValidationReport,
    Validator, ViolationKind,
};

pub use anyhow;
pub use serde;
pub use serde_json;

/// Prelude module for convenient imports
///
/// ```rust
/// use ontocheck::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "ontocheck-core")]
    pub use crate::{vocabulary, Graph, Triple};

    #[cfg(feature = "ontocheck-rdfs")]
    pub use crate::{EntailmentProfile, RdfsConfig};

    #[cfg(feature = "ontocheck-validate")]
    pub use crate::{
        validate, validate_with_config, ValidationConfig, ValidationError, ValidationFailure, ValidationReport,
        Validator, ViolationKind,
    };

    pub use anyhow::Result;
    pub use serde::{Deserialize, Serialize};
    pub use serde_json::Value;
}

/// Current version of ontocheck
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version and compiled-in modules
pub fn health_check() -> serde_json::Value {
    serde_json::json!({
        "status": "healthy",
        "version": VERSION,
        "modules": {
            "core": cfg!(feature = "ontocheck-core"),
            "rdfs": cfg!(feature = "ontocheck-rdfs"),
            "validate": cfg!(feature = "ontocheck-validate"),
            "cli": cfg!(feature = "ontocheck-cli")
        }
    })
}
