//! Closed-world validation of RDF data against an OWL/RDFS schema
//!
//! - Type closure: explicit and entailed rdf:type statements ([`closure`])
//! - Object property domain / range checks ([`properties`])
//! - owl:disjointWith membership checks ([`disjoint`])
//! - Optional undeclared class / property checks ([`unknown`])
//! - The [`Validator`] facade and [`ValidationReport`]
//!
//! ```
//! use ontocheck_core::{vocabulary, Graph};
//! use ontocheck_validate::{validate, ViolationKind};
//!
//! let mut schema = Graph::new();
//! schema.add("ex:livesIn", vocabulary::RDF_TYPE, vocabulary::OWL_OBJECT_PROPERTY);
//! schema.add("ex:livesIn", vocabulary::RDFS_DOMAIN, "ex:Person");
//! schema.add("ex:livesIn", vocabulary::RDFS_RANGE, "ex:Building");
//!
//! let mut data = Graph::new();
//! data.add("ex:ann", vocabulary::RDF_TYPE, "ex:Person");
//! data.add("ex:house", vocabulary::RDF_TYPE, "ex:Building");
//! data.add("ex:house", "ex:livesIn", "ex:ann");
//!
//! let errors = validate(&data, &schema).unwrap();
//! let kinds: Vec<_> = errors.iter().map(|e| e.kind()).collect();
//! assert_eq!(kinds, vec![ViolationKind::DomainMismatch, ViolationKind::RangeMismatch]);
//! ```

pub mod closure;
pub mod disjoint;
pub mod error;
pub mod properties;
pub mod report;
pub mod unknown;
pub mod validator;

pub use closure::{build_closure, build_closure_with, TypeClosure};
pub use disjoint::validate_disjoint_classes;
pub use error::{ValidationError, ValidationFailure, ViolationKind};
pub use properties::{validate_object_properties, validate_object_properties_with, PropertyRestriction};
pub use report::ValidationReport;
pub use unknown::{validate_unknown_classes, validate_unknown_properties};
pub use validator::{validate, validate_with_config, ValidationConfig, Validator};

pub use ontocheck_rdfs::{EntailmentProfile, RdfsConfig};
