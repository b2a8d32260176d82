//! Object property domain / range checks

use crate::closure::types_of;
use crate::ValidationError;
use ontocheck_core::vocabulary;
use ontocheck_core::{Graph, Triple};
use ontocheck_rdfs::hierarchy;
use ontocheck_rdfs::EntailmentProfile;
use std::collections::BTreeSet;
use tracing::{debug, trace};

/// Declared domain and range classes of one object property
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyRestriction {
    pub property: String,
    pub domain: BTreeSet<String>,
    pub range: BTreeSet<String>,
}

impl PropertyRestriction {
    /// Read the rdfs:domain / rdfs:range declarations of `property` from `schema`
    pub fn from_schema(schema: &Graph, property: &str) -> Self {
        let collect = |predicate: &str| -> BTreeSet<String> {
            schema
                .objects(property, predicate)
                .into_iter()
                .map(str::to_string)
                .collect()
        };

        Self {
            property: property.to_string(),
            domain: collect(vocabulary::RDFS_DOMAIN),
            range: collect(vocabulary::RDFS_RANGE),
        }
    }

    /// No domain and no range declared
    pub fn is_unconstrained(&self) -> bool {
        self.domain.is_empty() && self.range.is_empty()
    }

    /// Check one asserted triple against this restriction
    ///
    /// An empty domain or range means no constraint. A single triple can
    /// violate both.
    pub fn check(&self, triple: &Triple, closure: &Graph, out: &mut Vec<ValidationError>) {
        if !self.domain.is_empty() {
            let actual = types_of(closure, &triple.subject);
            if !satisfies(&self.domain, &actual) {
                out.push(ValidationError::DomainMismatch {
                    triple: triple.clone(),
                    property: self.property.clone(),
                    expected: self.domain.clone(),
                    actual,
                });
            }
        }

        if !self.range.is_empty() {
            let actual = types_of(closure, &triple.object);
            if !satisfies(&self.range, &actual) {
                out.push(ValidationError::RangeMismatch {
                    triple: triple.clone(),
                    property: self.property.clone(),
                    expected: self.range.clone(),
                    actual,
                });
            }
        }
    }
}

/// Whether a resource with closed types `actual` belongs to one of `allowed`
///
/// Every term is an rdfs:Resource, typed or not.
fn satisfies(allowed: &BTreeSet<String>, actual: &BTreeSet<String>) -> bool {
    allowed.contains(vocabulary::RDFS_RESOURCE) || !allowed.is_disjoint(actual)
}

/// Every owl:ObjectProperty declared in `schema`, in declaration order
pub fn object_properties(schema: &Graph) -> Vec<&str> {
    schema.subjects(vocabulary::RDF_TYPE, vocabulary::OWL_OBJECT_PROPERTY)
}

/// Check every object property assertion in `data` against the schema's domain
/// and range declarations, using the closed types in `closure`
pub fn validate_object_properties(data: &Graph, schema: &Graph, closure: &Graph) -> Vec<ValidationError> {
    validate_object_properties_with(data, schema, closure, EntailmentProfile::default())
}

/// [`validate_object_properties`] with an explicit profile for the property hierarchy
///
/// Assertions made through a subproperty (rdfs:subPropertyOf, transitively)
/// are checked against the restrictions of every ancestor property as well.
pub fn validate_object_properties_with(
    data: &Graph,
    schema: &Graph,
    closure: &Graph,
    profile: EntailmentProfile,
) -> Vec<ValidationError> {
    let mut result = Vec::new();
    let property_hierarchy = hierarchy::property_hierarchy(schema, profile);

    for property in object_properties(schema) {
        let restriction = PropertyRestriction::from_schema(schema, property);
        if restriction.is_unconstrained() {
            trace!(property, "no domain or range declared");
            continue;
        }

        let mut predicates = vec![property];
        predicates.extend(hierarchy::descendants_of(&property_hierarchy, property));

        for predicate in predicates {
            for triple in data.find_triples(None, Some(predicate), None) {
                restriction.check(triple, closure, &mut result);
            }
        }
    }

    debug!(violations = result.len(), "object properties checked");
    result
}
