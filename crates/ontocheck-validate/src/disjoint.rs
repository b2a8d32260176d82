//! owl:disjointWith checks

use crate::ValidationError;
use ontocheck_core::vocabulary;
use ontocheck_core::Graph;
use std::collections::BTreeSet;
use tracing::debug;

/// Unordered disjoint class pairs declared in `schema`, each as (lesser, greater)
///
/// `A disjointWith B` and `B disjointWith A` collapse to one pair. Pairs keep
/// the order of their first declaration.
pub fn disjoint_pairs(schema: &Graph) -> Vec<(String, String)> {
    let mut seen = BTreeSet::new();
    let mut pairs = Vec::new();

    for (a, b) in schema.subject_objects(vocabulary::OWL_DISJOINT_WITH) {
        let pair = if a <= b { (a, b) } else { (b, a) };
        if seen.insert(pair) {
            pairs.push((pair.0.to_string(), pair.1.to_string()));
        }
    }

    pairs
}

/// Report every resource whose closed type set contains two classes declared disjoint
pub fn validate_disjoint_classes(_data: &Graph, schema: &Graph, closure: &Graph) -> Vec<ValidationError> {
    let mut result = Vec::new();

    for (class_a, class_b) in disjoint_pairs(schema) {
        for resource in closure.subjects(vocabulary::RDF_TYPE, &class_a) {
            if closure.has(resource, vocabulary::RDF_TYPE, &class_b) {
                result.push(ValidationError::DisjointClassMembership {
                    resource: resource.to_string(),
                    class_a: class_a.clone(),
                    class_b: class_b.clone(),
                });
            }
        }
    }

    debug!(violations = result.len(), "disjoint classes checked");
    result
}
