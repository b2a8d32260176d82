//! Class and property hierarchies

use crate::EntailmentProfile;
use ontocheck_core::vocabulary;
use ontocheck_core::Graph;
use std::collections::{BTreeMap, BTreeSet};

/// child -> parents (direct edges, or every ancestor once closed)
pub type Hierarchy = BTreeMap<String, BTreeSet<String>>;

/// Close a hierarchy transitively
///
/// Each node is searched independently with a visited set, so cycles end the
/// search instead of looping. A node on a cycle lists itself as an ancestor.
pub fn transitive_closure(edges: &Hierarchy) -> Hierarchy {
    let mut closed = Hierarchy::new();

    for (child, direct_parents) in edges {
        let mut reached = BTreeSet::new();
        let mut stack: Vec<&String> = direct_parents.iter().collect();

        while let Some(node) = stack.pop() {
            if reached.insert(node.clone()) {
                if let Some(parents) = edges.get(node) {
                    stack.extend(parents.iter());
                }
            }
        }

        closed.insert(child.clone(), reached);
    }

    closed
}

/// Direct `rdfs:subClassOf` edges, plus under OWL-RL both directions of
/// `owl:equivalentClass` and `C rdfs:subClassOf owl:Thing` for every declared `owl:Class`
pub fn class_edges(graph: &Graph, profile: EntailmentProfile) -> Hierarchy {
    let equivalent = profile.includes_owl_rl().then_some(vocabulary::OWL_EQUIVALENT_CLASS);
    let mut edges = collect_edges(graph, vocabulary::RDFS_SUBCLASS_OF, equivalent);

    if profile.includes_owl_rl() {
        // scm-cls
        for class in graph.subjects(vocabulary::RDF_TYPE, vocabulary::OWL_CLASS) {
            if class != vocabulary::OWL_THING {
                edges
                    .entry(class.to_string())
                    .or_default()
                    .insert(vocabulary::OWL_THING.to_string());
            }
        }
    }

    edges
}

/// Direct `rdfs:subPropertyOf` edges, plus both directions of
/// `owl:equivalentProperty` under OWL-RL
pub fn property_edges(graph: &Graph, profile: EntailmentProfile) -> Hierarchy {
    let equivalent = profile.includes_owl_rl().then_some(vocabulary::OWL_EQUIVALENT_PROPERTY);
    collect_edges(graph, vocabulary::RDFS_SUBPROPERTY_OF, equivalent)
}

/// Every class mapped to all of its superclasses
pub fn class_hierarchy(graph: &Graph, profile: EntailmentProfile) -> Hierarchy {
    transitive_closure(&class_edges(graph, profile))
}

/// Every property mapped to all of its superproperties
pub fn property_hierarchy(graph: &Graph, profile: EntailmentProfile) -> Hierarchy {
    transitive_closure(&property_edges(graph, profile))
}

/// Nodes that list `ancestor` among their (closed) parents, excluding `ancestor` itself
pub fn descendants_of<'a>(hierarchy: &'a Hierarchy, ancestor: &str) -> Vec<&'a str> {
    hierarchy
        .iter()
        .filter(|(child, parents)| child.as_str() != ancestor && parents.contains(ancestor))
        .map(|(child, _)| child.as_str())
        .collect()
}

fn collect_edges(graph: &Graph, sub_predicate: &str, equivalence: Option<&str>) -> Hierarchy {
    let mut edges = Hierarchy::new();

    for (child, parent) in graph.subject_objects(sub_predicate) {
        edges.entry(child.to_string()).or_default().insert(parent.to_string());
    }

    if let Some(equivalence) = equivalence {
        for (a, b) in graph.subject_objects(equivalence) {
            edges.entry(a.to_string()).or_default().insert(b.to_string());
            edges.entry(b.to_string()).or_default().insert(a.to_string());
        }
    }

    edges
}
