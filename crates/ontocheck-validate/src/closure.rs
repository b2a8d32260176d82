//! Type closure: every explicit and entailed rdf:type statement

use crate::ValidationFailure;
use ontocheck_core::vocabulary;
use ontocheck_core::Graph;
use ontocheck_rdfs::{EntailmentProfile, RdfsConfig, RdfsReasoner};
use std::collections::BTreeSet;
use tracing::debug;

/// Build the closed type graph for `data` against `schema`
///
/// Only the rdf:type statements of `data` go into the reasoner, together with
/// the whole schema, so the reasoner input stays small when `data` is large.
/// The result holds rdf:type triples only.
pub fn build_closure(data: &Graph, schema: &Graph, profile: EntailmentProfile) -> Result<Graph, ValidationFailure> {
    build_closure_with(data, schema, &RdfsConfig::with_profile(profile))
}

/// [`build_closure`] with a full reasoner configuration
pub fn build_closure_with(data: &Graph, schema: &Graph, config: &RdfsConfig) -> Result<Graph, ValidationFailure> {
    let mut seed = data.filter(|t| t.predicate == vocabulary::RDF_TYPE);
    seed.extend(schema.iter().cloned());

    let expanded = RdfsReasoner::new(config.clone()).expand(&seed)?;
    let closure = expanded.filter(|t| t.predicate == vocabulary::RDF_TYPE);

    debug!(seed = seed.len(), expanded = expanded.len(), types = closure.len(), "type closure built");
    Ok(closure)
}

/// Closed type set of `resource`; empty when nothing is known about it
pub fn types_of(closure: &Graph, resource: &str) -> BTreeSet<String> {
    closure
        .objects(resource, vocabulary::RDF_TYPE)
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Resource -> closed class set view over a closure graph
///
/// Built fresh for each validation run and dropped with it.
#[derive(Debug, Clone)]
pub struct TypeClosure {
    graph: Graph,
}

impl TypeClosure {
    pub fn build(data: &Graph, schema: &Graph, config: &RdfsConfig) -> Result<Self, ValidationFailure> {
        Ok(Self {
            graph: build_closure_with(data, schema, config)?,
        })
    }

    pub fn types_of(&self, resource: &str) -> BTreeSet<String> {
        types_of(&self.graph, resource)
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }
}
