//! RDFS / OWL-RL closure computation

use crate::hierarchy::{self, Hierarchy};
use crate::{RdfsConfig, RdfsError};
use ontocheck_core::vocabulary;
use ontocheck_core::{Graph, Triple};
use std::collections::{BTreeMap, BTreeSet};
use std::time::Instant;
use tracing::debug;

/// RDFS inference engine
///
/// Computes the deductive closure of a graph under the configured
/// [`EntailmentProfile`](crate::EntailmentProfile). The input graph is only
/// read; results are returned as new triples or a new graph.
#[derive(Debug)]
pub struct RdfsReasoner {
    config: RdfsConfig,
    /// Class hierarchy: child class -> all superclasses
    class_hierarchy: Hierarchy,
    /// Property hierarchy: child property -> all superproperties
    property_hierarchy: Hierarchy,
    /// Domain constraints: property -> classes
    domain_constraints: BTreeMap<String, BTreeSet<String>>,
    /// Range constraints: property -> classes
    range_constraints: BTreeMap<String, BTreeSet<String>>,
    /// owl:inverseOf, recorded in both directions
    inverse_properties: BTreeMap<String, BTreeSet<String>>,
    symmetric_properties: BTreeSet<String>,
    transitive_properties: BTreeSet<String>,
    /// Input plus everything inferred so far
    working: Graph,
    /// Inferred triples, in inference order
    inferred_triples: Vec<Triple>,
}

impl RdfsReasoner {
    pub fn new(config: RdfsConfig) -> Self {
        Self {
            config,
            class_hierarchy: Hierarchy::new(),
            property_hierarchy: Hierarchy::new(),
            domain_constraints: BTreeMap::new(),
            range_constraints: BTreeMap::new(),
            inferred_triples: Vec::new(),
            inverse_properties: BTreeMap::new(),
            symmetric_properties: BTreeSet::new(),
            transitive_properties: BTreeSet::new(),
            working: Graph::new(),
        }
    }

    pub fn config(&self) -> &RdfsConfig {
        &self.config
    }

    /// Run inference over `graph` and return the triples it entails but does not contain
    pub fn compute_closure(&mut self, graph: &Graph) -> Result<Vec<Triple>, RdfsError> {
        self.run(graph)?;
        Ok(self.inferred_triples.clone())
    }

    /// Run inference over `graph` and return a new graph holding input and inferred triples
    pub fn expand(&mut self, graph: &Graph) -> Result<Graph, RdfsError> {
        self.run(graph)?;
        Ok(std::mem::take(&mut self.working))
    }

    fn run(&mut self, graph: &Graph) -> Result<(), RdfsError> {
        if let Some(bad) = graph.iter().find(|t| !t.is_well_formed()) {
            return Err(RdfsError::InvalidTriple(format!(
                "empty term in ({:?}, {:?}, {:?})",
                bad.subject, bad.predicate, bad.object
            )));
        }

        let started = Instant::now();
        self.reset(graph);
        self.load_knowledge(graph);
        self.compute_transitive_closure();
        self.propagate_property_assertions(started)?;
        self.infer_types_and_constraints();

        debug!(
            input = graph.len(),
            inferred = self.inferred_triples.len(),
            profile = ?self.config.profile,
            "closure computed"
        );
        Ok(())
    }

    fn reset(&mut self, graph: &Graph) {
        self.class_hierarchy.clear();
        self.property_hierarchy.clear();
        self.domain_constraints.clear();
        self.range_constraints.clear();
        self.inverse_properties.clear();
        self.symmetric_properties.clear();
        self.transitive_properties.clear();
        self.inferred_triples.clear();
        self.working = graph.clone();
    }

    /// Read schema-level knowledge from the graph
    fn load_knowledge(&mut self, graph: &Graph) {
        let profile = self.config.profile;
        self.class_hierarchy = hierarchy::class_edges(graph, profile);
        self.property_hierarchy = hierarchy::property_edges(graph, profile);

        for (property, class) in graph.subject_objects(vocabulary::RDFS_DOMAIN) {
            self.domain_constraints
                .entry(property.to_string())
                .or_default()
                .insert(class.to_string());
        }

        for (property, class) in graph.subject_objects(vocabulary::RDFS_RANGE) {
            self.range_constraints
                .entry(property.to_string())
                .or_default()
                .insert(class.to_string());
        }

        if !profile.includes_owl_rl() {
            return;
        }

        for (p, q) in graph.subject_objects(vocabulary::OWL_INVERSE_OF) {
            self.inverse_properties.entry(p.to_string()).or_default().insert(q.to_string());
            self.inverse_properties.entry(q.to_string()).or_default().insert(p.to_string());
        }

        self.symmetric_properties = graph
            .subjects(vocabulary::RDF_TYPE, vocabulary::OWL_SYMMETRIC_PROPERTY)
            .into_iter()
            .map(str::to_string)
            .collect();
        self.transitive_properties = graph
            .subjects(vocabulary::RDF_TYPE, vocabulary::OWL_TRANSITIVE_PROPERTY)
            .into_iter()
            .map(str::to_string)
            .collect();
    }

    /// Close both hierarchies and record the entailed subClassOf / subPropertyOf triples
    fn compute_transitive_closure(&mut self) {
        self.class_hierarchy = hierarchy::transitive_closure(&self.class_hierarchy);
        self.property_hierarchy = hierarchy::transitive_closure(&self.property_hierarchy);

        let mut entailed = Vec::new();
        for (child, parents) in &self.class_hierarchy {
            for parent in parents {
                if child != parent {
                    entailed.push(Triple::new(child.as_str(), vocabulary::RDFS_SUBCLASS_OF, parent.as_str()));
                }
            }
        }
        for (child, parents) in &self.property_hierarchy {
            for parent in parents {
                if child != parent {
                    entailed.push(Triple::new(child.as_str(), vocabulary::RDFS_SUBPROPERTY_OF, parent.as_str()));
                }
            }
        }

        for triple in entailed {
            self.add_inferred(triple);
        }
    }

    /// Saturate property assertions: subPropertyOf, and under OWL-RL inverseOf,
    /// symmetric and transitive properties
    ///
    /// Semi-naive: each round only joins the triples added by the previous one.
    /// `max_iterations` bounds the number of rounds that add new triples.
    fn propagate_property_assertions(&mut self, started: Instant) -> Result<(), RdfsError> {
        let mut delta: Vec<Triple> = self.working.iter().cloned().collect();
        let mut rounds = 0usize;

        while !delta.is_empty() {
            if self.config.timeout_ms > 0 && started.elapsed().as_millis() > u128::from(self.config.timeout_ms) {
                return Err(RdfsError::Timeout(self.config.timeout_ms));
            }

            let mut candidates = Vec::new();
            for triple in &delta {
                self.derive_from(triple, &mut candidates);
            }

            delta = candidates
                .into_iter()
                .filter(|t| self.add_inferred(t.clone()))
                .collect();

            // Only rounds that derive something count against the limit
            if !delta.is_empty() {
                rounds += 1;
                if rounds > self.config.max_iterations {
                    return Err(RdfsError::MaxIterationsExceeded(self.config.max_iterations));
                }
            }
        }

        debug!(rounds, "property assertions saturated");
        Ok(())
    }

    fn derive_from(&self, triple: &Triple, out: &mut Vec<Triple>) {
        let (s, p, o) = (triple.subject.as_str(), triple.predicate.as_str(), triple.object.as_str());

        // rdfs7
        if let Some(supers) = self.property_hierarchy.get(p) {
            for q in supers {
                out.push(Triple::new(s, q.as_str(), o));
            }
        }

        // prp-inv1 / prp-inv2
        if let Some(inverses) = self.inverse_properties.get(p) {
            for q in inverses {
                out.push(Triple::new(o, q.as_str(), s));
            }
        }

        // prp-symp
        if self.symmetric_properties.contains(p) {
            out.push(Triple::new(o, p, s));
        }

        // prp-trp, joining the new triple on either side
        if self.transitive_properties.contains(p) {
            for z in self.working.objects(o, p) {
                out.push(Triple::new(s, p, z));
            }
            for x in self.working.subjects(p, s) {
                out.push(Triple::new(x, p, o));
            }
        }
    }

    /// rdfs2 / rdfs3 typing from domain and range, rdfs4a, then rdfs9 through the class hierarchy
    fn infer_types_and_constraints(&mut self) {
        let mut typed = Vec::new();

        for (property, classes) in &self.domain_constraints {
            for subject in self.working.subject_objects(property).into_iter().map(|(s, _)| s) {
                for class in classes {
                    typed.push(Triple::new(subject, vocabulary::RDF_TYPE, class.as_str()));
                }
            }
        }

        for (property, classes) in &self.range_constraints {
            for object in self.working.subject_objects(property).into_iter().map(|(_, o)| o) {
                for class in classes {
                    typed.push(Triple::new(object, vocabulary::RDF_TYPE, class.as_str()));
                }
            }
        }

        for triple in typed {
            self.add_inferred(triple);
        }

        // rdfs4a: every typed resource is an rdfs:Resource
        let resources: Vec<Triple> = self
            .working
            .subject_objects(vocabulary::RDF_TYPE)
            .into_iter()
            .map(|(resource, _)| Triple::new(resource, vocabulary::RDF_TYPE, vocabulary::RDFS_RESOURCE))
            .collect();
        for triple in resources {
            self.add_inferred(triple);
        }

        // x rdf:type A, A rdfs:subClassOf+ B => x rdf:type B
        let mut type_inferences = Vec::new();
        for (resource, class) in self.working.subject_objects(vocabulary::RDF_TYPE) {
            if let Some(superclasses) = self.class_hierarchy.get(class) {
                for superclass in superclasses {
                    type_inferences.push(Triple::new(resource, vocabulary::RDF_TYPE, superclass.as_str()));
                }
            }
        }

        for triple in type_inferences {
            self.add_inferred(triple);
        }
    }

    fn add_inferred(&mut self, triple: Triple) -> bool {
        if self.working.insert(triple.clone()) {
            self.inferred_triples.push(triple);
            true
        } else {
            false
        }
    }

    /// Inferred triples from the last run
    pub fn get_inferred_triples(&self) -> &[Triple] {
        &self.inferred_triples
    }

    /// Closed class hierarchy from the last run
    pub fn get_class_hierarchy(&self) -> &Hierarchy {
        &self.class_hierarchy
    }

    /// Closed property hierarchy from the last run
    pub fn get_property_hierarchy(&self) -> &Hierarchy {
        &self.property_hierarchy
    }
}

impl Default for RdfsReasoner {
    fn default() -> Self {
        Self::new(RdfsConfig::default())
    }
}
