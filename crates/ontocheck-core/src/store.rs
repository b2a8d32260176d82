//! Graph storage and pattern lookup

use crate::model::Triple;
use smallvec::SmallVec;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

type IndexList = SmallVec<[usize; 8]>;

/// Errors raised while loading or serializing a graph
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed triple: {0}")]
    MalformedTriple(String),
}

/// In-memory set of triples with indexing for fast pattern queries
///
/// Duplicate inserts are ignored. Iteration follows insertion order, so every
/// position index holds ascending triple offsets.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    triples: Vec<Triple>,
    members: HashSet<Triple>,
    /// Subject index: subject -> offsets into `triples`
    subject_index: HashMap<String, IndexList>,
    /// Predicate index: predicate -> offsets into `triples`
    predicate_index: HashMap<String, IndexList>,
    /// Object index: object -> offsets into `triples`
    object_index: HashMap<String, IndexList>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a triple, returning `false` when it was already present
    pub fn insert(&mut self, triple: Triple) -> bool {
        if self.members.contains(&triple) {
            return false;
        }

        let index = self.triples.len();
        self.subject_index.entry(triple.subject.clone()).or_default().push(index);
        self.predicate_index.entry(triple.predicate.clone()).or_default().push(index);
        self.object_index.entry(triple.object.clone()).or_default().push(index);
        self.members.insert(triple.clone());
        self.triples.push(triple);
        true
    }

    /// Add a triple built from its three terms
    pub fn add(&mut self, subject: &str, predicate: &str, object: &str) -> bool {
        self.insert(Triple::new(subject, predicate, object))
    }

    pub fn contains(&self, triple: &Triple) -> bool {
        self.members.contains(triple)
    }

    /// Check for a triple without allocating one
    pub fn has(&self, subject: &str, predicate: &str, object: &str) -> bool {
        !self.find_exact_triple_indices(subject, predicate, object).is_empty()
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Triple> {
        self.triples.iter()
    }

    /// Find triples matching a pattern, `None` acting as a wildcard
    pub fn find_triples(&self, subject: Option<&str>, predicate: Option<&str>, object: Option<&str>) -> Vec<&Triple> {
        // Use the most selective index to minimize the search space
        let candidate_indices: IndexList = match (subject, predicate, object) {
            (Some(s), Some(p), Some(o)) => self.find_exact_triple_indices(s, p, o),
            (Some(s), None, None) => Self::lookup(&self.subject_index, s).iter().copied().collect(),
            (None, Some(p), None) => Self::lookup(&self.predicate_index, p).iter().copied().collect(),
            (None, None, Some(o)) => Self::lookup(&self.object_index, o).iter().copied().collect(),
            (Some(s), Some(p), None) => Self::intersect_indices(
                Self::lookup(&self.subject_index, s),
                Self::lookup(&self.predicate_index, p),
            ),
            (Some(s), None, Some(o)) => Self::intersect_indices(
                Self::lookup(&self.subject_index, s),
                Self::lookup(&self.object_index, o),
            ),
            (None, Some(p), Some(o)) => Self::intersect_indices(
                Self::lookup(&self.predicate_index, p),
                Self::lookup(&self.object_index, o),
            ),
            (None, None, None) => (0..self.triples.len()).collect(),
        };

        candidate_indices
            .iter()
            .filter_map(|&index| self.triples.get(index))
            .collect()
    }

    /// All objects `o` such that `(subject, predicate, o)` is in the graph
    pub fn objects(&self, subject: &str, predicate: &str) -> Vec<&str> {
        self.find_triples(Some(subject), Some(predicate), None)
            .into_iter()
            .map(|t| t.object.as_str())
            .collect()
    }

    /// All subjects `s` such that `(s, predicate, object)` is in the graph
    pub fn subjects(&self, predicate: &str, object: &str) -> Vec<&str> {
        self.find_triples(None, Some(predicate), Some(object))
            .into_iter()
            .map(|t| t.subject.as_str())
            .collect()
    }

    /// All `(subject, object)` pairs asserted through `predicate`
    pub fn subject_objects(&self, predicate: &str) -> Vec<(&str, &str)> {
        self.find_triples(None, Some(predicate), None)
            .into_iter()
            .map(|t| (t.subject.as_str(), t.object.as_str()))
            .collect()
    }

    /// New graph holding the triples of both `self` and `other`
    pub fn union(&self, other: &Graph) -> Graph {
        let mut merged = self.clone();
        merged.extend(other.iter().cloned());
        merged
    }

    /// New graph holding the triples of `self` that match `keep`
    pub fn filter<F>(&self, mut keep: F) -> Graph
    where
        F: FnMut(&Triple) -> bool,
    {
        self.iter().filter(|t| keep(t)).cloned().collect()
    }

    /// Load a graph from a JSON array of `{subject, predicate, object}` objects
    pub fn from_json_str(input: &str) -> Result<Graph, GraphError> {
        let triples: Vec<Triple> = serde_json::from_str(input)?;
        if let Some(bad) = triples.iter().find(|t| !t.is_well_formed()) {
            return Err(GraphError::MalformedTriple(format!(
                "empty term in ({:?}, {:?}, {:?})",
                bad.subject, bad.predicate, bad.object
            )));
        }
        Ok(triples.into_iter().collect())
    }

    /// Serialize the graph as a JSON array of triples
    pub fn to_json(&self) -> Result<serde_json::Value, GraphError> {
        Ok(serde_json::to_value(&self.triples)?)
    }

    fn lookup<'a>(index: &'a HashMap<String, IndexList>, key: &str) -> &'a [usize] {
        index.get(key).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Offsets of triples that exactly match SPO
    fn find_exact_triple_indices(&self, subject: &str, predicate: &str, object: &str) -> IndexList {
        let candidates = Self::intersect_indices(
            Self::lookup(&self.subject_index, subject),
            Self::lookup(&self.predicate_index, predicate),
        );
        Self::intersect_indices(&candidates, Self::lookup(&self.object_index, object))
    }

    /// Intersect two sorted index vectors
    fn intersect_indices(a: &[usize], b: &[usize]) -> IndexList {
        let mut result = IndexList::new();
        let mut i = 0;
        let mut j = 0;

        while i < a.len() && j < b.len() {
            match a[i].cmp(&b[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    result.push(a[i]);
                    i += 1;
                    j += 1;
                }
            }
        }

        result
    }
}

impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.members == other.members
    }
}

impl Eq for Graph {}

impl Extend<Triple> for Graph {
    fn extend<I: IntoIterator<Item = Triple>>(&mut self, iter: I) {
        for triple in iter {
            self.insert(triple);
        }
    }
}

impl FromIterator<Triple> for Graph {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        let mut graph = Graph::new();
        graph.extend(iter);
        graph
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Triple;
    type IntoIter = std::slice::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}
