//! # ontocheck core
//!
//! RDF triple model, vocabulary constants and the indexed in-memory graph
//! that the closure reasoner and the validators query.

pub mod model;
pub mod store;
pub mod vocabulary;

pub use model::*;
pub use store::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(test)]
    mod triple_tests {
        use super::*;

        #[test]
        fn test_triple_creation() {
            let triple = Triple::new("subject", "predicate", "object");
            assert_eq!(triple.subject, "subject");
            assert_eq!(triple.predicate, "predicate");
            assert_eq!(triple.object, "object");
        }

        #[test]
        fn test_triple_equality() {
            let triple1 = Triple::new("s", "p", "o");
            let triple2: Triple = ("s", "p", "o").into();
            let triple3 = Triple::new("s", "p", "different");
            assert_eq!(triple1, triple2);
            assert_ne!(triple1, triple3);
        }

        #[test]
        fn test_triple_display() {
            let triple = Triple::new("http://a", "http://b", "http://c");
            assert_eq!(triple.to_string(), "<http://a> <http://b> <http://c> .");
        }

        #[test]
        fn test_well_formed() {
            assert!(Triple::new("s", "p", "o").is_well_formed());
            assert!(!Triple::new("", "p", "o").is_well_formed());
        }
    }

    #[cfg(test)]
    mod graph_tests {
        use super::*;

        fn sample_graph() -> Graph {
            let mut graph = Graph::new();
            graph.add("s1", "p1", "o1");
            graph.add("s1", "p2", "o2");
            graph.add("s2", "p1", "o1");
            graph.add("s2", "p2", "o3");
            graph
        }

        #[test]
        fn test_duplicate_insert_is_ignored() {
            let mut graph = Graph::new();
            assert!(graph.add("s", "p", "o"));
            assert!(!graph.add("s", "p", "o"));
            assert_eq!(graph.len(), 1);
        }

        #[test]
        fn test_find_by_single_position() {
            let graph = sample_graph();
            assert_eq!(graph.find_triples(Some("s1"), None, None).len(), 2);
            assert_eq!(graph.find_triples(None, Some("p1"), None).len(), 2);
            assert_eq!(graph.find_triples(None, None, Some("o3")).len(), 1);
            assert_eq!(graph.find_triples(None, None, None).len(), 4);
        }

        #[test]
        fn test_find_by_two_positions() {
            let graph = sample_graph();
            assert_eq!(graph.objects("s1", "p2"), vec!["o2"]);
            assert_eq!(graph.subjects("p1", "o1"), vec!["s1", "s2"]);
            assert_eq!(graph.find_triples(Some("s2"), None, Some("o1")).len(), 1);
            assert!(graph.objects("s3", "p1").is_empty());
        }

        #[test]
        fn test_exact_lookup() {
            let graph = sample_graph();
            assert!(graph.has("s2", "p2", "o3"));
            assert!(!graph.has("s2", "p2", "o2"));
            assert!(graph.contains(&Triple::new("s1", "p1", "o1")));
        }

        #[test]
        fn test_union_leaves_inputs_untouched() {
            let a = sample_graph();
            let mut b = Graph::new();
            b.add("s1", "p1", "o1");
            b.add("s9", "p9", "o9");

            let merged = a.union(&b);
            assert_eq!(merged.len(), 5);
            assert_eq!(a.len(), 4);
            assert_eq!(b.len(), 2);
        }

        #[test]
        fn test_filter() {
            let graph = sample_graph();
            let p1_only = graph.filter(|t| t.predicate == "p1");
            assert_eq!(p1_only.len(), 2);
            assert!(p1_only.iter().all(|t| t.predicate == "p1"));
        }

        #[test]
        fn test_graph_equality_ignores_order() {
            let a: Graph = vec![Triple::new("a", "b", "c"), Triple::new("d", "e", "f")]
                .into_iter()
                .collect();
            let b: Graph = vec![Triple::new("d", "e", "f"), Triple::new("a", "b", "c")]
                .into_iter()
                .collect();
            assert_eq!(a, b);
        }
    }

    #[cfg(test)]
    mod json_tests {
        use super::*;

        #[test]
        fn test_from_json_str() {
            let input = r#"[
                {"subject": "http://example.com/a", "predicate": "http://example.com/p", "object": "http://example.com/b"},
                {"subject": "http://example.com/a", "predicate": "http://example.com/p", "object": "http://example.com/b"}
            ]"#;
            let graph = Graph::from_json_str(input).unwrap();
            assert_eq!(graph.len(), 1);
        }

        #[test]
        fn test_from_json_rejects_empty_terms() {
            let input = r#"[{"subject": "", "predicate": "p", "object": "o"}]"#;
            let result = Graph::from_json_str(input);
            assert!(matches!(result, Err(GraphError::MalformedTriple(_))));
        }

        #[test]
        fn test_from_json_rejects_garbage() {
            let result = Graph::from_json_str("{not json");
            assert!(matches!(result, Err(GraphError::Json(_))));
        }

        #[test]
        fn test_to_json() {
            let mut graph = Graph::new();
            graph.add("s", "p", "o");
            let value = graph.to_json().unwrap();
            assert_eq!(value[0]["subject"], "s");
            assert_eq!(value[0]["object"], "o");
        }
    }
}
