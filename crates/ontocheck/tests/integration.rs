// End-to-end checks across the core, reasoner and validator crates

use ontocheck::prelude::*;
use ontocheck::{EntailmentProfile, RdfsReasoner};

const EX: &str = "http://example.com/";

fn iri(local: &str) -> String {
    format!("{}{}", EX, local)
}

fn equivalence_schema() -> Graph {
    let mut schema = Graph::new();
    schema.add(&iri("Person"), vocabulary::OWL_EQUIVALENT_CLASS, &iri("Human"));
    schema.add(&iri("knows"), vocabulary::RDF_TYPE, vocabulary::OWL_OBJECT_PROPERTY);
    schema.add(&iri("knows"), vocabulary::RDFS_DOMAIN, &iri("Human"));
    schema.add(&iri("knows"), vocabulary::RDFS_RANGE, &iri("Human"));
    schema
}

fn people() -> Graph {
    let mut data = Graph::new();
    data.add(&iri("ann"), vocabulary::RDF_TYPE, &iri("Person"));
    data.add(&iri("bob"), vocabulary::RDF_TYPE, &iri("Human"));
    data.add(&iri("ann"), &iri("knows"), &iri("bob"));
    data
}

#[test]
fn test_profile_changes_outcome() {
    let schema = equivalence_schema();
    let data = people();

    let owl = validate_with_config(&data, &schema, &ValidationConfig::with_profile(EntailmentProfile::RdfsOwlRl))
        .unwrap();
    assert!(owl.is_empty());

    let rdfs =
        validate_with_config(&data, &schema, &ValidationConfig::with_profile(EntailmentProfile::Rdfs)).unwrap();
    let kinds: Vec<_> = rdfs.iter().map(ValidationError::kind).collect();
    assert_eq!(kinds, vec![ViolationKind::DomainMismatch]);
}

#[test]
fn test_json_graphs_to_report() {
    let schema_json = equivalence_schema().to_json().unwrap().to_string();
    let mut data = people();
    data.add(&iri("bob"), &iri("knows"), &iri("rock"));
    let data_json = data.to_json().unwrap().to_string();

    let schema = Graph::from_json_str(&schema_json).unwrap();
    let data = Graph::from_json_str(&data_json).unwrap();
    assert_eq!(data.len(), 4);

    let report = Validator::default().report(&data, &schema).unwrap();
    assert!(!report.conforms());
    assert_eq!(report.kinds(), vec![ViolationKind::RangeMismatch]);

    let json = report.to_json().unwrap();
    assert_eq!(json["results"][0]["kind"], Value::from("RangeMismatch"));
    assert_eq!(json["results"][0]["triple"]["object"], Value::from(iri("rock")));
}

#[test]
fn test_validation_leaves_inputs_untouched() {
    let schema = equivalence_schema();
    let data = people();
    let (schema_before, data_before) = (schema.clone(), data.clone());

    validate(&data, &schema).unwrap();
    validate(&data, &schema).unwrap();

    assert_eq!(schema, schema_before);
    assert_eq!(data, data_before);
}

#[test]
fn test_reasoner_and_validator_agree_on_types() {
    let schema = equivalence_schema();
    let data = people();

    let mut reasoner = RdfsReasoner::default();
    let expanded = reasoner.expand(&schema.union(&data)).unwrap();
    assert!(expanded.has(&iri("ann"), vocabulary::RDF_TYPE, &iri("Human")));

    let closure = ontocheck::validation::build_closure(&data, &schema, EntailmentProfile::RdfsOwlRl).unwrap();
    assert!(closure.has(&iri("ann"), vocabulary::RDF_TYPE, &iri("Human")));
    assert!(closure.has(&iri("bob"), vocabulary::RDF_TYPE, &iri("Person")));
}

#[test]
fn test_health_check_lists_modules() {
    let health = ontocheck::health_check();
    assert_eq!(health["modules"]["validate"], Value::from(true));
}
