//! Closed-world checks for classes and properties the schema never declares

use crate::ValidationError;
use ontocheck_core::vocabulary::{self, is_builtin};
use ontocheck_core::{Graph, Triple};
use std::collections::BTreeSet;
use tracing::debug;

const CLASS_DECLARATIONS: [&str; 3] = [vocabulary::OWL_CLASS, vocabulary::RDFS_CLASS, vocabulary::OWL_RESTRICTION];

const PROPERTY_DECLARATIONS: [&str; 6] = [
    vocabulary::OWL_OBJECT_PROPERTY,
    vocabulary::OWL_DATATYPE_PROPERTY,
    vocabulary::OWL_ANNOTATION_PROPERTY,
    vocabulary::OWL_SYMMETRIC_PROPERTY,
    vocabulary::OWL_TRANSITIVE_PROPERTY,
    vocabulary::RDF_PROPERTY,
];

/// Classes declared `a owl:Class`, `a rdfs:Class` or `a owl:Restriction` in `schema`
pub fn declared_classes(schema: &Graph) -> BTreeSet<&str> {
    CLASS_DECLARATIONS
        .iter()
        .flat_map(|kind| schema.subjects(vocabulary::RDF_TYPE, kind))
        .collect()
}

/// Properties typed as a property in `schema`, or declared as a subproperty
pub fn declared_properties(schema: &Graph) -> BTreeSet<&str> {
    PROPERTY_DECLARATIONS
        .iter()
        .flat_map(|kind| schema.subjects(vocabulary::RDF_TYPE, kind))
        .chain(
            schema
                .subject_objects(vocabulary::RDFS_SUBPROPERTY_OF)
                .into_iter()
                .map(|(s, _)| s),
        )
        .collect()
}

/// Class positions of a triple, if it is a statement that refers to classes
fn class_references(triple: &Triple) -> Vec<&str> {
    match triple.predicate.as_str() {
        vocabulary::RDF_TYPE | vocabulary::RDFS_DOMAIN | vocabulary::RDFS_RANGE => vec![triple.object.as_str()],
        vocabulary::RDFS_SUBCLASS_OF | vocabulary::OWL_DISJOINT_WITH => {
            if triple.subject == triple.object {
                vec![triple.subject.as_str()]
            } else {
                vec![triple.subject.as_str(), triple.object.as_str()]
            }
        }
        _ => Vec::new(),
    }
}

/// Report class references that the schema does not declare
///
/// Schema statements are checked first, then the rdf:type statements of
/// `data`. Built-in RDF/RDFS/OWL/XSD terms and blank nodes (anonymous class
/// expressions) are never reported.
pub fn validate_unknown_classes(data: &Graph, schema: &Graph) -> Vec<ValidationError> {
    let declared = declared_classes(schema);
    let mut result = Vec::new();

    let data_types = data.find_triples(None, Some(vocabulary::RDF_TYPE), None);
    for triple in schema.iter().chain(data_types) {
        for class in class_references(triple) {
            if !is_builtin(class) && !class.starts_with("_:") && !declared.contains(class) {
                result.push(ValidationError::UnknownClassError {
                    class: class.to_string(),
                    triple: triple.clone(),
                });
            }
        }
    }

    debug!(violations = result.len(), "class declarations checked");
    result
}

/// Report data statements whose predicate the schema does not declare
pub fn validate_unknown_properties(data: &Graph, schema: &Graph) -> Vec<ValidationError> {
    let declared = declared_properties(schema);

    let result: Vec<ValidationError> = data
        .iter()
        .filter(|t| !is_builtin(&t.predicate) && !declared.contains(t.predicate.as_str()))
        .map(|t| ValidationError::UnknownPropertyError {
            property: t.predicate.clone(),
            triple: t.clone(),
        })
        .collect();

    debug!(violations = result.len(), "property declarations checked");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const EX: &str = "http://example.com/";

    fn ex(local: &str) -> String {
        format!("{}{}", EX, local)
    }

    fn schema() -> Graph {
        let mut schema = Graph::new();
        schema.add(&ex("classA"), vocabulary::RDF_TYPE, vocabulary::OWL_CLASS);
        schema.add(&ex("relatedTo"), vocabulary::RDF_TYPE, vocabulary::OWL_OBJECT_PROPERTY);
        schema.add(&ex("relatedTo"), vocabulary::RDFS_DOMAIN, &ex("classA"));
        schema.add(&ex("relatedTo"), vocabulary::RDFS_RANGE, &ex("classB"));
        schema
    }

    #[test]
    fn test_undeclared_range_class() {
        let result = validate_unknown_classes(&Graph::new(), &schema());
        assert_eq!(result.len(), 1);
        assert!(matches!(
            &result[0],
            ValidationError::UnknownClassError { class, triple }
                if *class == ex("classB") && triple.predicate == vocabulary::RDFS_RANGE
        ));
    }

    #[test]
    fn test_data_type_statements_checked() {
        let mut data = Graph::new();
        data.add(&ex("x"), vocabulary::RDF_TYPE, &ex("classA"));
        data.add(&ex("y"), vocabulary::RDF_TYPE, &ex("classZ"));
        data.add(&ex("z"), vocabulary::RDF_TYPE, vocabulary::OWL_CLASS);

        let result = validate_unknown_classes(&data, &schema());
        let classes: Vec<String> = result
            .iter()
            .filter_map(|e| match e {
                ValidationError::UnknownClassError { class, .. } => Some(class.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(classes, vec![ex("classB"), ex("classZ")]);
    }

    #[test]
    fn test_undeclared_property() {
        let mut data = Graph::new();
        data.add(&ex("x"), &ex("relatedTo"), &ex("y"));
        data.add(&ex("x"), &ex("mystery"), &ex("y"));
        data.add(&ex("x"), vocabulary::RDF_TYPE, &ex("classA"));

        let result = validate_unknown_properties(&data, &schema());
        assert_eq!(result.len(), 1);
        assert!(matches!(
            &result[0],
            ValidationError::UnknownPropertyError { property, .. } if *property == ex("mystery")
        ));
    }

    #[test]
    fn test_subproperty_counts_as_declared() {
        let mut schema = schema();
        schema.add(&ex("closelyRelatedTo"), vocabulary::RDFS_SUBPROPERTY_OF, &ex("relatedTo"));

        let mut data = Graph::new();
        data.add(&ex("x"), &ex("closelyRelatedTo"), &ex("y"));

        assert!(validate_unknown_properties(&data, &schema).is_empty());
    }

    #[test]
    fn test_anonymous_class_expressions_are_not_unknown() {
        let mut with_restrictions = schema();
        with_restrictions.add(&ex("Parent"), vocabulary::RDF_TYPE, vocabulary::OWL_CLASS);
        with_restrictions.add(&ex("Parent"), vocabulary::RDFS_SUBCLASS_OF, "_:hasChild");
        with_restrictions.add("_:hasChild", vocabulary::RDF_TYPE, vocabulary::OWL_RESTRICTION);
        with_restrictions.add(&ex("Parent"), vocabulary::RDFS_SUBCLASS_OF, "_:untyped");
        with_restrictions.add(&ex("Named"), vocabulary::RDF_TYPE, vocabulary::OWL_RESTRICTION);
        with_restrictions.add(&ex("Parent"), vocabulary::RDFS_SUBCLASS_OF, &ex("Named"));

        // Only the undeclared classB range remains
        let result = validate_unknown_classes(&Graph::new(), &with_restrictions);
        assert_eq!(result.len(), 1);
    }
}
