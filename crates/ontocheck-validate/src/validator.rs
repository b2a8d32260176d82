//! Validation entry points

use crate::closure::TypeClosure;
use crate::disjoint::validate_disjoint_classes;
use crate::properties::validate_object_properties_with;
use crate::report::ValidationReport;
use crate::unknown::{validate_unknown_classes, validate_unknown_properties};
use crate::{ValidationError, ValidationFailure};
use ontocheck_core::Graph;
use ontocheck_rdfs::{EntailmentProfile, RdfsConfig};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Validation configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Reasoner used to build the type closure
    pub reasoner: RdfsConfig,
    /// Report classes the schema never declares
    pub check_unknown_classes: bool,
    /// Report data predicates the schema never declares
    pub check_unknown_properties: bool,
}

impl ValidationConfig {
    pub fn with_profile(profile: EntailmentProfile) -> Self {
        Self {
            reasoner: RdfsConfig::with_profile(profile),
            ..Self::default()
        }
    }

    /// Enable both closed-world declaration checks
    pub fn strict(mut self) -> Self {
        self.check_unknown_classes = true;
        self.check_unknown_properties = true;
        self
    }
}

/// Schema validator
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate `data` against `schema`
    ///
    /// Results come in a fixed order: object property violations, disjoint
    /// class violations, then unknown classes and unknown properties when
    /// enabled. Neither graph is modified.
    pub fn validate(&self, data: &Graph, schema: &Graph) -> Result<Vec<ValidationError>, ValidationFailure> {
        check_well_formed("data", data)?;
        check_well_formed("schema", schema)?;

        let closure = TypeClosure::build(data, schema, &self.config.reasoner)?;
        let closure = closure.graph();

        let mut result = Vec::new();
        result.extend(validate_object_properties_with(
            data,
            schema,
            closure,
            self.config.reasoner.profile,
        ));
        result.extend(validate_disjoint_classes(data, schema, closure));

        if self.config.check_unknown_classes {
            result.extend(validate_unknown_classes(data, schema));
        }
        if self.config.check_unknown_properties {
            result.extend(validate_unknown_properties(data, schema));
        }

        info!(
            data = data.len(),
            schema = schema.len(),
            violations = result.len(),
            "validation finished"
        );
        Ok(result)
    }

    /// Validate and wrap the results in a [`ValidationReport`]
    pub fn report(&self, data: &Graph, schema: &Graph) -> Result<ValidationReport, ValidationFailure> {
        self.validate(data, schema).map(ValidationReport::new)
    }
}

fn check_well_formed(name: &str, graph: &Graph) -> Result<(), ValidationFailure> {
    match graph.iter().find(|t| !t.is_well_formed()) {
        Some(bad) => Err(ValidationFailure::InvalidInput(format!(
            "{} graph contains a triple with an empty term: ({:?}, {:?}, {:?})",
            name, bad.subject, bad.predicate, bad.object
        ))),
        None => Ok(()),
    }
}

/// Validate `data` against `schema` with the default configuration
pub fn validate(data: &Graph, schema: &Graph) -> Result<Vec<ValidationError>, ValidationFailure> {
    Validator::default().validate(data, schema)
}

/// Validate `data` against `schema` with an explicit configuration
pub fn validate_with_config(
    data: &Graph,
    schema: &Graph,
    config: &ValidationConfig,
) -> Result<Vec<ValidationError>, ValidationFailure> {
    Validator::new(config.clone()).validate(data, schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ontocheck_core::vocabulary;

    #[test]
    fn test_config_defaults() {
        let config = ValidationConfig::default();
        assert_eq!(config.reasoner.profile, EntailmentProfile::RdfsOwlRl);
        assert!(!config.check_unknown_classes);
        assert!(!config.check_unknown_properties);

        let strict = ValidationConfig::with_profile(EntailmentProfile::Rdfs).strict();
        assert_eq!(strict.reasoner.profile, EntailmentProfile::Rdfs);
        assert!(strict.check_unknown_classes && strict.check_unknown_properties);
    }

    #[test]
    fn test_config_from_partial_json() {
        let config: ValidationConfig =
            serde_json::from_str(r#"{"check_unknown_properties": true, "reasoner": {"profile": "rdfs"}}"#).unwrap();
        assert!(config.check_unknown_properties);
        assert!(!config.check_unknown_classes);
        assert_eq!(config.reasoner.profile, EntailmentProfile::Rdfs);
        assert_eq!(config.reasoner.max_iterations, 1000);
    }

    #[test]
    fn test_empty_term_is_fatal() {
        let mut data = Graph::new();
        data.add("x", vocabulary::RDF_TYPE, "");

        let result = validate(&data, &Graph::new());
        assert!(matches!(result, Err(ValidationFailure::InvalidInput(msg)) if msg.starts_with("data graph")));
    }

    #[test]
    fn test_reasoner_failure_is_distinct_from_violations() {
        let mut schema = Graph::new();
        schema.add("partOf", vocabulary::RDF_TYPE, vocabulary::OWL_TRANSITIVE_PROPERTY);
        for i in 0..32 {
            schema.add(&format!("n{}", i), "partOf", &format!("n{}", i + 1));
        }

        let mut config = ValidationConfig::default();
        config.reasoner.max_iterations = 1;

        let result = validate_with_config(&Graph::new(), &schema, &config);
        assert!(matches!(result, Err(ValidationFailure::Reasoner(_))));
    }
}
