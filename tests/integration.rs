//! End-to-end tests: custom format conversion through to the wire document.
mod common;
use common::*;
use kaiwa::error::FormConversionError;
use kaiwa::prelude::*;
use serde_json::Value;

/// A stand-in for a caller's own pre-parsed form format.
struct OdkDocument {
    title: String,
    fields: Vec<(String, String, String)>, // (nodeset, label, declared type)
}

impl IntoForm for OdkDocument {
    fn into_form(self) -> Result<FormDefinition, FormConversionError> {
        if self.title.is_empty() {
            return Err(FormConversionError::ValidationError(
                "document has no title".to_string(),
            ));
        }
        let prompts = self
            .fields
            .iter()
            .map(|(nodeset, label, _)| PromptDefinition {
                reference_path: nodeset.clone(),
                label: label.clone(),
            })
            .collect();
        let bindings = self
            .fields
            .into_iter()
            .map(|(nodeset, _, declared_type)| BindingDefinition {
                reference_path: nodeset,
                declared_type,
            })
            .collect();
        Ok(FormDefinition {
            title: self.title,
            prompts,
            bindings,
        })
    }
}

fn odk_survey() -> OdkDocument {
    OdkDocument {
        title: "My Survey".to_string(),
        fields: vec![
            (
                "/data/firstname".to_string(),
                "What is your first name?".to_string(),
                "string".to_string(),
            ),
            (
                "/data/lastname".to_string(),
                "What is your last name?".to_string(),
                "string".to_string(),
            ),
            (
                "/data/age".to_string(),
                "What is your age?".to_string(),
                "integer".to_string(),
            ),
        ],
    }
}

/// Finds the node with the given uuid in a serialized node list.
fn node_by_uuid<'a>(nodes: &'a [Value], uuid: &str) -> &'a Value {
    nodes
        .iter()
        .find(|node| node["uuid"] == uuid)
        .expect("node by uuid")
}

#[test]
fn test_convert_form_from_custom_format() {
    let document = convert_form(odk_survey()).expect("convert");
    let parsed: Value = serde_json::from_str(&document).expect("valid JSON");

    assert_eq!(parsed["version"], 8);
    assert_eq!(parsed["metadata"]["name"], "My Survey");
    assert_eq!(parsed["flows"][0]["action_sets"].as_array().unwrap().len(), 3);
    assert_eq!(parsed["flows"][0]["rule_sets"].as_array().unwrap().len(), 3);
}

#[test]
fn test_conversion_validation_error_surfaces() {
    let document = OdkDocument {
        title: String::new(),
        fields: vec![],
    };

    let err = convert_form(document).unwrap_err();
    assert!(matches!(err, ConvertError::Conversion(_)));
    assert!(err.to_string().contains("no title"));
}

#[test]
fn test_empty_form_surfaces_build_error() {
    let form = FormDefinition {
        title: "Empty".to_string(),
        prompts: vec![],
        bindings: vec![],
    };

    let err = convert_form(form).unwrap_err();
    assert!(matches!(err, ConvertError::Build(_)));
}

#[test]
fn test_walking_the_chain_from_the_entry_point() {
    let document = convert_form(survey_form()).expect("convert");
    let parsed: Value = serde_json::from_str(&document).expect("valid JSON");
    let body = &parsed["flows"][0];
    let action_sets = body["action_sets"].as_array().expect("action_sets");
    let rule_sets = body["rule_sets"].as_array().expect("rule_sets");

    // Walk: entry message -> response -> next message ... -> terminal rule.
    let mut current = body["entry"].as_str().expect("entry").to_string();
    let mut questions = Vec::new();

    loop {
        let message = node_by_uuid(action_sets, &current);
        questions.push(
            message["actions"][0]["msg"]["eng"]
                .as_str()
                .expect("message text")
                .to_string(),
        );

        let response_uuid = message["destination"].as_str().expect("wired message");
        let response = node_by_uuid(rule_sets, response_uuid);
        let primary = response["rules"]
            .as_array()
            .expect("rules")
            .iter()
            .find(|rule| rule["category"]["eng"] != "Other")
            .expect("primary rule");

        match primary["destination"].as_str() {
            Some(next) => current = next.to_string(),
            None => break,
        }
    }

    assert_eq!(
        questions,
        vec![
            "What is your first name?",
            "What is your last name?",
            "What is your age?",
        ]
    );
}

#[test]
fn test_scenario_age_field_routing() {
    let flow = GraphBuilder::new(survey_form()).build().expect("build");

    let firstname_response = &flow.response_nodes()[0];
    let lastname_message = &flow.message_nodes()[1];
    assert_eq!(firstname_response.rules().len(), 1);
    assert_eq!(
        firstname_response.rules()[0].destination(),
        Some(lastname_message.uuid())
    );

    let age_response = &flow.response_nodes()[2];
    assert_eq!(age_response.rules().len(), 2);
    let primary = age_response.primary_rule().expect("primary rule");
    assert_eq!(*primary.test(), RuleTest::Typed("number".to_string()));
    assert_eq!(primary.destination(), None);
}
