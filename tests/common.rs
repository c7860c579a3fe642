//! Common test utilities for building form definitions.
use kaiwa::prelude::*;

/// Creates a prompt record for the given reference path and label.
#[allow(dead_code)]
pub fn prompt(reference_path: &str, label: &str) -> PromptDefinition {
    PromptDefinition {
        reference_path: reference_path.to_string(),
        label: label.to_string(),
    }
}

/// Creates a binding record for the given reference path and declared type.
#[allow(dead_code)]
pub fn binding(reference_path: &str, declared_type: &str) -> BindingDefinition {
    BindingDefinition {
        reference_path: reference_path.to_string(),
        declared_type: declared_type.to_string(),
    }
}

/// The canonical three-question survey: two string fields and one integer
/// field, prompts and bindings correlated by reference path.
#[allow(dead_code)]
pub fn survey_form() -> FormDefinition {
    FormDefinition {
        title: "My Survey".to_string(),
        prompts: vec![
            prompt("/data/firstname", "What is your first name?"),
            prompt("/data/lastname", "What is your last name?"),
            prompt("/data/age", "What is your age?"),
        ],
        bindings: vec![
            binding("/data/firstname", "string"),
            binding("/data/lastname", "string"),
            binding("/data/age", "integer"),
        ],
    }
}

/// A form with a single string question.
#[allow(dead_code)]
pub fn single_question_form() -> FormDefinition {
    FormDefinition {
        title: "One Question".to_string(),
        prompts: vec![prompt("/data/name", "What is your name?")],
        bindings: vec![binding("/data/name", "string")],
    }
}
