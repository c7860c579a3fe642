use serde::{Deserialize, Serialize};

/// The complete, canonical definition of a survey form, ready for graph building.
/// This is the target structure for any custom data model conversion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormDefinition {
    pub title: String,
    pub prompts: Vec<PromptDefinition>,
    pub bindings: Vec<BindingDefinition>,
}

/// A single question prompt: the text sent to the respondent, keyed by the
/// reference path of the field it fills in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptDefinition {
    pub reference_path: String,
    pub label: String,
}

/// A binding record carrying the declared response type for a reference path.
/// Prompts and bindings are correlated by exact `reference_path` match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BindingDefinition {
    pub reference_path: String,
    pub declared_type: String,
}

impl BindingDefinition {
    /// The final segment of the reference path, e.g. `/data/age` -> `age`.
    pub fn field_name(&self) -> &str {
        self.reference_path
            .rsplit('/')
            .next()
            .unwrap_or(&self.reference_path)
    }

    /// Whether the declared type is the unconstrained string type.
    /// Comparison is case-insensitive since upstream form tools emit both casings.
    pub fn is_string(&self) -> bool {
        self.declared_type.eq_ignore_ascii_case("string")
    }
}
