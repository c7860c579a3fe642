use thiserror::Error;

/// Errors that can occur while building the flow graph from a form definition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphBuildError {
    #[error("Prompt '{reference_path}' has no matching binding in the form model")]
    BindingNotFound { reference_path: String },

    #[error("Form '{title}' defines no prompts, so the flow would have no entry point")]
    EmptyForm { title: String },
}

/// Errors that can occur when exporting a flow to its wire document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowExportError {
    #[error("Flow '{flow_name}' has no message nodes; an entry point cannot be chosen")]
    NoEntryPoint { flow_name: String },
}

/// Errors that can occur when converting a custom form format into a Kaiwa `FormDefinition`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormConversionError {
    #[error("Invalid form data: {0}")]
    ValidationError(String),
}

/// Umbrella error for the one-shot [`convert_form`](crate::convert::convert_form) entry point.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error(transparent)]
    Conversion(#[from] FormConversionError),

    #[error(transparent)]
    Build(#[from] GraphBuildError),

    #[error(transparent)]
    Export(#[from] FlowExportError),
}
