use super::definition::FormDefinition;
use crate::error::FormConversionError;

/// A trait for custom data models that can be converted into a Kaiwa `FormDefinition`.
///
/// This is the primary extension point for making Kaiwa format-agnostic. By
/// implementing this trait on your own parsing structs, you provide a
/// translation layer that lets the graph builder process your form format.
///
/// # Example
///
/// ```rust
/// use kaiwa::prelude::*;
/// use kaiwa::error::FormConversionError;
///
/// // 1. Define your custom structs for parsing your format.
/// struct MyQuestion { path: String, text: String, kind: String }
/// struct MySurvey { title: String, questions: Vec<MyQuestion> }
///
/// // 2. Implement `IntoForm` for your top-level struct.
/// impl IntoForm for MySurvey {
///     fn into_form(self) -> Result<FormDefinition, FormConversionError> {
///         let mut prompts = Vec::new();
///         let mut bindings = Vec::new();
///         for question in self.questions {
///             prompts.push(PromptDefinition {
///                 reference_path: question.path.clone(),
///                 label: question.text,
///             });
///             bindings.push(BindingDefinition {
///                 reference_path: question.path,
///                 declared_type: question.kind,
///             });
///         }
///         Ok(FormDefinition { title: self.title, prompts, bindings })
///     }
/// }
/// ```
pub trait IntoForm {
    /// Consumes the object and converts it into a Kaiwa-compatible form definition.
    fn into_form(self) -> Result<FormDefinition, FormConversionError>;
}

impl IntoForm for FormDefinition {
    fn into_form(self) -> Result<FormDefinition, FormConversionError> {
        Ok(self)
    }
}
