//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and functions from the kaiwa
//! crate. Import this module to get access to the core functionality without
//! having to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use kaiwa::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let form_json = std::fs::read_to_string("path/to/form.json")?;
//! let form: FormDefinition = serde_json::from_str(&form_json)?;
//!
//! let flow = GraphBuilder::new(form).build()?;
//! println!("{}", flow.to_json_string()?);
//! # Ok(())
//! # }
//! ```

// Graph building and conversion
pub use crate::builder::GraphBuilder;
pub use crate::convert::convert_form;

// Entity model
pub use crate::flow::{DestinationKind, Flow, Message, MessageNode, ResponseNode, Rule, RuleTest};

// Form input model
pub use crate::form::{BindingDefinition, FormDefinition, IntoForm, PromptDefinition};

// Error types
pub use crate::error::{ConvertError, FlowExportError, FormConversionError, GraphBuildError};

// Result type alias for convenience. The error type defaults to a boxed
// error but can be named explicitly, so signatures like
// `Result<FormDefinition, FormConversionError>` still work under a glob
// import of this module.
pub type Result<T, E = Box<dyn std::error::Error>> = std::result::Result<T, E>;
