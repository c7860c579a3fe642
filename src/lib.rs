//! # Kaiwa - Survey Form to Messaging Flow Converter
//!
//! **Kaiwa** transforms a structured survey-form definition (an XForm-derived
//! document describing questions, their data types, and validation bindings)
//! into a directed graph of an interactive messaging flow. Each survey
//! question becomes a pair of nodes: a [`MessageNode`](flow::MessageNode) that
//! sends the prompt, and a [`ResponseNode`](flow::ResponseNode) that waits for
//! the reply and routes it through an ordered set of rules.
//!
//! ## Core Workflow
//!
//! The engine is format-agnostic. It operates on a canonical internal model of
//! a "form definition." The primary workflow is:
//!
//! 1.  **Load Your Data**: Parse your form format (ODK XML, JSON, etc.) into your own Rust structs.
//! 2.  **Convert to Kaiwa's Model**: Implement the `IntoForm` trait for your structs to provide a translation layer into Kaiwa's `FormDefinition`.
//! 3.  **Build**: Use `GraphBuilder` to walk the ordered question list and produce a fully wired `Flow` graph.
//! 4.  **Export**: Call `Flow::to_json_string` to obtain the wire document consumed by the flow-execution engine.
//!
//! ## Quick Start
//!
//! ```rust
//! use kaiwa::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let form = FormDefinition {
//!         title: "My Survey".to_string(),
//!         prompts: vec![
//!             PromptDefinition {
//!                 reference_path: "/data/firstname".to_string(),
//!                 label: "What is your first name?".to_string(),
//!             },
//!             PromptDefinition {
//!                 reference_path: "/data/age".to_string(),
//!                 label: "What is your age?".to_string(),
//!             },
//!         ],
//!         bindings: vec![
//!             BindingDefinition {
//!                 reference_path: "/data/firstname".to_string(),
//!                 declared_type: "string".to_string(),
//!             },
//!             BindingDefinition {
//!                 reference_path: "/data/age".to_string(),
//!                 declared_type: "integer".to_string(),
//!             },
//!         ],
//!     };
//!
//!     let flow = GraphBuilder::new(form).build()?;
//!     println!("{}", flow.to_json_string()?);
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod convert;
pub mod error;
pub mod flow;
pub mod form;
pub mod prelude;
