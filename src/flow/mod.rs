pub mod graph;
pub mod message;
pub mod response;

pub use graph::*;
pub use message::*;
pub use response::*;

use serde_json::Value;

/// Language tag used for every localized text map in the wire document.
/// The execution engine expects this exact tag regardless of the flow's
/// configured base language.
pub(crate) const BASE_LANGUAGE: &str = "eng";

/// Fixed horizontal column shared by all nodes in the generated layout.
pub(crate) const NODE_COLUMN_X: i64 = 100;

/// Wraps a piece of text in the single-language localized map shape,
/// e.g. `{"eng": "What is your age?"}`.
pub(crate) fn localized_text(text: &str) -> Value {
    let mut map = serde_json::Map::new();
    map.insert(BASE_LANGUAGE.to_string(), Value::String(text.to_string()));
    Value::Object(map)
}
