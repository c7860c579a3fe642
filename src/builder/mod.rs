use ahash::AHashMap;
use tracing::debug;

use crate::error::GraphBuildError;
use crate::flow::{DestinationKind, Flow, MessageNode, ResponseNode};
use crate::form::{BindingDefinition, FormDefinition};

mod layout;

use layout::LayoutCursor;

/// Flow id used when the caller does not supply one.
const DEFAULT_FLOW_ID: i64 = 1;

/// Walks a form's prompts in order and produces the wired flow graph.
///
/// Each prompt becomes a [`MessageNode`] paired with a [`ResponseNode`] built
/// from the binding that shares the prompt's reference path. Wiring between
/// consecutive pairs is deferred: a response node's primary rule is created
/// with its destination unset, then resolved on the next iteration once the
/// following message node exists. The last primary rule stays unset and is
/// the flow's terminal branch.
pub struct GraphBuilder {
    form: FormDefinition,
    flow_id: i64,
    base_language: String,
}

impl GraphBuilder {
    pub fn new(form: FormDefinition) -> Self {
        Self {
            form,
            flow_id: DEFAULT_FLOW_ID,
            base_language: crate::flow::BASE_LANGUAGE.to_string(),
        }
    }

    /// Overrides the numeric id reported in the exported document metadata.
    pub fn with_flow_id(mut self, flow_id: i64) -> Self {
        self.flow_id = flow_id;
        self
    }

    /// Overrides the flow's configured base language. Note that the exported
    /// flow body declares a fixed language tag regardless of this setting.
    pub fn with_base_language(mut self, base_language: &str) -> Self {
        self.base_language = base_language.to_string();
        self
    }

    /// Runs the conversion pass. Either the whole graph is built and wired,
    /// or an error is returned and no partial flow escapes.
    pub fn build(self) -> Result<Flow, GraphBuildError> {
        if self.form.prompts.is_empty() {
            return Err(GraphBuildError::EmptyForm {
                title: self.form.title.clone(),
            });
        }

        // First binding for a path wins when a form repeats a nodeset.
        let mut bindings: AHashMap<&str, &BindingDefinition> = AHashMap::new();
        for binding in &self.form.bindings {
            bindings
                .entry(binding.reference_path.as_str())
                .or_insert(binding);
        }

        let mut flow = Flow::new(self.flow_id, &self.form.title, &self.base_language);
        let mut cursor = LayoutCursor::new();

        for prompt in &self.form.prompts {
            let mut message_node = MessageNode::new(&prompt.label, cursor.message_y());

            // Resolve the previous question's pending branch now that its
            // target exists.
            if let Some(previous) = flow.last_response_node_mut() {
                if let Some(rule) = previous.primary_rule_mut() {
                    rule.set_destination(message_node.uuid(), DestinationKind::MessageNode);
                }
            }

            let binding = *bindings.get(prompt.reference_path.as_str()).ok_or_else(|| {
                GraphBuildError::BindingNotFound {
                    reference_path: prompt.reference_path.clone(),
                }
            })?;

            let response_node = ResponseNode::from_binding(binding, cursor.response_y());
            message_node.set_destination(response_node.uuid());

            debug!(
                reference_path = %prompt.reference_path,
                declared_type = %binding.declared_type,
                message_y = cursor.message_y(),
                "built node pair"
            );

            flow.push_message_node(message_node);
            flow.push_response_node(response_node);
            cursor.advance();
        }

        debug!(
            flow = %flow.name(),
            pairs = flow.message_nodes().len(),
            "graph build complete"
        );
        Ok(flow)
    }
}
