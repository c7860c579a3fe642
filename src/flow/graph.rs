use chrono::{DateTime, Utc};
use serde_json::{Value, json};
use uuid::Uuid;

use super::message::MessageNode;
use super::response::ResponseNode;
use crate::error::FlowExportError;

/// Format marker of the exported document and of the flow body inside it.
const FORMAT_VERSION: u32 = 8;

/// Revision counter reported in the document metadata.
const DEFAULT_REVISION: u32 = 13;

/// Flow-kind tag: a message flow.
const FLOW_TYPE: &str = "F";

/// ISO-8601 with microseconds and a literal Z suffix, as the engine expects.
const SAVED_ON_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

/// The root container of a converted survey: owns every node of the graph.
///
/// Nodes are held in creation order. The entry point of the flow is the
/// earliest-created message node, so a flow must own at least one message
/// node before it can be exported.
#[derive(Debug, Clone)]
pub struct Flow {
    id: i64,
    name: String,
    revision: u32,
    version: u32,
    base_language: String,
    saved_on: DateTime<Utc>,
    message_nodes: Vec<MessageNode>,
    response_nodes: Vec<ResponseNode>,
}

impl Flow {
    pub fn new(id: i64, name: &str, base_language: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            revision: DEFAULT_REVISION,
            version: FORMAT_VERSION,
            base_language: base_language.to_string(),
            saved_on: Utc::now(),
            message_nodes: Vec::new(),
            response_nodes: Vec::new(),
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_language(&self) -> &str {
        &self.base_language
    }

    pub fn saved_on(&self) -> DateTime<Utc> {
        self.saved_on
    }

    pub fn message_nodes(&self) -> &[MessageNode] {
        &self.message_nodes
    }

    pub fn response_nodes(&self) -> &[ResponseNode] {
        &self.response_nodes
    }

    /// The flow's starting node: the earliest-created message node, with ties
    /// broken by insertion order.
    pub fn entry(&self) -> Option<Uuid> {
        self.message_nodes
            .iter()
            .min_by_key(|node| node.created_on())
            .map(MessageNode::uuid)
    }

    pub(crate) fn push_message_node(&mut self, node: MessageNode) {
        self.message_nodes.push(node);
    }

    pub(crate) fn push_response_node(&mut self, node: ResponseNode) {
        self.response_nodes.push(node);
    }

    pub(crate) fn last_response_node_mut(&mut self) -> Option<&mut ResponseNode> {
        self.response_nodes.last_mut()
    }

    /// Serializes the flow into the single-flow wire document.
    ///
    /// Fails when the flow owns no message node, since no entry point can be
    /// chosen; this is validated here rather than surfacing as a broken
    /// document downstream.
    pub fn as_json(&self) -> Result<Value, FlowExportError> {
        let entry = self.entry().ok_or_else(|| FlowExportError::NoEntryPoint {
            flow_name: self.name.clone(),
        })?;

        Ok(json!({
            "version": FORMAT_VERSION,
            "flows": [{
                "version": self.version,
                "flow_type": FLOW_TYPE,
                "entry": entry.to_string(),
                "rule_sets": self
                    .response_nodes
                    .iter()
                    .map(ResponseNode::as_json)
                    .collect::<Vec<_>>(),
                "action_sets": self
                    .message_nodes
                    .iter()
                    .map(MessageNode::as_json)
                    .collect::<Vec<_>>(),
                // Engine contract: the exported body always declares "eng",
                // even when the flow was configured with another base language.
                "base_language": super::BASE_LANGUAGE,
            }],
            "metadata": {
                "expires": 0,
                "revision": self.revision,
                "id": self.id,
                "name": self.name,
                "saved_on": self.saved_on.format(SAVED_ON_FORMAT).to_string(),
            },
            "triggers": [],
        }))
    }

    /// The wire document as a JSON string.
    pub fn to_json_string(&self) -> Result<String, FlowExportError> {
        Ok(self.as_json()?.to_string())
    }
}
