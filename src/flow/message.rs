use chrono::{DateTime, Utc};
use serde_json::{Value, json};
use uuid::Uuid;

use super::{NODE_COLUMN_X, localized_text};

/// A flow node that sends one outbound message and then proceeds to exactly
/// one destination: the response node waiting for the answer.
#[derive(Debug, Clone)]
pub struct MessageNode {
    uuid: Uuid,
    x: i64,
    y: i64,
    destination: Option<Uuid>,
    action: Message,
    created_on: DateTime<Utc>,
}

impl MessageNode {
    pub(crate) fn new(text: &str, y: i64) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            x: NODE_COLUMN_X,
            y,
            destination: None,
            action: Message::reply(text),
            created_on: Utc::now(),
        }
    }

    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    pub fn y(&self) -> i64 {
        self.y
    }

    pub fn x(&self) -> i64 {
        self.x
    }

    /// The response node this message hands over to, once wired.
    pub fn destination(&self) -> Option<Uuid> {
        self.destination
    }

    pub fn action(&self) -> &Message {
        &self.action
    }

    pub fn created_on(&self) -> DateTime<Utc> {
        self.created_on
    }

    /// A message node always hands over to a response node, so no
    /// destination-kind tag is stored or serialized here.
    pub(crate) fn set_destination(&mut self, response_node: Uuid) {
        self.destination = Some(response_node);
    }

    /// Serializes the node into its wire shape. The destination key is
    /// omitted entirely while the node is still unwired.
    pub fn as_json(&self) -> Value {
        let mut body = json!({
            "y": self.y,
            "x": self.x,
            "uuid": self.uuid.to_string(),
            "actions": [self.action.as_json()],
        });
        if let Some(destination) = self.destination {
            body["destination"] = json!(destination.to_string());
        }
        body
    }
}

/// The single outbound action owned by a [`MessageNode`]: reply with a text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    text: String,
}

impl Message {
    pub fn reply(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn as_json(&self) -> Value {
        json!({
            "msg": localized_text(&self.text),
            "type": "reply",
        })
    }
}
