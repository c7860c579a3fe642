use chrono::{DateTime, Utc};
use serde_json::{Value, json};
use uuid::Uuid;

use super::{NODE_COLUMN_X, localized_text};
use crate::form::BindingDefinition;

/// Category label for the single rule of an unconstrained string field.
const ALL_RESPONSES: &str = "All Responses";

/// Category label for the catch-all rule of a typed field.
const OTHER: &str = "Other";

/// Operand expression referencing the last received value at runtime.
const STEP_VALUE_OPERAND: &str = "@step.value";

/// Node kind tag: every response node waits for an inbound message.
const WAIT_MESSAGE: &str = "wait_message";

/// Maps a declared form type onto the execution engine's test vocabulary.
/// Types without an entry pass through unchanged, so arbitrary declared
/// types still produce an evaluable (if engine-defined) test kind.
fn semantic_type(declared: &str) -> &str {
    match declared {
        "integer" => "number",
        other => other,
    }
}

/// A flow node that waits for an inbound reply and branches via an ordered
/// set of [`Rule`]s.
#[derive(Debug, Clone)]
pub struct ResponseNode {
    uuid: Uuid,
    label: String,
    response_type: String,
    x: i64,
    y: i64,
    rules: Vec<Rule>,
    created_on: DateTime<Utc>,
}

impl ResponseNode {
    /// Builds a response node from a binding record.
    ///
    /// A string-typed binding yields exactly one "All Responses" rule. Any
    /// other type yields two rules: the catch-all "Other" rule followed by
    /// the typed rule, matching the wire order the engine expects.
    pub(crate) fn from_binding(binding: &BindingDefinition, y: i64) -> Self {
        let mut rules = Vec::with_capacity(2);
        if !binding.is_string() {
            rules.push(Rule::catch_all());
        }
        rules.push(Rule::from_binding(binding));

        Self {
            uuid: Uuid::new_v4(),
            label: binding.field_name().to_string(),
            response_type: String::new(),
            x: NODE_COLUMN_X,
            y,
            rules,
            created_on: Utc::now(),
        }
    }

    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn y(&self) -> i64 {
        self.y
    }

    pub fn x(&self) -> i64 {
        self.x
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn created_on(&self) -> DateTime<Utc> {
        self.created_on
    }

    /// The rule eligible for destination wiring: the first rule whose
    /// category is not the catch-all. Every node built from a binding has
    /// exactly one such rule.
    pub fn primary_rule(&self) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.category != OTHER)
    }

    pub(crate) fn primary_rule_mut(&mut self) -> Option<&mut Rule> {
        self.rules.iter_mut().find(|rule| rule.category != OTHER)
    }

    pub fn as_json(&self) -> Value {
        json!({
            "uuid": self.uuid.to_string(),
            "webhook_action": null,
            "webhook": null,
            "ruleset_type": WAIT_MESSAGE,
            "label": self.label,
            "operand": STEP_VALUE_OPERAND,
            "finished_key": null,
            "response_type": self.response_type,
            "config": {},
            "x": self.x,
            "y": self.y,
            "rules": self.rules.iter().map(Rule::as_json).collect::<Vec<_>>(),
        })
    }
}

/// Wire tag for the kind of node a rule destination points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestinationKind {
    /// A rule that matched routes to a message node.
    MessageNode,
}

impl DestinationKind {
    pub fn wire_tag(self) -> &'static str {
        match self {
            DestinationKind::MessageNode => "A",
        }
    }
}

/// One branch inside a [`ResponseNode`], pairing a test predicate with an
/// optional destination. Destinations start unset and are resolved once the
/// next node in the sequence exists; the final node's primary rule stays
/// unset and terminates the flow.
#[derive(Debug, Clone)]
pub struct Rule {
    uuid: Uuid,
    category: String,
    destination: Option<Uuid>,
    destination_kind: Option<DestinationKind>,
    test: RuleTest,
}

impl Rule {
    fn from_binding(binding: &BindingDefinition) -> Self {
        if binding.is_string() {
            Self::new(ALL_RESPONSES, RuleTest::AlwaysTrue)
        } else {
            Self::new(
                binding.field_name(),
                RuleTest::Typed(semantic_type(&binding.declared_type).to_string()),
            )
        }
    }

    fn catch_all() -> Self {
        Self::new(OTHER, RuleTest::AlwaysTrue)
    }

    fn new(category: &str, test: RuleTest) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            category: category.to_string(),
            destination: None,
            destination_kind: None,
            test,
        }
    }

    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn destination(&self) -> Option<Uuid> {
        self.destination
    }

    pub fn destination_kind(&self) -> Option<DestinationKind> {
        self.destination_kind
    }

    pub fn test(&self) -> &RuleTest {
        &self.test
    }

    pub(crate) fn set_destination(&mut self, target: Uuid, kind: DestinationKind) {
        self.destination = Some(target);
        self.destination_kind = Some(kind);
    }

    /// Serializes the rule. Destination keys are only present once the rule
    /// has been wired to a target node.
    pub fn as_json(&self) -> Value {
        let mut body = json!({
            "test": self.test.as_json(),
            "category": localized_text(&self.category),
            "uuid": self.uuid.to_string(),
        });
        if let Some(destination) = self.destination {
            body["destination"] = json!(destination.to_string());
        }
        if let Some(kind) = self.destination_kind {
            body["destination_type"] = json!(kind.wire_tag());
        }
        body
    }
}

/// The predicate evaluated to decide whether a [`Rule`] matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleTest {
    /// Matches any response. Serializes as `{"type": "true", "test": "true"}`
    /// with the explicit literal test expression.
    AlwaysTrue,
    /// Matches when the response parses as the given engine type, e.g.
    /// `"number"`. Serializes as `{"type": <kind>}` with no test key.
    Typed(String),
}

impl RuleTest {
    pub fn as_json(&self) -> Value {
        match self {
            RuleTest::AlwaysTrue => json!({ "type": "true", "test": "true" }),
            RuleTest::Typed(kind) => json!({ "type": kind }),
        }
    }
}
