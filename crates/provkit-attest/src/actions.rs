//! # Actions Attestation
//!
//! A standalone edit-history list. Rendering reuses
//! [`provkit_manifest::Action::to_json`], so an action looks the same here
//! as it does in the manifest builder's synthesized assertion.

use provkit_manifest::vocab::actions;
use provkit_manifest::{Action, ActionChange, SoftwareAgent};
use serde_json::{Map, Value};

/// The `c2pa.actions` attestation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionsAttestation {
    actions: Vec<Action>,
}

fn labelled(label: &str, agent: Option<SoftwareAgent>, when: Option<String>) -> Action {
    let mut action = Action::new(label);
    action.software_agent = agent;
    action.when = when;
    action
}

impl ActionsAttestation {
    /// An empty actions list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fully configured action.
    pub fn add_action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    /// Append `c2pa.created`.
    pub fn add_created_action(self, agent: Option<SoftwareAgent>, when: Option<String>) -> Self {
        self.add_action(labelled(actions::CREATED, agent, when))
    }

    /// Append an edit, with any described changes.
    pub fn add_edited_action(
        self,
        agent: Option<SoftwareAgent>,
        when: Option<String>,
        changes: Vec<ActionChange>,
    ) -> Self {
        let mut action = labelled(actions::EDITED, agent, when);
        action.changes = changes;
        self.add_action(action)
    }

    /// Append `c2pa.opened`.
    pub fn add_opened_action(self, agent: Option<SoftwareAgent>, when: Option<String>) -> Self {
        self.add_action(labelled(actions::OPENED, agent, when))
    }

    /// Append `c2pa.placed`.
    pub fn add_placed_action(self, agent: Option<SoftwareAgent>, when: Option<String>) -> Self {
        self.add_action(labelled(actions::PLACED, agent, when))
    }

    /// Append `c2pa.drawing`.
    pub fn add_drawing_action(self, agent: Option<SoftwareAgent>, when: Option<String>) -> Self {
        self.add_action(labelled(actions::DRAWING, agent, when))
    }

    /// Append a color adjustment with its scalar parameters.
    pub fn add_color_adjustments_action(
        self,
        agent: Option<SoftwareAgent>,
        when: Option<String>,
        parameters: Map<String, Value>,
    ) -> Self {
        let mut action = labelled(actions::COLOR_ADJUSTMENTS, agent, when);
        action.parameters = parameters;
        self.add_action(action)
    }

    /// Append `c2pa.resized`.
    pub fn add_resized_action(self, agent: Option<SoftwareAgent>, when: Option<String>) -> Self {
        self.add_action(labelled(actions::RESIZED, agent, when))
    }

    /// Actions in insertion order.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Render as `{"actions": [...]}`.
    pub fn to_json(&self) -> Value {
        let mut obj = Map::new();
        obj.insert(
            "actions".into(),
            Value::Array(self.actions.iter().map(Action::to_json).collect()),
        );
        Value::Object(obj)
    }
}
