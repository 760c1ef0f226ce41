//! Proposed state event.

use serde::{Deserialize, Serialize};

use super::JsonObject;

/// A state event about to be persisted, plus the room context the host
/// resolves for it. Never mutated by the filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateEventProposal {
    /// Event type (field name is `type` in JSON).
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_key: Option<String>,
    pub sender: String,
    pub room_id: String,
    #[serde(default)]
    pub content: JsonObject,
    /// Content of the room's current `m.room.power_levels`, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prior_power_levels: Option<JsonObject>,
    /// Creator of the room, from its create event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_creator: Option<String>,
}

impl StateEventProposal {
    pub fn new(
        event_type: impl Into<String>,
        sender: impl Into<String>,
        room_id: impl Into<String>,
    ) -> Self {
        Self {
            event_type: event_type.into(),
            state_key: Some(String::new()),
            sender: sender.into(),
            room_id: room_id.into(),
            content: JsonObject::new(),
            prior_power_levels: None,
            room_creator: None,
        }
    }

    pub fn with_content(mut self, content: JsonObject) -> Self {
        self.content = content;
        self
    }

    pub fn with_prior_power_levels(mut self, prior: JsonObject) -> Self {
        self.prior_power_levels = Some(prior);
        self
    }

    pub fn with_room_creator(mut self, creator: impl Into<String>) -> Self {
        self.room_creator = Some(creator.into());
        self
    }
}
