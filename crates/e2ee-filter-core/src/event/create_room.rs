//! createRoom request body.

use serde::{Deserialize, Serialize};

use super::{JsonObject, ENCRYPTION, POWER_LEVELS};

/// Entry of the `initial_state` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitialStateEvent {
    /// Event type (field name is `type` in JSON).
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default)]
    pub state_key: String,
    #[serde(default)]
    pub content: JsonObject,
}

impl InitialStateEvent {
    pub fn is_encryption(&self) -> bool {
        self.event_type == ENCRYPTION
    }

    pub fn is_power_levels(&self) -> bool {
        self.event_type == POWER_LEVELS && self.state_key.is_empty()
    }
}

/// Room-creation request as seen before the room is created.
///
/// Fields the filter does not inspect are kept in `extra` and serialized back
/// unchanged, so a rewritten request is the original minus the rewrites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomCreationRequest {
    /// User asking for the room.
    pub requester: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
    #[serde(default)]
    pub initial_state: Vec<InitialStateEvent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_level_content_override: Option<JsonObject>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl RoomCreationRequest {
    pub fn new(requester: impl Into<String>) -> Self {
        Self {
            requester: requester.into(),
            room_version: None,
            preset: None,
            initial_state: Vec::new(),
            power_level_content_override: None,
            extra: JsonObject::new(),
        }
    }

    /// True if the initial state would switch encryption on.
    pub fn requests_encryption(&self) -> bool {
        self.initial_state.iter().any(InitialStateEvent::is_encryption)
    }

    /// True if the caller supplied power levels in any form.
    pub fn has_power_levels(&self) -> bool {
        self.power_level_content_override.is_some()
            || self.initial_state.iter().any(InitialStateEvent::is_power_levels)
    }
}
