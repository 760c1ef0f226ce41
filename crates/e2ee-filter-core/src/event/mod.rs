//! Event and request shapes inspected by the filter.
//!
//! - `create_room`: the client createRoom body, rewritten before the room exists.
//! - `state`: a proposed state event, read-only to the filter.
//! - `power_levels`: helpers over `m.room.power_levels` content.

pub mod create_room;
pub mod power_levels;
pub mod state;

use serde::{Deserialize, Serialize};

pub use create_room::{InitialStateEvent, RoomCreationRequest};
pub use state::StateEventProposal;

/// JSON object as carried in event content.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

/// Event type that turns on end-to-end encryption for a room.
pub const ENCRYPTION: &str = "m.room.encryption";
/// Event type carrying the room's power levels.
pub const POWER_LEVELS: &str = "m.room.power_levels";

/// State event types whose send threshold is held at the power-level floor.
pub const GUARDED_EVENT_TYPES: [&str; 2] = [ENCRYPTION, POWER_LEVELS];

/// One unit of work for the policy engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    CreateRoom(RoomCreationRequest),
    StateEvent(StateEventProposal),
}
