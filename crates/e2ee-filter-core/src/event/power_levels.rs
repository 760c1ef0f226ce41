//! Reading and raising `m.room.power_levels` content.
//!
//! Levels may be JSON integers or, in older room versions, integer strings.
//! Unreadable values fall back to the protocol defaults.

use serde_json::Value;

use super::{JsonObject, GUARDED_EVENT_TYPES};

pub const DEFAULT_STATE_DEFAULT: i64 = 50;
pub const DEFAULT_EVENTS_DEFAULT: i64 = 0;
pub const DEFAULT_USERS_DEFAULT: i64 = 0;
/// Floor enforced on existing rooms when none is configured.
pub const DEFAULT_FLOOR: i64 = DEFAULT_STATE_DEFAULT + 1;
/// Default for `ban`, `kick` and `redact`.
pub const DEFAULT_MODERATION_LEVEL: i64 = 50;

pub fn parse_level(v: &Value) -> Option<i64> {
    match v {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn level_or(content: &JsonObject, key: &str, default: i64) -> i64 {
    content.get(key).and_then(parse_level).unwrap_or(default)
}

pub fn state_default(content: &JsonObject) -> i64 {
    level_or(content, "state_default", DEFAULT_STATE_DEFAULT)
}

pub fn users_default(content: &JsonObject) -> i64 {
    level_or(content, "users_default", DEFAULT_USERS_DEFAULT)
}

/// Explicit `events[event_type]` level, if set and readable.
pub fn event_level(content: &JsonObject, event_type: &str) -> Option<i64> {
    content
        .get("events")?
        .as_object()?
        .get(event_type)
        .and_then(parse_level)
}

/// Level a user needs to send a state event of `event_type`.
pub fn required_for_state(content: &JsonObject, event_type: &str) -> i64 {
    event_level(content, event_type).unwrap_or_else(|| state_default(content))
}

/// Floor used when none is configured: one above `state_default`.
pub fn default_floor(content: &JsonObject) -> i64 {
    state_default(content).saturating_add(1)
}

/// Raise `events[event_type]` to at least `floor`. Never lowers.
///
/// Returns true if the content changed.
pub fn raise_event_level(content: &mut JsonObject, event_type: &str, floor: i64) -> bool {
    if !matches!(content.get("events"), Some(Value::Object(_))) {
        content.insert("events".to_string(), Value::Object(JsonObject::new()));
    }
    let Some(Value::Object(events)) = content.get_mut("events") else {
        return false;
    };

    match events.get(event_type).and_then(parse_level) {
        Some(level) if level >= floor => false,
        _ => {
            events.insert(event_type.to_string(), Value::from(floor));
            true
        }
    }
}

/// Smallest usable power-levels content with the guarded types at `floor`.
pub fn minimal_content(floor: i64) -> JsonObject {
    let mut events = JsonObject::new();
    for ty in GUARDED_EVENT_TYPES {
        events.insert(ty.to_string(), Value::from(floor));
    }

    let mut content = JsonObject::new();
    content.insert("ban".into(), Value::from(DEFAULT_MODERATION_LEVEL));
    content.insert("kick".into(), Value::from(DEFAULT_MODERATION_LEVEL));
    content.insert("redact".into(), Value::from(DEFAULT_MODERATION_LEVEL));
    content.insert("events_default".into(), Value::from(DEFAULT_EVENTS_DEFAULT));
    content.insert("events".into(), Value::Object(events));
    content
}
