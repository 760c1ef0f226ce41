//! Power-level content helpers.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use serde_json::json;

use e2ee_filter_core::event::power_levels::{
    default_floor, minimal_content, raise_event_level, required_for_state, users_default,
};
use e2ee_filter_core::event::{JsonObject, ENCRYPTION, POWER_LEVELS};

fn obj(v: serde_json::Value) -> JsonObject {
    v.as_object().unwrap().clone()
}

#[test]
fn required_level_falls_back_to_state_default() {
    let c = obj(json!({ "state_default": 60, "events": { "m.room.name": 10 } }));
    assert_eq!(required_for_state(&c, ENCRYPTION), 60);
    assert_eq!(required_for_state(&c, "m.room.name"), 10);
    assert_eq!(required_for_state(&JsonObject::new(), ENCRYPTION), 50);
}

#[test]
fn string_levels_are_read() {
    let c = obj(json!({ "events": { "m.room.encryption": "75" }, "users_default": "5" }));
    assert_eq!(required_for_state(&c, ENCRYPTION), 75);
    assert_eq!(users_default(&c), 5);
}

#[test]
fn raise_never_lowers() {
    let mut c = obj(json!({ "events": { "m.room.encryption": 100 } }));
    assert!(!raise_event_level(&mut c, ENCRYPTION, 51));
    assert_eq!(c["events"]["m.room.encryption"], json!(100));

    assert!(raise_event_level(&mut c, POWER_LEVELS, 51));
    assert_eq!(c["events"]["m.room.power_levels"], json!(51));
}

#[test]
fn raise_replaces_malformed_events_map() {
    let mut c = obj(json!({ "events": "nope" }));
    assert!(raise_event_level(&mut c, ENCRYPTION, 51));
    assert_eq!(c["events"], json!({ "m.room.encryption": 51 }));
}

#[test]
fn default_floor_is_one_above_state_default() {
    assert_eq!(default_floor(&JsonObject::new()), 51);
    assert_eq!(default_floor(&obj(json!({ "state_default": 70 }))), 71);
}

#[test]
fn minimal_content_is_usable() {
    let c = minimal_content(51);
    assert_eq!(c["ban"], json!(50));
    assert_eq!(c["kick"], json!(50));
    assert_eq!(c["redact"], json!(50));
    assert_eq!(c["events_default"], json!(0));
    assert_eq!(required_for_state(&c, ENCRYPTION), 51);
    assert_eq!(required_for_state(&c, POWER_LEVELS), 51);
}
