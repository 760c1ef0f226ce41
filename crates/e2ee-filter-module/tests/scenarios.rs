//! End-to-end scenarios through `PolicyEngine::evaluate`.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use serde_json::json;

use e2ee_filter_core::event::Action;
use e2ee_filter_core::verdict::{DenyReason, Verdict};
use e2ee_filter_module::config;
use e2ee_filter_module::policy::PolicyEngine;

fn engine(yaml: &str) -> PolicyEngine {
    PolicyEngine::new(&config::load_from_str(yaml).unwrap()).unwrap()
}

fn action(v: serde_json::Value) -> Action {
    serde_json::from_value(v).unwrap()
}

#[test]
fn denied_user_creates_unencrypted_room() {
    let e = engine("deny_encryption_for_users_of: [\"example.org\"]\n");
    let a = action(json!({
        "action": "create_room",
        "requester": "@alice:example.org",
        "initial_state": [
            { "type": "m.room.encryption", "state_key": "", "content": { "algorithm": "m.megolm.v1.aes-sha2" } }
        ]
    }));

    let Verdict::AllowRewritten(body) = e.evaluate(a).unwrap() else {
        panic!("expected rewrite");
    };
    assert_eq!(body["initial_state"], json!([]));
    let events = &body["power_level_content_override"]["events"];
    assert_eq!(events["m.room.encryption"], json!(51));
    assert_eq!(events["m.room.power_levels"], json!(51));
}

#[test]
fn creation_already_at_fixed_point_is_plain_allow() {
    let e = engine("deny_encryption_for_users_of: [\"example.org\"]\n");
    let a = action(json!({
        "action": "create_room",
        "requester": "@bob:other.org",
        "power_level_content_override": {
            "events": { "m.room.encryption": 100, "m.room.power_levels": 100 }
        }
    }));
    assert_eq!(e.evaluate(a).unwrap(), Verdict::Allow);
}

#[test]
fn encryption_in_denied_room_origin() {
    let e = engine("deny_encryption_for_rooms_of: [\"example.org\"]\n");
    let a = action(json!({
        "action": "state_event",
        "type": "m.room.encryption",
        "state_key": "",
        "sender": "@bob:other.org",
        "room_id": "!r:example.org",
        "content": { "algorithm": "m.megolm.v1.aes-sha2" }
    }));
    assert_eq!(e.evaluate(a).unwrap(), Verdict::Deny(DenyReason::RoomOrigin));
}

#[test]
fn messages_are_allowed_regardless_of_config() {
    let e = engine(
        "deny_encryption_for_users_of: [\"example.org\"]\ndeny_encryption_for_rooms_of: [\"example.org\"]\n",
    );
    let a = action(json!({
        "action": "state_event",
        "type": "m.room.message",
        "sender": "@alice:example.org",
        "room_id": "!r:example.org",
        "content": { "body": "hello" }
    }));
    assert_eq!(e.evaluate(a).unwrap(), Verdict::Allow);
}

#[test]
fn unknown_action_does_not_parse() {
    let r = serde_json::from_value::<Action>(json!({ "action": "redact", "event_id": "$x:example.org" }));
    assert!(r.is_err());
}
