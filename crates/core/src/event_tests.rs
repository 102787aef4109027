// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serde_json::json;

#[test]
fn accessors_expose_fired_fields() {
    let event = Event::new("sys", "boot", json!({"ok": true}), 3, 1_000);
    assert_eq!(event.source_id(), "sys");
    assert_eq!(event.name(), "boot");
    assert_eq!(event.payload(), &json!({"ok": true}));
    assert_eq!(event.sequence(), 3);
    assert_eq!(event.fired_at_ms(), 1_000);
}

#[test]
fn serializes_with_flat_fields() {
    let event = Event::new("websocket", "room:1:join", json!("alice"), 1, 5);
    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(
        value,
        json!({
            "source_id": "websocket",
            "name": "room:1:join",
            "payload": "alice",
            "sequence": 1,
            "fired_at_ms": 5,
        })
    );
}

#[test]
fn payload_type_is_generic() {
    let event: Event<u32> = Event::new("counter", "tick", 9, 1, 0);
    assert_eq!(*event.payload(), 9);
}
