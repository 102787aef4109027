// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::config::BusConfig;
use serde_json::json;
use std::sync::{Arc, Mutex};
use yare::parameterized;

#[parameterized(
    json_object = { "room:1:join::{\"user\":\"alice\"}", "room:1:join", json!({"user": "alice"}) },
    json_number = { "score::42", "score", json!(42) },
    json_string = { "greet::\"hi\"", "greet", json!("hi") },
    raw_text = { "chat::hello there", "chat", json!("hello there") },
    empty_value = { "ping::", "ping", json!("") },
    no_separator = { "ping", "ping", Value::Null },
    extra_separator = { "a::b::c", "a", json!("b::c") },
    single_colons_in_key = { "user:7:typing::true", "user:7:typing", json!(true) },
)]
fn decode_frames(raw: &str, key: &str, value: Value) {
    assert_eq!(Frame::decode(raw).unwrap(), Frame::new(key, value));
}

#[parameterized(
    empty = { "" },
    separator_only = { "::value" },
    blank_key = { "  ::1" },
)]
fn decode_rejects_empty_key(raw: &str) {
    assert_eq!(Frame::decode(raw).unwrap_err(), WireError::EmptyKey);
}

#[parameterized(
    number_text = { json!("42"), json!(42) },
    null_text = { json!("null"), Value::Null },
    bool_text = { json!("true"), json!(true) },
    object_text = { json!("{\"a\":1}"), json!({"a": 1}) },
    plain_text = { json!("hello"), json!("hello") },
    quoted_text = { json!("\"hi\""), json!("hi") },
)]
fn strings_that_read_as_json_change_type_on_round_trip(sent: Value, received: Value) {
    let encoded = Frame::new("k", sent).encode();
    assert_eq!(Frame::decode(&encoded).unwrap(), Frame::new("k", received));
}

#[test]
fn encode_writes_strings_raw_and_values_as_json() {
    assert_eq!(Frame::new("chat", json!("hi")).encode(), "chat::hi");
    assert_eq!(Frame::new("n", json!(3)).encode(), "n::3");
    assert_eq!(
        Frame::new("o", json!({"a": [1, 2]})).encode(),
        "o::{\"a\":[1,2]}"
    );
}

#[test]
fn encoded_structured_values_decode_back() {
    let frame = Frame::new("room:1:state", json!({"open": true, "users": ["a"]}));
    assert_eq!(Frame::decode(&frame.encode()).unwrap(), frame);
}

#[test]
fn bridge_fires_frames_from_the_transport_source() {
    let bus = EventBus::new(BusConfig::history(10));
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    bus.listen("room", "room:*", move |source: &str, payload: &Value, name: &str| {
        sink.lock()
            .unwrap()
            .push((source.to_string(), name.to_string(), payload.clone()));
    })
    .unwrap();

    let bridge = WireBridge::new(bus.clone());
    let seq = bridge.deliver("room:1:join::{\"user\":\"bob\"}").unwrap();

    assert_eq!(seq, 1);
    assert_eq!(
        *seen.lock().unwrap(),
        vec![(
            "websocket".to_string(),
            "room:1:join".to_string(),
            json!({"user": "bob"})
        )]
    );
}

#[test]
fn bridge_rejects_bad_frames_without_firing() {
    let bus = EventBus::new(BusConfig::history(10));
    let bridge = WireBridge::new(bus);

    assert!(bridge.deliver("::oops").is_err());
    assert_eq!(bridge.bus().last_sequence(), 0);
}

#[test]
fn reconnected_is_queued_until_someone_listens() {
    let bus = EventBus::new(BusConfig::queue());
    let bridge = WireBridge::new(bus.clone());
    bridge.reconnected();

    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    bus.listen("ui", RECONNECTED_EVENT, move |source: &str, _: &Value, _: &str| {
        sink.lock().unwrap().push(source.to_string());
    })
    .unwrap();

    assert_eq!(*seen.lock().unwrap(), vec![CONNECTION_SOURCE.to_string()]);
}
