// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Transport frames republished onto the bus
//!
//! A frame is `key::value`. The value is JSON when it parses as JSON and a
//! plain string otherwise. Only the first `::` separates; later ones belong
//! to the value.

use crate::error::WireError;
use crate::event::Payload;
use crate::events::EventBus;
use serde_json::Value;
use std::fmt;

/// Separator between key and value
pub const SEPARATOR: &str = "::";

/// Source id for events decoded from transport frames
pub const TRANSPORT_SOURCE: &str = "websocket";

/// Source id for connection lifecycle events
pub const CONNECTION_SOURCE: &str = "EventWebSocket";

/// Fired after the transport reconnects
pub const RECONNECTED_EVENT: &str = "ws:reconnected";

/// A decoded transport frame
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub key: String,
    pub value: Value,
}

impl Frame {
    pub fn new(key: impl Into<String>, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    /// Decode `key::value`; a frame without a separator carries `Null`
    pub fn decode(raw: &str) -> Result<Self, WireError> {
        let (key, value) = match raw.split_once(SEPARATOR) {
            Some((key, value)) => (key, Some(value)),
            None => (raw, None),
        };

        if key.trim().is_empty() {
            return Err(WireError::EmptyKey);
        }

        let value = match value {
            Some(text) => {
                serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
            }
            None => Value::Null,
        };

        Ok(Self::new(key, value))
    }

    /// Encode as `key::value`; strings are written raw, everything else as JSON
    ///
    /// Raw strings are not quoted, so a string that reads as JSON decodes as
    /// that JSON: `"42"` comes back as the number 42 and `"null"` as `Null`.
    pub fn encode(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Value::String(s) => write!(f, "{}{}{}", self.key, SEPARATOR, s),
            other => write!(f, "{}{}{}", self.key, SEPARATOR, other),
        }
    }
}

/// Republishes transport traffic on a bus
#[derive(Clone)]
pub struct WireBridge {
    bus: EventBus<Payload>,
}

impl WireBridge {
    pub fn new(bus: EventBus<Payload>) -> Self {
        Self { bus }
    }

    /// Decode a raw frame and fire it as `(websocket, key, value)`
    pub fn deliver(&self, raw: &str) -> Result<u64, WireError> {
        let frame = Frame::decode(raw)?;
        Ok(self.bus.fire(TRANSPORT_SOURCE, &frame.key, frame.value))
    }

    /// Announce a restored connection
    pub fn reconnected(&self) -> u64 {
        tracing::info!("transport reconnected");
        self.bus.fire(CONNECTION_SOURCE, RECONNECTED_EVENT, Value::Null)
    }

    pub fn bus(&self) -> &EventBus<Payload> {
        &self.bus
    }
}

#[cfg(test)]
#[path = "wire_tests.rs"]
mod tests;
