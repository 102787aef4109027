// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fired events

use serde::{Deserialize, Serialize};

/// Default payload carried by the bus: an opaque JSON value
pub type Payload = serde_json::Value;

/// An event as recorded by the bus
///
/// Immutable once fired. `sequence` gives a total fire order for a single bus
/// even when two events share a `fired_at_ms`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event<P = Payload> {
    source_id: String,
    name: String,
    payload: P,
    sequence: u64,
    fired_at_ms: u64,
}

impl<P> Event<P> {
    pub(crate) fn new(
        source_id: impl Into<String>,
        name: impl Into<String>,
        payload: P,
        sequence: u64,
        fired_at_ms: u64,
    ) -> Self {
        Self {
            source_id: source_id.into(),
            name: name.into(),
            payload,
            sequence,
            fired_at_ms,
        }
    }

    /// Identifier of whoever fired the event
    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn payload(&self) -> &P {
        &self.payload
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn fired_at_ms(&self) -> u64 {
        self.fired_at_ms
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
