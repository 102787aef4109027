// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! tidings-core: in-process publish/subscribe event bus
//!
//! This crate provides:
//! - Wildcard pattern matching for event names
//! - A registration-ordered subscription registry
//! - Two buffering policies for late listeners (catch-up queue, replay history)
//! - The `EventBus` facade tying them together
//! - `key::value` transport frames republished onto a bus

pub mod clock;
pub mod config;
pub mod error;
pub mod event;
pub mod events;
pub mod wire;

// Re-exports
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{BusConfig, PolicyKind};
pub use error::{BusError, ConfigError, PatternError, Result, WireError};
pub use event::{Event, Payload};
pub use events::{
    matches, Backlog, CatchUpQueue, EventBus, ListenOptions, Listener, ListenerId, Pattern,
    ReplayHistory,
};
pub use wire::{Frame, WireBridge};
