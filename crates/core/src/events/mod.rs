// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Events system for loose coupling between producers and listeners
//!
//! This module provides:
//! - `EventBus` - Synchronous delivery of fired events to matching listeners
//! - `Registry` - Registration-ordered subscriptions
//! - `Backlog` - Catch-up queue or replay history for late listeners
//! - `Pattern` - Wildcard pattern matching for event names

mod backlog;
mod bus;
mod pattern;
mod registry;

pub use backlog::{Backlog, CatchUpQueue, ReplayHistory, DEFAULT_HISTORY_CAPACITY};
pub use bus::{EventBus, ListenOptions};
pub use pattern::{matches, Pattern, WILDCARD};
pub use registry::{validate_ids, Listener, ListenerId, Registry, Subscription};
