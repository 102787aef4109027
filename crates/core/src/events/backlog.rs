// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Buffering policies for events fired before a listener registered
//!
//! Two disciplines, picked when the bus is built:
//! - [`CatchUpQueue`] keeps events nobody received and hands each one to the
//!   first later listener that matches it
//! - [`ReplayHistory`] keeps the last N events and replays matching ones to
//!   every new listener without consuming them

use super::pattern::Pattern;
use crate::event::Event;
use std::collections::VecDeque;
use std::sync::Arc;

/// Default history capacity
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// Post-fire bookkeeping and catch-up for new listeners
pub trait Backlog<P>: Send {
    /// Record a fired event; `delivered` is how many listeners matched it
    fn record(&mut self, event: Arc<Event<P>>, delivered: usize);

    /// Events to hand to a listener that just registered `pattern`,
    /// in delivery order
    fn catch_up(&mut self, pattern: &Pattern, replay: bool) -> Vec<Arc<Event<P>>>;

    /// Buffered events, oldest first
    fn snapshot(&self) -> Vec<Arc<Event<P>>>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&mut self);
}

/// Queue of events that had no listener when fired
///
/// An event leaves the queue the first time a new registration matches it.
pub struct CatchUpQueue<P> {
    pending: Vec<Arc<Event<P>>>,
}

impl<P> CatchUpQueue<P> {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }
}

impl<P> Default for CatchUpQueue<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Send + Sync> Backlog<P> for CatchUpQueue<P> {
    fn record(&mut self, event: Arc<Event<P>>, delivered: usize) {
        if delivered == 0 {
            tracing::debug!(
                event = event.name(),
                sequence = event.sequence(),
                "queued unmatched event"
            );
            self.pending.push(event);
        }
    }

    /// Newest first. The replay flag has no effect: draining is the policy.
    fn catch_up(&mut self, pattern: &Pattern, _replay: bool) -> Vec<Arc<Event<P>>> {
        let mut drained = Vec::new();
        let mut i = self.pending.len();
        while i > 0 {
            i -= 1;
            if pattern.matches(self.pending[i].name()) {
                drained.push(self.pending.remove(i));
            }
        }
        drained
    }

    fn snapshot(&self) -> Vec<Arc<Event<P>>> {
        self.pending.clone()
    }

    fn len(&self) -> usize {
        self.pending.len()
    }

    fn clear(&mut self) {
        self.pending.clear();
    }
}

/// Ring buffer of the most recent events
pub struct ReplayHistory<P> {
    capacity: usize,
    events: VecDeque<Arc<Event<P>>>,
}

impl<P> ReplayHistory<P> {
    /// `capacity` below one is raised to one
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            events: VecDeque::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<P> Default for ReplayHistory<P> {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl<P: Send + Sync> Backlog<P> for ReplayHistory<P> {
    fn record(&mut self, event: Arc<Event<P>>, _delivered: usize) {
        if self.events.len() >= self.capacity {
            if let Some(evicted) = self.events.pop_front() {
                tracing::trace!(sequence = evicted.sequence(), "evicted from history");
            }
        }
        self.events.push_back(event);
    }

    /// Oldest first, non-destructive
    fn catch_up(&mut self, pattern: &Pattern, replay: bool) -> Vec<Arc<Event<P>>> {
        if !replay {
            return Vec::new();
        }
        self.events
            .iter()
            .filter(|e| pattern.matches(e.name()))
            .cloned()
            .collect()
    }

    fn snapshot(&self) -> Vec<Arc<Event<P>>> {
        self.events.iter().cloned().collect()
    }

    fn len(&self) -> usize {
        self.events.len()
    }

    fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
#[path = "backlog_tests.rs"]
mod tests;
