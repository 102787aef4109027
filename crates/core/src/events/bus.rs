// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event bus routing fired events to matching listeners
//!
//! Delivery is synchronous: `fire` returns once every matching callback has
//! run, in registration order. The internal lock is released before any
//! callback runs, so callbacks may call back into the same bus.
//!
//! A callback that panics is caught, logged, and skipped; the remaining
//! listeners still receive the event. Failed deliveries are not retried.
//!
//! Known limitation: when a callback invoked during replay fires new events,
//! those events are dispatched immediately and interleave with the rest of
//! the replay. The replay itself works from a snapshot taken at registration,
//! so nothing is replayed twice or skipped.

use super::backlog::Backlog;
use super::registry::{Listener, ListenerId, Registry, Subscription};
use crate::clock::{Clock, SystemClock};
use crate::config::{BusConfig, PolicyKind};
use crate::error::Result;
use crate::event::{Event, Payload};
use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, Mutex, MutexGuard};

/// Per-call options for [`EventBus::listen_with`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListenOptions {
    /// Replay buffered events to the new listener; `None` uses the bus default
    pub replay: Option<bool>,
}

impl ListenOptions {
    pub fn replay(replay: bool) -> Self {
        Self {
            replay: Some(replay),
        }
    }
}

struct BusState<P> {
    registry: Registry<P>,
    backlog: Box<dyn Backlog<P>>,
    sequence: u64,
}

/// In-process publish/subscribe bus
///
/// Clones share the same registry and backlog.
pub struct EventBus<P = Payload> {
    state: Arc<Mutex<BusState<P>>>,
    config: BusConfig,
    clock: Arc<dyn Clock>,
}

impl<P: Send + Sync + 'static> EventBus<P> {
    pub fn new(config: BusConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }

    pub fn with_clock(config: BusConfig, clock: impl Clock + 'static) -> Self {
        tracing::debug!(policy = %config.policy, capacity = config.capacity, replay = config.replay, "creating event bus");
        let backlog = config.backlog();
        Self {
            state: Arc::new(Mutex::new(BusState {
                registry: Registry::new(),
                backlog,
                sequence: 0,
            })),
            config,
            clock: Arc::new(clock),
        }
    }

    /// Publish an event to every matching listener
    ///
    /// Returns the sequence number assigned to the event. The buffering
    /// policy records the event before callbacks run, so buffer order always
    /// follows sequence order.
    pub fn fire(&self, source_id: &str, name: &str, payload: P) -> u64 {
        let (event, targets) = {
            let mut state = self.lock();
            state.sequence += 1;
            let event = Arc::new(Event::new(
                source_id,
                name,
                payload,
                state.sequence,
                self.clock.now_ms(),
            ));
            let targets: Vec<Subscription<P>> = state.registry.matching(name).cloned().collect();
            state.backlog.record(Arc::clone(&event), targets.len());
            (event, targets)
        };

        tracing::debug!(
            source = source_id,
            event = name,
            sequence = event.sequence(),
            listeners = targets.len(),
            "fire"
        );

        for sub in &targets {
            invoke(&sub.id, sub.callback.as_ref(), &event);
        }

        event.sequence()
    }

    /// Register a callback using the bus default replay flag
    pub fn listen<F>(&self, listener_id: &str, pattern: &str, callback: F) -> Result<()>
    where
        F: Fn(&str, &P, &str) + Send + Sync + 'static,
    {
        self.listen_with(listener_id, pattern, callback, ListenOptions::default())
    }

    pub fn listen_with<F>(
        &self,
        listener_id: &str,
        pattern: &str,
        callback: F,
        options: ListenOptions,
    ) -> Result<()>
    where
        F: Fn(&str, &P, &str) + Send + Sync + 'static,
    {
        self.attach(listener_id, pattern, Arc::new(callback), options)
    }

    /// Register a [`Listener`] and deliver whatever the buffering policy
    /// hands back for it
    ///
    /// Fails with `InvalidArgument` on blank ids or patterns and with
    /// `MalformedPattern` if the pattern cannot be compiled; nothing is
    /// registered or consumed in either case.
    pub fn attach(
        &self,
        listener_id: &str,
        pattern: &str,
        listener: Arc<dyn Listener<P>>,
        options: ListenOptions,
    ) -> Result<()> {
        let replay = options.replay.unwrap_or(self.config.replay);

        let caught_up = {
            let mut state = self.lock();
            let compiled = state
                .registry
                .add(listener_id, pattern, Arc::clone(&listener))?;
            state.backlog.catch_up(&compiled, replay)
        };

        tracing::debug!(
            listener = listener_id,
            pattern,
            replay,
            backlog = caught_up.len(),
            "listen"
        );

        let id = ListenerId(listener_id.to_string());
        for event in &caught_up {
            tracing::info!(
                listener = listener_id,
                event = event.name(),
                sequence = event.sequence(),
                "caught up on event"
            );
            invoke(&id, listener.as_ref(), event);
        }

        Ok(())
    }

    /// Unregister every subscription with this exact id and pattern
    ///
    /// Returns how many were removed; zero is not an error.
    pub fn ignore(&self, listener_id: &str, pattern: &str) -> Result<usize> {
        let removed = self.lock().registry.remove_all(listener_id, pattern)?;
        tracing::debug!(listener = listener_id, pattern, removed, "ignore");
        Ok(removed)
    }

    /// Drop all subscriptions and buffered events and restart sequencing
    pub fn reset(&self) {
        let mut state = self.lock();
        state.registry.clear();
        state.backlog.clear();
        state.sequence = 0;
        tracing::debug!("event bus reset");
    }

    pub fn subscriber_count(&self) -> usize {
        self.lock().registry.len()
    }

    pub fn listener_ids(&self) -> Vec<ListenerId> {
        self.lock().registry.listener_ids()
    }

    pub fn backlog_len(&self) -> usize {
        self.lock().backlog.len()
    }

    /// Buffered events, oldest first
    pub fn backlog(&self) -> Vec<Arc<Event<P>>> {
        self.lock().backlog.snapshot()
    }

    /// Sequence number of the most recent fire, zero if none
    pub fn last_sequence(&self) -> u64 {
        self.lock().sequence
    }

    pub fn policy(&self) -> PolicyKind {
        self.config.policy
    }

    pub fn config(&self) -> &BusConfig {
        &self.config
    }

    fn lock(&self) -> MutexGuard<'_, BusState<P>> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl<P: Send + Sync + 'static> Default for EventBus<P> {
    fn default() -> Self {
        Self::new(BusConfig::default())
    }
}

impl<P> Clone for EventBus<P> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            config: self.config.clone(),
            clock: Arc::clone(&self.clock),
        }
    }
}

/// Run one callback, containing any panic
fn invoke<P>(listener_id: &ListenerId, callback: &dyn Listener<P>, event: &Event<P>) {
    let outcome = catch_unwind(AssertUnwindSafe(|| {
        callback.on_event(event.source_id(), event.payload(), event.name())
    }));

    if let Err(panic) = outcome {
        tracing::error!(
            listener = %listener_id,
            event = event.name(),
            sequence = event.sequence(),
            panic = panic_message(panic.as_ref()),
            "listener panicked, continuing dispatch"
        );
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.as_str()
    } else {
        "non-string panic payload"
    }
}

#[cfg(test)]
#[path = "bus_tests.rs"]
mod tests;
