// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subscription registry
//!
//! An ordered list of (listener id, pattern, callback) entries. Entries are
//! never merged or mutated in place: `add` appends, `remove_all` drops every
//! entry with the same id and pattern text.

use super::pattern::Pattern;
use crate::error::{BusError, Result};
use std::fmt;
use std::sync::Arc;

/// Callback invoked for every delivered event
///
/// Arguments are `(source_id, payload, event_name)`. Closures of that shape
/// implement this trait.
pub trait Listener<P>: Send + Sync {
    fn on_event(&self, source_id: &str, payload: &P, name: &str);
}

impl<P, F> Listener<P> for F
where
    F: Fn(&str, &P, &str) + Send + Sync,
{
    fn on_event(&self, source_id: &str, payload: &P, name: &str) {
        self(source_id, payload, name)
    }
}

/// Identifier of a listener; not required to be unique
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(pub String);

impl ListenerId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A registered callback
pub struct Subscription<P> {
    pub id: ListenerId,
    pub pattern: Pattern,
    pub callback: Arc<dyn Listener<P>>,
}

impl<P> Subscription<P> {
    pub fn matches(&self, name: &str) -> bool {
        self.pattern.matches(name)
    }
}

impl<P> Clone for Subscription<P> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            pattern: self.pattern.clone(),
            callback: Arc::clone(&self.callback),
        }
    }
}

impl<P> fmt::Debug for Subscription<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("pattern", &self.pattern.as_str())
            .finish_non_exhaustive()
    }
}

/// Reject blank listener ids and patterns
pub fn validate_ids(listener_id: &str, pattern: &str) -> Result<()> {
    if listener_id.trim().is_empty() {
        return Err(BusError::InvalidArgument {
            field: "listener id",
            reason: "must be a non-empty string".to_string(),
        });
    }
    if pattern.trim().is_empty() {
        return Err(BusError::InvalidArgument {
            field: "event pattern",
            reason: "must be a non-empty string".to_string(),
        });
    }
    Ok(())
}

/// Registration-ordered subscriptions
pub struct Registry<P> {
    entries: Vec<Subscription<P>>,
}

impl<P> Registry<P> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Validate, compile and append a subscription
    ///
    /// Returns the compiled pattern so callers can reuse it for catch-up.
    pub fn add(
        &mut self,
        listener_id: &str,
        pattern: &str,
        callback: Arc<dyn Listener<P>>,
    ) -> Result<Pattern> {
        validate_ids(listener_id, pattern)?;
        let pattern = Pattern::parse(pattern)?;

        self.entries.push(Subscription {
            id: ListenerId(listener_id.to_string()),
            pattern: pattern.clone(),
            callback,
        });

        Ok(pattern)
    }

    /// Drop every entry whose id and pattern text both match
    pub fn remove_all(&mut self, listener_id: &str, pattern: &str) -> Result<usize> {
        validate_ids(listener_id, pattern)?;

        let before = self.entries.len();
        self.entries
            .retain(|s| !(s.id.as_str() == listener_id && s.pattern.as_str() == pattern));
        Ok(before - self.entries.len())
    }

    /// Subscriptions matching `name`, in registration order
    pub fn matching<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Subscription<P>> {
        self.entries.iter().filter(move |s| s.matches(name))
    }

    /// Distinct listener ids in first-registration order
    pub fn listener_ids(&self) -> Vec<ListenerId> {
        let mut ids: Vec<ListenerId> = Vec::new();
        for entry in &self.entries {
            if !ids.contains(&entry.id) {
                ids.push(entry.id.clone());
            }
        }
        ids
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<P> Default for Registry<P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
