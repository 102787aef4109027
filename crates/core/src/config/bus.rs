// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bus configuration
//!
//! Loaded from the `[bus]` table of a TOML file:
//!
//! ```toml
//! [bus]
//! policy = "history"   # or "queue"
//! capacity = 100       # history only
//! replay = true        # default replay flag for listen
//! ```

use crate::error::ConfigError;
use crate::events::{Backlog, CatchUpQueue, ReplayHistory, DEFAULT_HISTORY_CAPACITY};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Which buffering discipline the bus uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    /// Queue unmatched events until one later listener consumes them
    Queue,
    /// Keep a bounded history replayed to every new listener
    #[default]
    History,
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyKind::Queue => f.write_str("queue"),
            PolicyKind::History => f.write_str("history"),
        }
    }
}

/// Settings fixed when a bus is built
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BusConfig {
    pub policy: PolicyKind,
    /// History capacity; ignored by the queue policy
    pub capacity: usize,
    /// Replay flag used when `listen` does not specify one
    pub replay: bool,
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            policy: PolicyKind::History,
            capacity: DEFAULT_HISTORY_CAPACITY,
            replay: true,
        }
    }
}

/// On-disk layout: everything lives under `[bus]`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub bus: BusConfig,
}

impl BusConfig {
    /// Catch-up queue policy
    pub fn queue() -> Self {
        Self {
            policy: PolicyKind::Queue,
            ..Self::default()
        }
    }

    /// Replay history policy with the given capacity
    pub fn history(capacity: usize) -> Self {
        Self {
            policy: PolicyKind::History,
            capacity,
            ..Self::default()
        }
    }

    pub fn with_replay(mut self, replay: bool) -> Self {
        self.replay = replay;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.policy == PolicyKind::History && self.capacity == 0 {
            return Err(ConfigError::Invalid(
                "history capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse and validate TOML content
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)?;
        file.bus.validate()?;
        Ok(file.bus)
    }

    /// Read, parse and validate a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Build the configured buffering policy
    pub(crate) fn backlog<P: Send + Sync + 'static>(&self) -> Box<dyn Backlog<P>> {
        match self.policy {
            PolicyKind::Queue => Box::new(CatchUpQueue::new()),
            PolicyKind::History => Box::new(ReplayHistory::new(self.capacity)),
        }
    }
}

#[cfg(test)]
#[path = "bus_tests.rs"]
mod tests;
