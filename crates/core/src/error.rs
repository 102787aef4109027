// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the event bus

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised synchronously by `listen` and `ignore`
#[derive(Debug, Error)]
pub enum BusError {
    #[error("invalid {field}: {reason}")]
    InvalidArgument { field: &'static str, reason: String },
    #[error(transparent)]
    MalformedPattern(#[from] PatternError),
}

/// A wildcard pattern that could not be turned into a matcher
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("malformed pattern {pattern:?}: {reason}")]
    Malformed { pattern: String, reason: String },
}

/// Errors decoding a transport frame
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WireError {
    #[error("frame has an empty key")]
    EmptyKey,
}

/// Errors loading bus configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

pub type Result<T, E = BusError> = std::result::Result<T, E>;
