// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wildcard pattern matching for event names
//!
//! Supports:
//!   - Exact: "room:join" matches only "room:join"
//!   - Wildcard: "room:*:join" matches "room:42:join", "room::join", "room:a:b:join"
//!
//! `*` is the only special character. It matches any run of characters,
//! including the empty run and including `:` separators. Matching is anchored
//! to the whole name and case-sensitive. Consecutive `*` behave as one.
//!
//! A wildcard pattern is kept as its literal pieces: the name must start with
//! the first piece, end with the last, and contain the middle pieces in order
//! in between. Matching is linear in the name length per piece and never
//! allocates.

use crate::error::PatternError;
use std::fmt;

/// The wildcard marker
pub const WILDCARD: char = '*';

/// A compiled subscription pattern
#[derive(Clone, Debug)]
pub struct Pattern {
    source: String,
    matcher: Matcher,
}

#[derive(Clone, Debug)]
enum Matcher {
    Exact,
    Glob {
        prefix: String,
        middle: Vec<String>,
        suffix: String,
    },
}

impl Pattern {
    /// Compile a pattern string
    ///
    /// Any string is accepted under the `*` grammar, however long or however
    /// many wildcards it has.
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        let mut pieces: Vec<&str> = pattern.split(WILDCARD).collect();
        if pieces.len() == 1 {
            return Ok(Self {
                source: pattern.to_string(),
                matcher: Matcher::Exact,
            });
        }

        let suffix = pieces.pop().unwrap_or_default().to_string();
        let prefix = pieces.first().copied().unwrap_or_default().to_string();
        // Empty pieces come from runs of `*` and constrain nothing
        let middle = pieces
            .iter()
            .skip(1)
            .filter(|piece| !piece.is_empty())
            .map(|piece| piece.to_string())
            .collect();

        Ok(Self {
            source: pattern.to_string(),
            matcher: Matcher::Glob {
                prefix,
                middle,
                suffix,
            },
        })
    }

    /// Check if this pattern matches an event name
    pub fn matches(&self, name: &str) -> bool {
        match &self.matcher {
            Matcher::Exact => self.source == name,
            Matcher::Glob {
                prefix,
                middle,
                suffix,
            } => glob_matches(name, prefix, middle, suffix),
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self.matcher, Matcher::Glob { .. })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for Pattern {}

fn glob_matches(name: &str, prefix: &str, middle: &[String], suffix: &str) -> bool {
    if name.len() < prefix.len() + suffix.len() {
        return false;
    }
    let Some(rest) = name.strip_prefix(prefix) else {
        return false;
    };
    let Some(mut rest) = rest.strip_suffix(suffix) else {
        return false;
    };

    // Leftmost placement of each piece leaves the most room for the rest
    for piece in middle {
        match rest.find(piece.as_str()) {
            Some(at) => rest = &rest[at + piece.len()..],
            None => return false,
        }
    }
    true
}

/// Does `name` match `pattern`?
///
/// One-shot form of [`Pattern::parse`] + [`Pattern::matches`]. A pattern that
/// fails to compile matches nothing; use [`Pattern::parse`] to see the error.
pub fn matches(name: &str, pattern: &str) -> bool {
    match Pattern::parse(pattern) {
        Ok(compiled) => compiled.matches(name),
        Err(e) => {
            tracing::warn!(pattern, error = %e, "pattern failed to compile");
            false
        }
    }
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
