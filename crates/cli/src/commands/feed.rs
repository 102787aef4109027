// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `tidings feed [input]` - Fire transport frames through a bus
//!
//! Listeners given with `--listen` are registered before any frame is fired;
//! listeners given with `--late` are registered afterwards, so they only see
//! what the buffering policy kept for them.

use crate::output::{self, Delivery, OutputFormat};
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use serde_json::Value;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use tidings_core::{BusConfig, EventBus, PolicyKind, WireBridge};

#[derive(Args)]
pub struct FeedArgs {
    /// File of `key::value` frames, one per line (`-` or omitted reads stdin)
    pub input: Option<PathBuf>,

    /// TOML file with a `[bus]` table
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Buffering policy, overrides the config file
    #[arg(long, value_enum)]
    pub policy: Option<PolicyArg>,

    /// History capacity, overrides the config file
    #[arg(long)]
    pub capacity: Option<usize>,

    /// Do not replay history to listeners by default
    #[arg(long)]
    pub no_replay: bool,

    /// Listener registered before feeding, as ID=PATTERN
    #[arg(long = "listen", value_parser = parse_listener)]
    pub listen: Vec<ListenerSpec>,

    /// Listener registered after feeding, as ID=PATTERN
    #[arg(long = "late", value_parser = parse_listener)]
    pub late: Vec<ListenerSpec>,

    /// Output format for deliveries
    #[arg(long, value_enum, default_value = "json")]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PolicyArg {
    Queue,
    History,
}

impl From<PolicyArg> for PolicyKind {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Queue => PolicyKind::Queue,
            PolicyArg::History => PolicyKind::History,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ListenerSpec {
    pub id: String,
    pub pattern: String,
}

fn parse_listener(s: &str) -> Result<ListenerSpec, String> {
    let (id, pattern) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid ID=PATTERN: no '=' found in '{}'", s))?;
    Ok(ListenerSpec {
        id: id.to_string(),
        pattern: pattern.to_string(),
    })
}

pub fn feed(args: FeedArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    let bus: EventBus = EventBus::new(config);
    let bridge = WireBridge::new(bus.clone());

    for entry in &args.listen {
        register(&bus, entry, args.format)?;
    }

    let reader = open_input(args.input.as_deref())?;
    let mut fired = 0usize;
    for (index, bytes) in reader.split(b'\n').enumerate() {
        let bytes = bytes.context("failed to read input")?;
        let line = match String::from_utf8(bytes) {
            Ok(line) => line,
            Err(e) => {
                eprintln!("line {}: skipped: {}", index + 1, e.utf8_error());
                continue;
            }
        };
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        match bridge.deliver(line) {
            Ok(_) => fired += 1,
            Err(e) => eprintln!("line {}: skipped: {}", index + 1, e),
        }
    }

    for entry in &args.late {
        register(&bus, entry, args.format)?;
    }

    eprintln!(
        "fired {} events, {} left in {} backlog",
        fired,
        bus.backlog_len(),
        bus.policy()
    );

    Ok(())
}

fn resolve_config(args: &FeedArgs) -> Result<BusConfig> {
    let mut config = match &args.config {
        Some(path) => BusConfig::load(path)?,
        None => BusConfig::default(),
    };

    if let Some(policy) = args.policy {
        config.policy = policy.into();
    }
    if let Some(capacity) = args.capacity {
        config.capacity = capacity;
    }
    if args.no_replay {
        config.replay = false;
    }

    config.validate()?;
    Ok(config)
}

fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match path {
        None => Ok(Box::new(BufReader::new(io::stdin()))),
        Some(p) if p == Path::new("-") => Ok(Box::new(BufReader::new(io::stdin()))),
        Some(p) => {
            let file =
                File::open(p).with_context(|| format!("failed to open {}", p.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
    }
}

fn register(bus: &EventBus, entry: &ListenerSpec, format: OutputFormat) -> Result<()> {
    let listener = entry.id.clone();
    bus.listen(
        &entry.id,
        &entry.pattern,
        move |source: &str, payload: &Value, name: &str| {
            let delivery = Delivery {
                listener: &listener,
                source,
                event: name,
                payload,
            };
            output::print(&delivery, format);
        },
    )
    .with_context(|| format!("cannot listen as {}={}", entry.id, entry.pattern))
}

#[cfg(test)]
#[path = "feed_tests.rs"]
mod tests;
