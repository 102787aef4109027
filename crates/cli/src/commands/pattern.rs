// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `tidings match <pattern> <name>...` - Try a pattern against event names

use anyhow::Result;
use clap::Args;
use tidings_core::Pattern;

#[derive(Args)]
pub struct MatchArgs {
    /// Subscription pattern; `*` matches any run of characters
    pub pattern: String,

    /// Event names to test
    #[arg(required = true)]
    pub names: Vec<String>,
}

pub fn check(args: MatchArgs) -> Result<()> {
    let pattern = Pattern::parse(&args.pattern)?;

    for name in &args.names {
        let verdict = if pattern.matches(name) {
            "match"
        } else {
            "no match"
        };
        println!("{}: {}", name, verdict);
    }

    Ok(())
}
