// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! tidings - drive an in-process event bus from the command line

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{feed, pattern};

#[derive(Parser)]
#[command(
    name = "tidings",
    version,
    about = "Tidings - feed transport frames through an in-process event bus"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fire `key::value` frames through a bus and print every delivery
    Feed(feed::FeedArgs),
    /// Check event names against a subscription pattern
    Match(pattern::MatchArgs),
}

fn main() -> Result<()> {
    setup_logging();

    let cli = Cli::parse();
    match cli.command {
        Commands::Feed(args) => feed::feed(args),
        Commands::Match(args) => pattern::check(args),
    }
}

/// Log to stderr so stdout carries only deliveries
fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
