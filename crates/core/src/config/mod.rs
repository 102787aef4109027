// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration modules

mod bus;

pub use bus::{BusConfig, ConfigFile, PolicyKind};
