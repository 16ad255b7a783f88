// Copyright (c) 2025 - Cowboy AI, Inc.
//! Wallet Replay Tool
//!
//! Reconstitutes a wallet from a JSON event history and prints its state.
//!
//! Run with: cargo run --bin wallet-replay -- history.json
//!
//! The input is a JSON array of events, e.g.
//! `[{"type":"created","id":12},{"type":"deposited","id":12,"amount":100.0}]`.
//! Use `-` to read from stdin.

use std::io::Read;

use anyhow::{bail, Context, Result};
use cim_wallet::{Wallet, WalletEvent};
use serde::Serialize;
use tracing::{debug, info};

/// Printed summary of a reconstituted wallet
#[derive(Debug, Serialize)]
struct WalletSummary {
    id: i64,
    balance: f64,
    lifecycle: cim_wallet::Lifecycle,
    version: u64,
}

fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read history from stdin")?;
        return Ok(buf);
    }

    std::fs::read_to_string(path).with_context(|| format!("Failed to read history file {path}"))
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        bail!("usage: wallet-replay <history.json | ->");
    };

    let raw = read_input(&path)?;
    let events: Vec<WalletEvent> =
        serde_json::from_str(&raw).context("History is not a JSON array of wallet events")?;
    info!(path = %path, events = events.len(), "Loaded history");

    for (index, event) in events.iter().enumerate() {
        debug!(sequence = index + 1, %event, "Replaying");
    }

    let wallet = Wallet::from_history(&events);
    let summary = WalletSummary {
        id: wallet.id(),
        balance: wallet.balance(),
        lifecycle: wallet.lifecycle(),
        version: wallet.version(),
    };

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
