// Copyright (c) 2025 - Cowboy AI, Inc.
//! Event-Sourced Wallet Aggregate
//!
//! - State reconstruction via event folding: [Event] → Wallet
//! - Commands validate, then raise exactly one event
//! - One pure transition function shared by commands and replay
//!
//! # Event Sourcing Pattern
//!
//! ```text
//! Command → Wallet → Event → Event Store
//!    ↓         ↓        ↓
//! Intent  Validation  Facts
//! ```
//!
//! # Example Usage
//!
//! ```rust
//! use cim_wallet::aggregate::Wallet;
//! use cim_wallet::errors::WalletError;
//! use cim_wallet::events::WalletEvent;
//! use cim_wallet::state_machine::Lifecycle;
//!
//! let mut wallet = Wallet::new();
//! wallet.create(12).unwrap();
//! wallet.deposit(100.0).unwrap();
//!
//! assert_eq!(wallet.lose(150.0), Err(WalletError::InsufficientFunds));
//! assert_eq!(wallet.lifecycle(), Lifecycle::Spurious);
//! assert_eq!(wallet.balance(), 100.0);
//! assert_eq!(wallet.pending_changes().last(), Some(&WalletEvent::Spurious { id: 12 }));
//! ```
//!
//! # Concurrency
//!
//! The aggregate is a plain synchronous value. `version()` is the
//! expected-version token handed to the event store on append; conflict
//! detection belongs to the store.

pub mod commands;
pub mod handlers;
pub mod wallet;

pub use commands::WalletCommand;
pub use wallet::{apply_event, ApplyMode, Wallet};
