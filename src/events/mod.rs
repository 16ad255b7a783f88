// Copyright (c) 2025 - Cowboy AI, Inc.
//! Wallet Domain Events
//!
//! Events are the source of truth for a wallet. Current state is never
//! stored; it is derived by folding the event history.
//!
//! # Event Flow
//!
//! ```text
//! Command → Wallet → Event → EventStore
//!  (intent) (validate) (fact)   (persist)
//! ```
//!
//! Encoding for storage is serde JSON with an internal `type` tag. How the
//! events are laid out on disk or on the wire is the event store's concern.

pub mod wallet;

pub use wallet::{Amount, WalletEvent, WalletId};
