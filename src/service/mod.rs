// Copyright (c) 2025 - Cowboy AI, Inc.
//! Service Layer for Wallet Management
//!
//! Orchestrates one load → command → append cycle per request.
//!
//! # Architecture
//!
//! ```text
//! Client Request
//!     ↓
//! Service Layer (this module)
//!     ↓
//! Wallet (reconstituted) → Command → Pending events
//!     ↓
//! Event Store (compare-and-append on wallet version)
//! ```
//!
//! A version conflict means another writer appended first. The service
//! reloads the wallet and re-runs the same command, up to the configured
//! retry budget.
//!
//! # Example
//!
//! ```rust
//! use cim_wallet::event_store::InMemoryEventStore;
//! use cim_wallet::service::{EventSourcedWalletService, WalletService};
//!
//! # tokio_test::block_on(async {
//! let service = EventSourcedWalletService::new(InMemoryEventStore::new());
//!
//! service.open(12).await.unwrap();
//! service.deposit(12, 100.0).await.unwrap();
//!
//! assert_eq!(service.balance(12).await.unwrap(), 100.0);
//! # });
//! ```

pub mod wallet;

pub use wallet::{EventSourcedWalletService, ServiceError, ServiceResult, WalletService};
