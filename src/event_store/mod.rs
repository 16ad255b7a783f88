// Copyright (c) 2025 - Cowboy AI, Inc.
//! Event Store Abstraction
//!
//! Interface for persisting and retrieving wallet events.
//!
//! # Architecture
//!
//! ```text
//! Command → Wallet → Events → EventStore → Storage
//! ```
//!
//! # Event Store Requirements
//!
//! 1. **Append-Only**: Events are never updated or deleted
//! 2. **Ordered**: Events keep their sequence within a wallet stream
//! 3. **Compare-and-Append**: An append names the version it was computed
//!    against; only one writer per expected version wins
//!
//! # Example
//!
//! ```rust
//! use cim_wallet::aggregate::Wallet;
//! use cim_wallet::event_store::{EventStore, InMemoryEventStore};
//!
//! # tokio_test::block_on(async {
//! let store = InMemoryEventStore::new();
//!
//! let mut wallet = Wallet::new();
//! wallet.create(12).unwrap();
//! wallet.deposit(100.0).unwrap();
//! let version = store
//!     .append(12, wallet.version(), wallet.pending_changes().to_vec())
//!     .await
//!     .unwrap();
//! assert_eq!(version, 2);
//!
//! let history = store.load(12).await.unwrap();
//! let wallet = Wallet::from_stored(&history);
//! assert_eq!(wallet.balance(), 100.0);
//! assert_eq!(wallet.version(), 2);
//! # });
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::EventStoreResult;
use crate::events::{WalletEvent, WalletId};

pub mod memory;

pub use memory::InMemoryEventStore;

/// Event Store trait for persisting and retrieving wallet events
///
/// Implementations must make `append` atomic: either every event is
/// written at consecutive sequences after `expected_version`, or none is.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Append events to a wallet stream
    ///
    /// # Arguments
    ///
    /// * `wallet_id` - Stream to append to
    /// * `expected_version` - Version the events were computed against
    /// * `events` - Events to append, in order
    ///
    /// # Returns
    ///
    /// The stream version after appending
    ///
    /// # Errors
    ///
    /// - `VersionConflict` if `expected_version` is not the current version
    /// - `Storage` if the backend fails
    async fn append(
        &self,
        wallet_id: WalletId,
        expected_version: u64,
        events: Vec<WalletEvent>,
    ) -> EventStoreResult<u64>;

    /// Read the full history of a wallet, in sequence order
    ///
    /// # Errors
    ///
    /// - `NotFound` if the stream has no events
    async fn load(&self, wallet_id: WalletId) -> EventStoreResult<Vec<StoredEvent<WalletEvent>>>;

    /// Read events with a sequence greater than `from_version`
    async fn load_from(
        &self,
        wallet_id: WalletId,
        from_version: u64,
    ) -> EventStoreResult<Vec<StoredEvent<WalletEvent>>>;

    /// Current stream version, 0 for an unknown wallet
    async fn version(&self, wallet_id: WalletId) -> EventStoreResult<u64>;
}

/// Stored event envelope
///
/// Wraps a domain event with its position in the stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredEvent<E> {
    /// Unique event ID (UUID v7 for time-ordering)
    pub event_id: Uuid,

    /// Wallet stream this event belongs to
    pub wallet_id: WalletId,

    /// 1-based sequence number within the stream
    pub sequence: u64,

    /// When the store accepted the event
    pub recorded_at: DateTime<Utc>,

    /// Event type name
    pub event_type: String,

    /// The domain event
    pub data: E,
}

impl<E> StoredEvent<E> {
    /// Create a new stored event envelope
    pub fn new(
        event_id: Uuid,
        wallet_id: WalletId,
        sequence: u64,
        recorded_at: DateTime<Utc>,
        event_type: impl Into<String>,
        data: E,
    ) -> Self {
        Self {
            event_id,
            wallet_id,
            sequence,
            recorded_at,
            event_type: event_type.into(),
            data,
        }
    }
}

impl StoredEvent<WalletEvent> {
    /// Envelope a wallet event at `sequence`, stamped now
    pub fn record(wallet_id: WalletId, sequence: u64, event: WalletEvent) -> Self {
        let event_type = event.event_type();
        Self::new(Uuid::now_v7(), wallet_id, sequence, Utc::now(), event_type, event)
    }
}
