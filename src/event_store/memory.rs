// Copyright (c) 2025 - Cowboy AI, Inc.
//! In-Memory Event Store
//!
//! Keeps one ordered stream per wallet behind a single `RwLock`. The
//! version check and the write happen under the same write guard, which
//! makes `append` a compare-and-append: of several writers holding the
//! same expected version, exactly one succeeds.
//!
//! Intended for tests, local development, and as the reference for the
//! semantics a durable backend must provide.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::errors::{EventStoreError, EventStoreResult};
use crate::event_store::{EventStore, StoredEvent};
use crate::events::{WalletEvent, WalletId};

type Streams = HashMap<WalletId, Vec<StoredEvent<WalletEvent>>>;

/// In-memory event store
///
/// Cloning shares the underlying streams.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEventStore {
    streams: Arc<RwLock<Streams>>,
}

impl InMemoryEventStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of wallet streams with at least one event
    pub async fn stream_count(&self) -> usize {
        self.streams.read().await.len()
    }
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn append(
        &self,
        wallet_id: WalletId,
        expected_version: u64,
        events: Vec<WalletEvent>,
    ) -> EventStoreResult<u64> {
        let mut streams = self.streams.write().await;

        let actual = streams.get(&wallet_id).map_or(0, |s| s.len() as u64);
        if actual != expected_version {
            warn!(
                wallet_id,
                expected = expected_version,
                actual,
                "Rejected append on stale version"
            );
            return Err(EventStoreError::VersionConflict {
                wallet_id,
                expected: expected_version,
                actual,
            });
        }

        if events.is_empty() {
            return Ok(actual);
        }

        let count = events.len();
        let stream = streams.entry(wallet_id).or_default();
        for (offset, event) in events.into_iter().enumerate() {
            stream.push(StoredEvent::record(wallet_id, actual + offset as u64 + 1, event));
        }
        let version = stream.len() as u64;

        debug!(wallet_id, count, version, "Appended events");
        Ok(version)
    }

    async fn load(&self, wallet_id: WalletId) -> EventStoreResult<Vec<StoredEvent<WalletEvent>>> {
        let streams = self.streams.read().await;

        match streams.get(&wallet_id) {
            Some(stream) if !stream.is_empty() => Ok(stream.clone()),
            _ => Err(EventStoreError::NotFound(wallet_id)),
        }
    }

    async fn load_from(
        &self,
        wallet_id: WalletId,
        from_version: u64,
    ) -> EventStoreResult<Vec<StoredEvent<WalletEvent>>> {
        let streams = self.streams.read().await;

        Ok(streams
            .get(&wallet_id)
            .map(|stream| {
                stream
                    .iter()
                    .filter(|stored| stored.sequence > from_version)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn version(&self, wallet_id: WalletId) -> EventStoreResult<u64> {
        let streams = self.streams.read().await;
        Ok(streams.get(&wallet_id).map_or(0, |s| s.len() as u64))
    }
}
