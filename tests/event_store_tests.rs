// Copyright (c) 2025 - Cowboy AI, Inc.
//! Event Store Integration Tests
//!
//! Exercises the in-memory store together with the aggregate:
//! load → reconstitute → command → append with the wallet version.

mod fixtures;

use cim_wallet::{EventStore, EventStoreError, InMemoryEventStore, Wallet, WalletEvent};
use futures::future::join_all;

use fixtures::{mixed_history, WALLET_ID};

#[tokio::test]
async fn test_load_mutate_persist_cycle() {
    let store = InMemoryEventStore::new();

    let mut wallet = Wallet::new();
    wallet.create(WALLET_ID).unwrap();
    wallet.deposit(100.0).unwrap();
    let version = store
        .append(WALLET_ID, wallet.version(), wallet.pending_changes().to_vec())
        .await
        .unwrap();
    assert_eq!(version, 2);

    let mut wallet = Wallet::from_stored(&store.load(WALLET_ID).await.unwrap());
    assert_eq!(wallet.version(), 2);
    wallet.reserve(40.0).unwrap();
    let version = store
        .append(WALLET_ID, wallet.version(), wallet.pending_changes().to_vec())
        .await
        .unwrap();
    assert_eq!(version, 3);

    let wallet = Wallet::from_stored(&store.load(WALLET_ID).await.unwrap());
    assert_eq!(wallet.balance(), 60.0);
    assert_eq!(wallet.version(), 3);
}

#[tokio::test]
async fn test_stale_writer_loses() {
    let store = InMemoryEventStore::new();
    store.append(WALLET_ID, 0, mixed_history()).await.unwrap();

    let history = store.load(WALLET_ID).await.unwrap();
    let mut first = Wallet::from_stored(&history);
    let mut second = Wallet::from_stored(&history);

    first.withdraw(75.0).unwrap();
    second.withdraw(75.0).unwrap();

    store
        .append(WALLET_ID, first.version(), first.pending_changes().to_vec())
        .await
        .unwrap();
    let err = store
        .append(WALLET_ID, second.version(), second.pending_changes().to_vec())
        .await
        .unwrap_err();

    assert!(err.is_retryable());
    assert!(matches!(
        err,
        EventStoreError::VersionConflict { expected: 6, actual: 7, .. }
    ));

    // The reloaded wallet refuses the second withdrawal outright
    let mut reloaded = Wallet::from_stored(&store.load(WALLET_ID).await.unwrap());
    assert_eq!(reloaded.balance(), 0.0);
    assert!(reloaded.withdraw(75.0).is_err());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_appends_single_winner() {
    let store = InMemoryEventStore::new();
    store
        .append(WALLET_ID, 0, vec![WalletEvent::Created { id: WALLET_ID }])
        .await
        .unwrap();

    let writers = (0..16).map(|i| {
        let store = store.clone();
        tokio::spawn(async move {
            store
                .append(
                    WALLET_ID,
                    1,
                    vec![WalletEvent::Deposited { id: WALLET_ID, amount: i as f64 }],
                )
                .await
        })
    });

    let results: Vec<_> = join_all(writers)
        .await
        .into_iter()
        .map(|joined| joined.expect("writer task panicked"))
        .collect();

    let winners = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(winners, 1);
    assert!(results
        .iter()
        .filter_map(|r| r.as_ref().err())
        .all(EventStoreError::is_retryable));
    assert_eq!(store.version(WALLET_ID).await.unwrap(), 2);
}

#[tokio::test]
async fn test_streams_are_isolated() {
    let store = InMemoryEventStore::new();

    store.append(1, 0, vec![WalletEvent::Created { id: 1 }]).await.unwrap();
    store.append(2, 0, vec![WalletEvent::Created { id: 2 }]).await.unwrap();
    store
        .append(2, 1, vec![WalletEvent::Won { id: 2, amount: 3.0 }])
        .await
        .unwrap();

    assert_eq!(store.version(1).await.unwrap(), 1);
    assert_eq!(store.version(2).await.unwrap(), 2);
    assert_eq!(store.stream_count().await, 2);
}

#[tokio::test]
async fn test_incremental_catch_up() {
    let store = InMemoryEventStore::new();
    store.append(WALLET_ID, 0, mixed_history()).await.unwrap();

    let snapshot = Wallet::from_stored(&store.load(WALLET_ID).await.unwrap());

    store
        .append(WALLET_ID, 6, vec![WalletEvent::Lost { id: WALLET_ID, amount: 25.0 }])
        .await
        .unwrap();

    let tail = store.load_from(WALLET_ID, snapshot.version()).await.unwrap();
    assert_eq!(tail.len(), 1);
    assert_eq!(tail[0].sequence, 7);

    let full = Wallet::from_stored(&store.load(WALLET_ID).await.unwrap());
    assert_eq!(full.balance(), snapshot.balance() - 25.0);
}
