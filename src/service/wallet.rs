// Copyright (c) 2025 - Cowboy AI, Inc.
//! Wallet Service Layer
//!
//! # Transaction Semantics
//!
//! Each service method is a transaction:
//! 1. Load events from store
//! 2. Reconstitute the wallet
//! 3. Execute the command on the aggregate
//! 4. Append pending events with the wallet version as expected version
//!
//! Domain errors are never retried. The overdrawing `Lose` is the one
//! failure that still persists an event (`Spurious`) before the error is
//! returned.

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::aggregate::{Wallet, WalletCommand};
use crate::config::WalletServiceConfig;
use crate::errors::{EventStoreError, WalletError};
use crate::event_store::EventStore;
use crate::events::{Amount, WalletId};

/// Service layer result type
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service layer errors
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Command rejected by the aggregate
    #[error("Wallet error: {0}")]
    Domain(#[from] WalletError),

    /// Event store error
    #[error("Event store error: {0}")]
    Store(#[from] EventStoreError),

    /// Wallet stream has no events
    #[error("Wallet not found: {0}")]
    NotFound(WalletId),

    /// Version conflicts persisted past the retry budget
    #[error("Gave up on wallet {wallet_id} after {attempts} conflicting attempts")]
    RetriesExhausted { wallet_id: WalletId, attempts: u32 },
}

impl ServiceError {
    /// Domain error, if the aggregate rejected the command
    pub fn as_domain(&self) -> Option<WalletError> {
        match self {
            ServiceError::Domain(err) => Some(*err),
            _ => None,
        }
    }
}

/// Wallet service trait
///
/// Every mutating method returns the stream version after the append.
#[async_trait]
pub trait WalletService: Send + Sync {
    /// Create the wallet stream for `wallet_id`
    async fn open(&self, wallet_id: WalletId) -> ServiceResult<u64>;

    /// Deposit into an existing wallet
    async fn deposit(&self, wallet_id: WalletId, amount: Amount) -> ServiceResult<u64>;

    /// Withdraw from an existing wallet
    async fn withdraw(&self, wallet_id: WalletId, amount: Amount) -> ServiceResult<u64>;

    /// Credit winnings to an existing wallet
    async fn win(&self, wallet_id: WalletId, amount: Amount) -> ServiceResult<u64>;

    /// Debit a loss from an existing wallet
    async fn lose(&self, wallet_id: WalletId, amount: Amount) -> ServiceResult<u64>;

    /// Reserve funds on an existing wallet
    async fn reserve(&self, wallet_id: WalletId, amount: Amount) -> ServiceResult<u64>;

    /// Release funds on an existing wallet
    async fn release(&self, wallet_id: WalletId, amount: Amount) -> ServiceResult<u64>;

    /// Run any command against the wallet stream
    async fn execute(&self, wallet_id: WalletId, command: WalletCommand) -> ServiceResult<u64>;

    /// Current state reconstituted from the store
    async fn get_wallet(&self, wallet_id: WalletId) -> ServiceResult<Wallet>;

    /// Current balance
    async fn balance(&self, wallet_id: WalletId) -> ServiceResult<Amount> {
        Ok(self.get_wallet(wallet_id).await?.balance())
    }
}

/// Event-sourced implementation of [`WalletService`]
pub struct EventSourcedWalletService<S> {
    /// Event store for persistence
    store: S,

    /// Retry policy
    config: WalletServiceConfig,
}

impl<S: EventStore> EventSourcedWalletService<S> {
    /// Create a service with the default configuration
    pub fn new(store: S) -> Self {
        Self::with_config(store, WalletServiceConfig::default())
    }

    /// Create a service with an explicit configuration
    pub fn with_config(store: S, config: WalletServiceConfig) -> Self {
        Self { store, config }
    }

    /// Underlying event store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Active configuration
    pub fn config(&self) -> &WalletServiceConfig {
        &self.config
    }

    /// Load an existing wallet
    async fn load(&self, wallet_id: WalletId) -> ServiceResult<Wallet> {
        match self.store.load(wallet_id).await {
            Ok(history) => Ok(Wallet::from_stored(&history)),
            Err(EventStoreError::NotFound(id)) => Err(ServiceError::NotFound(id)),
            Err(err) => Err(err.into()),
        }
    }

    /// Load a wallet, or start from an empty one if the stream is new
    async fn load_or_new(&self, wallet_id: WalletId) -> ServiceResult<Wallet> {
        match self.load(wallet_id).await {
            Err(ServiceError::NotFound(_)) => Ok(Wallet::new()),
            other => other,
        }
    }

    /// One load → execute → append attempt
    ///
    /// `Ok(Err(_))` is a version conflict worth retrying.
    async fn attempt(
        &self,
        wallet_id: WalletId,
        command: WalletCommand,
    ) -> ServiceResult<Result<u64, EventStoreError>> {
        let mut wallet = match command {
            WalletCommand::Create { .. } => self.load_or_new(wallet_id).await?,
            _ => self.load(wallet_id).await?,
        };

        let outcome = wallet.execute(command);
        let pending = wallet.pending_changes().to_vec();
        if let Err(err) = outcome {
            if pending.is_empty() {
                return Err(err.into());
            }
        }

        match self.store.append(wallet_id, wallet.version(), pending).await {
            Ok(version) => {
                outcome?;
                Ok(Ok(version))
            }
            Err(err) if err.is_retryable() => Ok(Err(err)),
            Err(err) => Err(err.into()),
        }
    }
}

#[async_trait]
impl<S: EventStore> WalletService for EventSourcedWalletService<S> {
    async fn open(&self, wallet_id: WalletId) -> ServiceResult<u64> {
        self.execute(wallet_id, WalletCommand::Create { subject_id: wallet_id })
            .await
    }

    async fn deposit(&self, wallet_id: WalletId, amount: Amount) -> ServiceResult<u64> {
        self.execute(wallet_id, WalletCommand::Deposit { amount }).await
    }

    async fn withdraw(&self, wallet_id: WalletId, amount: Amount) -> ServiceResult<u64> {
        self.execute(wallet_id, WalletCommand::Withdraw { amount }).await
    }

    async fn win(&self, wallet_id: WalletId, amount: Amount) -> ServiceResult<u64> {
        self.execute(wallet_id, WalletCommand::Win { amount }).await
    }

    async fn lose(&self, wallet_id: WalletId, amount: Amount) -> ServiceResult<u64> {
        self.execute(wallet_id, WalletCommand::Lose { amount }).await
    }

    async fn reserve(&self, wallet_id: WalletId, amount: Amount) -> ServiceResult<u64> {
        self.execute(wallet_id, WalletCommand::Reserve { amount }).await
    }

    async fn release(&self, wallet_id: WalletId, amount: Amount) -> ServiceResult<u64> {
        self.execute(wallet_id, WalletCommand::Release { amount }).await
    }

    async fn execute(&self, wallet_id: WalletId, command: WalletCommand) -> ServiceResult<u64> {
        let mut attempts = 0;

        loop {
            attempts += 1;
            debug!(wallet_id, command = command.name(), attempts, "Executing command");

            match self.attempt(wallet_id, command).await {
                Ok(Ok(version)) => {
                    info!(wallet_id, command = command.name(), version, "Command committed");
                    return Ok(version);
                }
                Ok(Err(conflict)) if attempts <= self.config.max_retries => {
                    warn!(wallet_id, command = command.name(), attempts, %conflict, "Retrying after conflict");
                    if !self.config.retry_backoff.is_zero() {
                        tokio::time::sleep(self.config.retry_backoff).await;
                    }
                }
                Ok(Err(_)) => {
                    warn!(wallet_id, command = command.name(), attempts, "Retry budget exhausted");
                    return Err(ServiceError::RetriesExhausted { wallet_id, attempts });
                }
                Err(err) => {
                    debug!(wallet_id, command = command.name(), error = %err, "Command failed");
                    return Err(err);
                }
            }
        }
    }

    async fn get_wallet(&self, wallet_id: WalletId) -> ServiceResult<Wallet> {
        self.load(wallet_id).await
    }
}
