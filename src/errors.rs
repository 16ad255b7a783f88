//! Error types for wallet operations

use thiserror::Error;

use crate::events::WalletId;

/// Business rule violations raised by wallet commands
///
/// All of these are recoverable by the caller. None of them indicate a
/// broken invariant inside the aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WalletError {
    /// `Create` invoked on a wallet that is no longer `New`
    #[error("unsupported state transition")]
    UnsupportedTransition,

    /// Withdraw, Reserve or Lose would drive the balance negative
    #[error("insufficient funds to perform operation")]
    InsufficientFunds,

    /// Monetary command attempted while locked out
    #[error("can't accept events while in spurious state")]
    StateSpurious,
}

/// Result type for wallet commands
pub type WalletResult<T> = Result<T, WalletError>;

/// Errors that can occur in event store operations
#[derive(Debug, Error)]
pub enum EventStoreError {
    /// No events recorded for the wallet
    #[error("No events found for wallet {0}")]
    NotFound(WalletId),

    /// Optimistic concurrency check failed
    #[error("Version conflict on wallet {wallet_id}: expected version {expected}, actual {actual}")]
    VersionConflict {
        wallet_id: WalletId,
        expected: u64,
        actual: u64,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Backend storage error
    #[error("Storage error: {0}")]
    Storage(String),
}

impl EventStoreError {
    /// Whether reloading and retrying the command can succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, EventStoreError::VersionConflict { .. })
    }
}

/// Result type for event store operations
pub type EventStoreResult<T> = Result<T, EventStoreError>;

impl From<serde_json::Error> for EventStoreError {
    fn from(err: serde_json::Error) -> Self {
        EventStoreError::Serialization(err.to_string())
    }
}
