//! Event-sourced wallet aggregate for the Composable Information Machine
//!
//! A wallet's balance and lifecycle are derived by folding its ordered
//! history of immutable events. Commands validate against that state
//! before raising new events. Persistence sits behind the [`EventStore`]
//! trait; the aggregate itself does no I/O.

pub mod aggregate;
pub mod config;
pub mod errors;
pub mod event_store;
pub mod events;
pub mod service;
pub mod state_machine;

// Re-export commonly used types
pub use aggregate::{apply_event, ApplyMode, Wallet, WalletCommand};
pub use config::WalletServiceConfig;
pub use errors::{EventStoreError, EventStoreResult, WalletError, WalletResult};
pub use event_store::{EventStore, InMemoryEventStore, StoredEvent};
pub use events::{Amount, WalletEvent, WalletId};
pub use service::{EventSourcedWalletService, ServiceError, ServiceResult, WalletService};
pub use state_machine::Lifecycle;
