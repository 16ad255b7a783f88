// Copyright (c) 2025 - Cowboy AI, Inc.
//! Wallet Aggregate State
//!
//! The aggregate root reconstructed from events:
//!
//! ```text
//! Wallet = fold(Events, Wallet::new(), apply_event(.., Replayed))
//! ```
//!
//! Commands (see [`handlers`](super::handlers)) validate against this state,
//! then fold the event they raise with [`ApplyMode::Raised`] and queue it in
//! `pending_changes`.

use crate::event_store::StoredEvent;
use crate::events::{Amount, WalletEvent, WalletId};
use crate::state_machine::Lifecycle;

/// How an event reaches [`apply_event`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyMode {
    /// Newly raised by a command on this instance, not yet persisted
    Raised,

    /// Replayed from persisted history; counts towards `version`
    Replayed,
}

/// Wallet aggregate
///
/// A transient, caller-owned value for one load → mutate → persist cycle.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Wallet {
    pub(crate) id: WalletId,
    pub(crate) balance: Amount,
    pub(crate) lifecycle: Lifecycle,
    pub(crate) version: u64,
    pub(crate) pending_changes: Vec<WalletEvent>,
}

impl Wallet {
    /// Empty wallet: `New`, balance 0, version 0, nothing pending
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconstitute a wallet from its ordered history
    ///
    /// Events are folded in the given order. Ordering is the event store's
    /// responsibility; nothing is reordered or deduplicated here.
    pub fn from_history<'a, I>(events: I) -> Self
    where
        I: IntoIterator<Item = &'a WalletEvent>,
    {
        events.into_iter().fold(Self::new(), |wallet, event| {
            apply_event(wallet, event, ApplyMode::Replayed)
        })
    }

    /// Reconstitute a wallet from stored event envelopes
    pub fn from_stored(events: &[StoredEvent<WalletEvent>]) -> Self {
        Self::from_history(events.iter().map(|stored| &stored.data))
    }

    /// Wallet identity, 0 before creation
    pub fn id(&self) -> WalletId {
        self.id
    }

    /// Current balance
    pub fn balance(&self) -> Amount {
        self.balance
    }

    /// Current lifecycle state
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Number of persisted events this instance was loaded from
    ///
    /// This is the expected-version token for the next append.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Events raised on this instance that are not yet persisted
    ///
    /// Only ever grows. After a successful append, reload the wallet from
    /// the store rather than reusing this instance.
    pub fn pending_changes(&self) -> &[WalletEvent] {
        &self.pending_changes
    }

    /// Whether `Create` has been applied
    pub fn is_created(&self) -> bool {
        self.lifecycle == Lifecycle::Created
    }

    /// Whether the wallet is locked out
    pub fn is_spurious(&self) -> bool {
        self.lifecycle == Lifecycle::Spurious
    }

    /// Whether debiting `amount` leaves a balance that is not negative
    ///
    /// Refuses only a difference that compares below zero, so a NaN amount
    /// is accepted.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub(crate) fn covers(&self, amount: Amount) -> bool {
        !(self.balance - amount < 0.0)
    }

    /// Fold a newly raised event and queue it
    pub(crate) fn raise(&mut self, event: WalletEvent) {
        let wallet = std::mem::take(self);
        *self = apply_event(wallet, &event, ApplyMode::Raised);
        self.pending_changes.push(event);
    }
}

/// Apply event to wallet (pure function)
///
/// The only place transition semantics live. Used both by commands
/// (`Raised`) and by reconstitution (`Replayed`).
///
/// # Invariants
/// - Never fails (events are facts that happened)
/// - Never touches `pending_changes`
/// - `version` grows by one for `Replayed`, stays put for `Raised`
pub fn apply_event(wallet: Wallet, event: &WalletEvent, mode: ApplyMode) -> Wallet {
    use WalletEvent::*;

    let lifecycle = wallet.lifecycle.after(event);
    let mut next = match event {
        Created { id } => Wallet {
            id: *id,
            balance: 0.0,
            lifecycle,
            ..wallet
        },
        Spurious { .. } => Wallet { lifecycle, ..wallet },
        Deposited { amount, .. } | Won { amount, .. } | Released { amount, .. } => Wallet {
            balance: wallet.balance + amount,
            ..wallet
        },
        Withdrawn { amount, .. } | Lost { amount, .. } | Reserved { amount, .. } => Wallet {
            balance: wallet.balance - amount,
            ..wallet
        },
    };

    if mode == ApplyMode::Replayed {
        next.version += 1;
    }

    next
}
