// Copyright (c) 2025 - Cowboy AI, Inc.
//! Wallet Domain Events
//!
//! Everything that can happen to a wallet is one of these variants.
//! Events are immutable facts:
//! - Past tense naming (Deposited, not Deposit)
//! - No behavior beyond identifying the variant and its payload
//! - Serializable so an event store can persist them
//!
//! The enum is closed. Every consumer matches exhaustively, so adding a
//! variant is a compile error everywhere it is not yet handled.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Monetary amount carried by wallet events
pub type Amount = f64;

/// Wallet identity (the subject the wallet was created for)
pub type WalletId = i64;

/// Wallet Domain Events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WalletEvent {
    /// Wallet was created for a subject
    Created { id: WalletId },

    /// Wallet entered permanent lockout
    Spurious { id: WalletId },

    /// Funds were deposited
    Deposited { id: WalletId, amount: Amount },

    /// Funds were withdrawn
    Withdrawn { id: WalletId, amount: Amount },

    /// Winnings were credited
    Won { id: WalletId, amount: Amount },

    /// A loss was debited
    Lost { id: WalletId, amount: Amount },

    /// Funds were put on hold
    Reserved { id: WalletId, amount: Amount },

    /// Held funds were returned
    Released { id: WalletId, amount: Amount },
}

impl WalletEvent {
    /// Wallet the event belongs to
    pub fn wallet_id(&self) -> WalletId {
        use WalletEvent::*;

        match self {
            Created { id }
            | Spurious { id }
            | Deposited { id, .. }
            | Withdrawn { id, .. }
            | Won { id, .. }
            | Lost { id, .. }
            | Reserved { id, .. }
            | Released { id, .. } => *id,
        }
    }

    /// Monetary amount, `None` for lifecycle-only events
    pub fn amount(&self) -> Option<Amount> {
        use WalletEvent::*;

        match self {
            Created { .. } | Spurious { .. } => None,
            Deposited { amount, .. }
            | Withdrawn { amount, .. }
            | Won { amount, .. }
            | Lost { amount, .. }
            | Reserved { amount, .. }
            | Released { amount, .. } => Some(*amount),
        }
    }

    /// Stable event type name, matches the serde `type` tag
    pub fn event_type(&self) -> &'static str {
        use WalletEvent::*;

        match self {
            Created { .. } => "created",
            Spurious { .. } => "spurious",
            Deposited { .. } => "deposited",
            Withdrawn { .. } => "withdrawn",
            Won { .. } => "won",
            Lost { .. } => "lost",
            Reserved { .. } => "reserved",
            Released { .. } => "released",
        }
    }

    /// Whether folding this event moves the balance
    pub fn is_monetary(&self) -> bool {
        self.amount().is_some()
    }
}

impl fmt::Display for WalletEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.amount() {
            Some(amount) => write!(f, "{}(wallet={}, amount={})", self.event_type(), self.wallet_id(), amount),
            None => write!(f, "{}(wallet={})", self.event_type(), self.wallet_id()),
        }
    }
}
