// Copyright (c) 2025 - Cowboy AI, Inc.
//! Wallet Commands
//!
//! Commands express intent and can be rejected; events express facts.
//! A [`WalletCommand`] is a value that can be carried across a retry loop
//! and re-executed against a freshly loaded wallet.

use serde::{Deserialize, Serialize};

use crate::aggregate::wallet::Wallet;
use crate::errors::WalletResult;
use crate::events::{Amount, WalletId};

/// Command accepted by the wallet aggregate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum WalletCommand {
    /// Bind the wallet to a subject
    Create { subject_id: WalletId },

    /// Credit a deposit
    Deposit { amount: Amount },

    /// Debit a withdrawal
    Withdraw { amount: Amount },

    /// Credit winnings
    Win { amount: Amount },

    /// Debit a loss
    Lose { amount: Amount },

    /// Put funds on hold
    Reserve { amount: Amount },

    /// Return held funds
    Release { amount: Amount },
}

impl WalletCommand {
    /// Command name for logs
    pub fn name(&self) -> &'static str {
        match self {
            WalletCommand::Create { .. } => "create",
            WalletCommand::Deposit { .. } => "deposit",
            WalletCommand::Withdraw { .. } => "withdraw",
            WalletCommand::Win { .. } => "win",
            WalletCommand::Lose { .. } => "lose",
            WalletCommand::Reserve { .. } => "reserve",
            WalletCommand::Release { .. } => "release",
        }
    }
}

impl Wallet {
    /// Dispatch a command to its handler
    pub fn execute(&mut self, command: WalletCommand) -> WalletResult<()> {
        match command {
            WalletCommand::Create { subject_id } => self.create(subject_id),
            WalletCommand::Deposit { amount } => self.deposit(amount),
            WalletCommand::Withdraw { amount } => self.withdraw(amount),
            WalletCommand::Win { amount } => self.win(amount),
            WalletCommand::Lose { amount } => self.lose(amount),
            WalletCommand::Reserve { amount } => self.reserve(amount),
            WalletCommand::Release { amount } => self.release(amount),
        }
    }
}
