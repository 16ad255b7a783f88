// Copyright (c) 2025 - Cowboy AI, Inc.
//! Command Handlers for the Wallet Aggregate
//!
//! Each handler:
//! 1. Validates business rules against current state
//! 2. On success raises exactly one event (folded immediately, queued as pending)
//! 3. On failure returns a [`WalletError`] without touching state
//!
//! The one exception is [`Wallet::lose`]: an overdrawing loss raises
//! `Spurious` instead of `Lost`, locks the wallet out, leaves the balance
//! as it was, and still reports `InsufficientFunds`.
//!
//! # Business Rules
//!
//! | Command  | Rejected when                                    |
//! |----------|--------------------------------------------------|
//! | Create   | lifecycle is not `New`                           |
//! | Deposit  | spurious                                         |
//! | Withdraw | spurious, or balance − amount < 0                |
//! | Win      | spurious                                         |
//! | Lose     | spurious (overdraw locks out, see above)         |
//! | Reserve  | spurious, or balance − amount < 0                |
//! | Release  | spurious                                         |
//!
//! Deposit, Win and Release do not require the wallet to be `Created`, and
//! Release does not look for a matching Reserve.

use crate::aggregate::wallet::Wallet;
use crate::errors::{WalletError, WalletResult};
use crate::events::{Amount, WalletEvent, WalletId};
use crate::state_machine::{LifecycleInput, StateMachine};

impl Wallet {
    /// Bind a `New` wallet to `subject_id`
    pub fn create(&mut self, subject_id: WalletId) -> WalletResult<()> {
        if !self.lifecycle.can_transition(&LifecycleInput::Create) {
            return Err(WalletError::UnsupportedTransition);
        }

        self.raise(WalletEvent::Created { id: subject_id });
        Ok(())
    }

    /// Credit a deposit
    pub fn deposit(&mut self, amount: Amount) -> WalletResult<()> {
        self.ensure_not_spurious()?;

        self.raise(WalletEvent::Deposited { id: self.id, amount });
        Ok(())
    }

    /// Debit a withdrawal
    pub fn withdraw(&mut self, amount: Amount) -> WalletResult<()> {
        self.ensure_not_spurious()?;
        if !self.covers(amount) {
            return Err(WalletError::InsufficientFunds);
        }

        self.raise(WalletEvent::Withdrawn { id: self.id, amount });
        Ok(())
    }

    /// Credit winnings
    pub fn win(&mut self, amount: Amount) -> WalletResult<()> {
        self.ensure_not_spurious()?;

        self.raise(WalletEvent::Won { id: self.id, amount });
        Ok(())
    }

    /// Debit a loss, locking the wallet out if it cannot be covered
    pub fn lose(&mut self, amount: Amount) -> WalletResult<()> {
        self.ensure_not_spurious()?;

        if !self.covers(amount) {
            if self.lifecycle.can_transition(&LifecycleInput::Lockout) {
                self.raise(WalletEvent::Spurious { id: self.id });
            }
            return Err(WalletError::InsufficientFunds);
        }

        self.raise(WalletEvent::Lost { id: self.id, amount });
        Ok(())
    }

    /// Put funds on hold
    pub fn reserve(&mut self, amount: Amount) -> WalletResult<()> {
        self.ensure_not_spurious()?;
        if !self.covers(amount) {
            return Err(WalletError::InsufficientFunds);
        }

        self.raise(WalletEvent::Reserved { id: self.id, amount });
        Ok(())
    }

    /// Return held funds
    pub fn release(&mut self, amount: Amount) -> WalletResult<()> {
        self.ensure_not_spurious()?;

        self.raise(WalletEvent::Released { id: self.id, amount });
        Ok(())
    }

    fn ensure_not_spurious(&self) -> WalletResult<()> {
        if self.is_spurious() {
            return Err(WalletError::StateSpurious);
        }
        Ok(())
    }
}
