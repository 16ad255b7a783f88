// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for the Wallet Aggregate
//!
//! Amounts are whole cents scaled to f64 so that balances stay exact and
//! the pass/fail boundary is not blurred by representation error.

use cim_wallet::{Lifecycle, Wallet, WalletCommand, WalletError, WalletEvent};
use proptest::prelude::*;

// ============================================================================
// Property Test Strategies
// ============================================================================

/// Amounts in [0.00, 500.00], whole cents
fn amount() -> impl Strategy<Value = f64> {
    (0u32..=50_000).prop_map(|cents| f64::from(cents) / 100.0)
}

/// Any monetary command
fn monetary_command() -> impl Strategy<Value = WalletCommand> {
    prop_oneof![
        amount().prop_map(|amount| WalletCommand::Deposit { amount }),
        amount().prop_map(|amount| WalletCommand::Withdraw { amount }),
        amount().prop_map(|amount| WalletCommand::Win { amount }),
        amount().prop_map(|amount| WalletCommand::Lose { amount }),
        amount().prop_map(|amount| WalletCommand::Reserve { amount }),
        amount().prop_map(|amount| WalletCommand::Release { amount }),
    ]
}

/// Any command, including repeated creates
fn command() -> impl Strategy<Value = WalletCommand> {
    prop_oneof![
        9 => monetary_command(),
        1 => (1i64..1_000).prop_map(|subject_id| WalletCommand::Create { subject_id }),
    ]
}

/// Command sequence starting with a Create
fn command_trace() -> impl Strategy<Value = (i64, Vec<WalletCommand>)> {
    (1i64..1_000, prop::collection::vec(command(), 0..60))
}

/// Run a trace, ignoring rejections
fn run(subject_id: i64, commands: &[WalletCommand]) -> Wallet {
    let mut wallet = Wallet::new();
    wallet.create(subject_id).unwrap();
    for command in commands {
        let _ = wallet.execute(*command);
    }
    wallet
}

/// Wallet with a given balance and nothing pending
fn loaded_wallet(subject_id: i64, balance: f64) -> Wallet {
    Wallet::from_history(&[
        WalletEvent::Created { id: subject_id },
        WalletEvent::Deposited { id: subject_id, amount: balance },
    ])
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: replaying a command-generated trace reproduces the state
    #[test]
    fn prop_replay_matches_incremental((subject_id, commands) in command_trace()) {
        let live = run(subject_id, &commands);
        let replayed = Wallet::from_history(live.pending_changes());

        prop_assert_eq!(replayed.balance(), live.balance());
        prop_assert_eq!(replayed.lifecycle(), live.lifecycle());
        prop_assert_eq!(replayed.id(), live.id());
    }

    /// Property: version counts replayed events only
    #[test]
    fn prop_version_accounting((subject_id, commands) in command_trace()) {
        let live = run(subject_id, &commands);
        prop_assert_eq!(live.version(), 0);

        let history = live.pending_changes().to_vec();
        let mut loaded = Wallet::from_history(&history);
        prop_assert_eq!(loaded.version(), history.len() as u64);
        prop_assert!(loaded.pending_changes().is_empty());

        for command in &commands {
            let _ = loaded.execute(*command);
        }
        prop_assert_eq!(loaded.version(), history.len() as u64);
    }

    /// Property: Withdraw and Reserve never overdraw
    #[test]
    fn prop_no_negative_balance((subject_id, commands) in command_trace()) {
        let mut wallet = Wallet::new();
        wallet.create(subject_id).unwrap();

        for command in commands {
            let before = wallet.clone();
            let result = wallet.execute(command);

            if let (WalletCommand::Withdraw { amount } | WalletCommand::Reserve { amount }, Ok(())) = (command, result) {
                prop_assert!(before.balance() - amount >= 0.0);
                prop_assert!(wallet.balance() >= 0.0);
            }
        }
    }

    /// Property: an overdraw is refused with no state change
    #[test]
    fn prop_overdraw_refused(balance in amount(), excess in 1u32..10_000, reserve in any::<bool>()) {
        let mut wallet = loaded_wallet(12, balance);
        let before = wallet.clone();
        let amount = balance + f64::from(excess) / 100.0;

        let result = if reserve { wallet.reserve(amount) } else { wallet.withdraw(amount) };

        prop_assert_eq!(result, Err(WalletError::InsufficientFunds));
        prop_assert_eq!(wallet, before);
    }

    /// Property: an overdrawing loss locks out and keeps the balance
    #[test]
    fn prop_lose_into_lockout(balance in amount(), excess in 1u32..10_000) {
        let mut wallet = loaded_wallet(12, balance);
        let amount = balance + f64::from(excess) / 100.0;

        prop_assert_eq!(wallet.lose(amount), Err(WalletError::InsufficientFunds));
        prop_assert_eq!(wallet.lifecycle(), Lifecycle::Spurious);
        prop_assert_eq!(wallet.balance(), balance);
        prop_assert_eq!(wallet.pending_changes(), &[WalletEvent::Spurious { id: 12 }][..]);
    }

    /// Property: once spurious, every monetary command is refused
    #[test]
    fn prop_lockout_is_absorbing(commands in prop::collection::vec(monetary_command(), 1..30)) {
        let mut wallet = loaded_wallet(12, 10.0);
        let _ = wallet.lose(20.0);
        let locked = wallet.clone();

        for command in commands {
            prop_assert_eq!(wallet.execute(command), Err(WalletError::StateSpurious));
        }
        prop_assert_eq!(wallet, locked);
    }

    /// Property: Create succeeds exactly once
    #[test]
    fn prop_single_creation(first in 1i64..1_000, second in 1i64..1_000) {
        let mut wallet = Wallet::new();
        prop_assert_eq!(wallet.create(first), Ok(()));

        let before = wallet.clone();
        prop_assert_eq!(wallet.create(second), Err(WalletError::UnsupportedTransition));
        prop_assert_eq!(wallet, before);
    }

    /// Property: lifecycle only moves forward
    #[test]
    fn prop_lifecycle_monotonic((subject_id, commands) in command_trace()) {
        let rank = |lifecycle: Lifecycle| match lifecycle {
            Lifecycle::New => 0,
            Lifecycle::Created => 1,
            Lifecycle::Spurious => 2,
        };

        let mut wallet = Wallet::new();
        wallet.create(subject_id).unwrap();
        let mut last = rank(wallet.lifecycle());

        for command in commands {
            let _ = wallet.execute(command);
            let now = rank(wallet.lifecycle());
            prop_assert!(now >= last);
            last = now;
        }
    }
}
