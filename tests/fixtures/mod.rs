// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for cim-wallet
//!
//! Deterministic wallets and event histories shared by the integration
//! tests. Fixtures are the only place that hand-builds event sequences.

#![allow(dead_code)]

use cim_wallet::{Amount, Wallet, WalletEvent, WalletId};

pub const WALLET_ID: WalletId = 12;

/// History from the reference reconstitution scenario
///
/// Balance: 100 − 50 + 50 + 50 − 75 = 75
pub fn mixed_history() -> Vec<WalletEvent> {
    vec![
        WalletEvent::Created { id: WALLET_ID },
        WalletEvent::Deposited { id: WALLET_ID, amount: 100.0 },
        WalletEvent::Reserved { id: WALLET_ID, amount: 50.0 },
        WalletEvent::Released { id: WALLET_ID, amount: 50.0 },
        WalletEvent::Won { id: WALLET_ID, amount: 50.0 },
        WalletEvent::Withdrawn { id: WALLET_ID, amount: 75.0 },
    ]
}

/// History ending in lockout with 100.0 left on the wallet
pub fn spurious_history() -> Vec<WalletEvent> {
    vec![
        WalletEvent::Created { id: WALLET_ID },
        WalletEvent::Deposited { id: WALLET_ID, amount: 100.0 },
        WalletEvent::Spurious { id: WALLET_ID },
    ]
}

/// Freshly created wallet with nothing pending from history
pub fn created_wallet(id: WalletId) -> Wallet {
    let mut wallet = Wallet::new();
    wallet.create(id).expect("create on a new wallet");
    wallet
}

/// Created wallet with one deposit
pub fn funded_wallet(id: WalletId, amount: Amount) -> Wallet {
    let mut wallet = created_wallet(id);
    wallet.deposit(amount).expect("deposit on a created wallet");
    wallet
}

/// Wallet locked out by an overdrawing loss
pub fn spurious_wallet(id: WalletId) -> Wallet {
    let mut wallet = created_wallet(id);
    let _ = wallet.lose(200.01);
    assert!(wallet.is_spurious());
    wallet
}
