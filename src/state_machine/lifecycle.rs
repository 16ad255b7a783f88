// Copyright (c) 2025 - Cowboy AI, Inc.
//! Wallet Lifecycle State Machine
//!
//! # States
//!
//! - New: constructed, never created
//! - Created: bound to a subject, accepting commands
//! - Spurious: permanent lockout (terminal)
//!
//! # Inputs
//!
//! - Create: New → Created
//! - Lockout: New | Created → Spurious
//!
//! Command validation goes through [`StateMachine::transition`]. Folding
//! recorded events goes through [`Lifecycle::after`], which is total:
//! events are facts and are never rejected.

use serde::{Deserialize, Serialize};

use super::{StateMachine, TransitionError, TransitionResult};
use crate::events::WalletEvent;

/// Lifecycle state of a wallet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lifecycle {
    /// Freshly constructed, `Create` not yet accepted
    #[default]
    New,

    /// Created for a subject
    Created,

    /// Locked out after an overdrawing loss
    Spurious,
}

/// Lifecycle input (FSM input)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleInput {
    /// Bind the wallet to a subject
    Create,

    /// Lock the wallet out permanently
    Lockout,
}

impl Lifecycle {
    /// Lifecycle after folding a recorded event
    pub fn after(self, event: &WalletEvent) -> Self {
        use WalletEvent::*;

        match event {
            Created { .. } => Lifecycle::Created,
            Spurious { .. } => Lifecycle::Spurious,
            Deposited { .. }
            | Withdrawn { .. }
            | Won { .. }
            | Lost { .. }
            | Reserved { .. }
            | Released { .. } => self,
        }
    }

    /// Name used in transition errors and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Lifecycle::New => "New",
            Lifecycle::Created => "Created",
            Lifecycle::Spurious => "Spurious",
        }
    }
}

impl std::fmt::Display for Lifecycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl StateMachine for Lifecycle {
    type Input = LifecycleInput;
    type Output = ();

    fn transition(&self, input: &Self::Input) -> TransitionResult<(Self, Self::Output)> {
        use Lifecycle::*;
        use LifecycleInput::*;

        match (self, input) {
            (New, Create) => Ok((Created, ())),
            (New, Lockout) | (Created, Lockout) => Ok((Spurious, ())),
            (Created, Create) => Err(TransitionError::InvalidTransition {
                from: Created.to_string(),
                to: "Created (via Create)".to_string(),
            }),
            (Spurious, _) => Err(TransitionError::Terminal(Spurious.to_string())),
        }
    }

    fn valid_inputs(&self) -> Vec<Self::Input> {
        use Lifecycle::*;
        use LifecycleInput::*;

        match self {
            New => vec![Create, Lockout],
            Created => vec![Lockout],
            Spurious => vec![],
        }
    }
}
