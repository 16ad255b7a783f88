// Copyright (c) 2025 - Cowboy AI, Inc.
//! Finite State Machine Abstractions
//!
//! Generic, pure state machine types for modeling domain lifecycles.
//! Transitions are deterministic functions with no side effects.
//!
//! ```text
//! (State, Input) → Result<(State, Output), TransitionError>
//! ```
//!
//! # Example
//!
//! ```rust
//! use cim_wallet::state_machine::{Lifecycle, LifecycleInput, StateMachine};
//!
//! let (next, _) = Lifecycle::New.transition(&LifecycleInput::Create).unwrap();
//! assert_eq!(next, Lifecycle::Created);
//! assert!(!next.can_transition(&LifecycleInput::Create));
//! ```

pub mod lifecycle;

pub use lifecycle::{Lifecycle, LifecycleInput};

/// Result of a state transition
pub type TransitionResult<S> = Result<S, TransitionError>;

/// Errors that can occur during state transitions
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    /// Transition from current state to target state is not allowed
    #[error("Invalid transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    /// Current state is terminal
    #[error("State {0} is terminal")]
    Terminal(String),
}

/// Trait for finite state machines
///
/// Implement this trait to define a state machine with typed states,
/// inputs, and outputs.
pub trait StateMachine: Sized + Clone {
    /// Input type that triggers transitions
    type Input;

    /// Output type produced by transitions (use () if none)
    type Output;

    /// Attempt to transition to a new state given an input
    fn transition(&self, input: &Self::Input) -> TransitionResult<(Self, Self::Output)>;

    /// Check if a transition is valid without performing it
    fn can_transition(&self, input: &Self::Input) -> bool {
        self.transition(input).is_ok()
    }

    /// Get all valid inputs from current state (if enumerable)
    fn valid_inputs(&self) -> Vec<Self::Input>
    where
        Self::Input: Clone,
    {
        Vec::new()
    }

    /// Whether no input leads anywhere from this state
    fn is_terminal(&self) -> bool
    where
        Self::Input: Clone,
    {
        self.valid_inputs().is_empty()
    }
}
