//! Simulation of an input string against an automaton.
//!
//! Deterministic automata are run with a single current state, non-deterministic ones with a set
//! of active states that is computed on the fly. Both produce a trace of [`Step`]s and a
//! classified [`SimulationError`] if the input is rejected. Rejection is data, never a panic.

use std::collections::BTreeSet;

use log::{debug, trace};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    internal::{DfaRunner, NfaRunner, Runner},
    validator::is_deterministic,
    Automaton,
};

/// A single edge of the transition relation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// The source state.
    pub from: String,
    /// The symbol consumed.
    pub symbol: char,
    /// The target state.
    pub to: String,
}

impl Edge {
    /// Create a new edge.
    pub fn new(from: String, symbol: char, to: String) -> Self {
        Self { from, symbol, to }
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} --{}--> {}", self.from, self.symbol, self.to)
    }
}

/// One consumed symbol of a simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// The symbol consumed.
    pub symbol: char,
    /// The 0-based character position of the symbol in the input.
    pub position: usize,
    /// The states active after consuming the symbol.
    pub active_states: BTreeSet<String>,
    /// The edges taken, ordered by source state and then target state.
    pub edges: Vec<Edge>,
}

/// The classification of a rejected input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimulationErrorKind {
    /// The input contains a symbol outside the alphabet.
    InvalidSymbol,
    /// No active state has a transition on the symbol.
    NoTransition,
    /// The input was consumed completely but no active state is final.
    NotAccepting,
}

/// Why a simulation rejected its input.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{message}")]
pub struct SimulationError {
    /// The classification.
    pub kind: SimulationErrorKind,
    /// The character position of the failure. For [`SimulationErrorKind::NotAccepting`] this is
    /// the length of the input.
    pub position: usize,
    /// The states active when the simulation failed.
    pub states: BTreeSet<String>,
    /// The offending symbol, if any.
    pub symbol: Option<char>,
    /// A human-readable description.
    pub message: String,
}

impl SimulationError {
    pub(crate) fn invalid_symbol(
        position: usize,
        states: BTreeSet<String>,
        symbol: char,
    ) -> Self {
        Self {
            kind: SimulationErrorKind::InvalidSymbol,
            position,
            states,
            symbol: Some(symbol),
            message: format!("Symbol '{}' is not in the alphabet", symbol.escape_default()),
        }
    }

    pub(crate) fn no_transition(
        position: usize,
        states: BTreeSet<String>,
        symbol: char,
    ) -> Self {
        let message = format!(
            "No transition from {} on symbol '{}'",
            describe_states(&states),
            symbol.escape_default()
        );
        Self {
            kind: SimulationErrorKind::NoTransition,
            position,
            states,
            symbol: Some(symbol),
            message,
        }
    }

    pub(crate) fn not_accepting(position: usize, states: BTreeSet<String>) -> Self {
        let message = if states.len() == 1 {
            format!("End state {} is not accepting", describe_states(&states))
        } else {
            format!(
                "None of the end states {} is accepting",
                describe_states(&states)
            )
        };
        Self {
            kind: SimulationErrorKind::NotAccepting,
            position,
            states,
            symbol: None,
            message,
        }
    }
}

/// A single state is printed bare, a set of states in braces.
fn describe_states(states: &BTreeSet<String>) -> String {
    if states.len() == 1 {
        states.iter().cloned().collect()
    } else {
        format!(
            "{{{}}}",
            states.iter().cloned().collect::<Vec<_>>().join(", ")
        )
    }
}

/// The result of running an input against an automaton.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationOutcome {
    /// True if the input was accepted.
    pub accepted: bool,
    /// One step per consumed symbol, up to the point of failure.
    pub trace: Vec<Step>,
    /// The states active when the simulation ended.
    pub final_states: BTreeSet<String>,
    /// The reason for rejection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<SimulationError>,
}

impl SimulationOutcome {
    pub(crate) fn accepted(trace: Vec<Step>, final_states: BTreeSet<String>) -> Self {
        Self {
            accepted: true,
            trace,
            final_states,
            error: None,
        }
    }

    pub(crate) fn rejected(
        trace: Vec<Step>,
        final_states: BTreeSet<String>,
        error: SimulationError,
    ) -> Self {
        Self {
            accepted: false,
            trace,
            final_states,
            error: Some(error),
        }
    }

    /// The classification of the rejection, if the input was rejected.
    pub fn error_kind(&self) -> Option<SimulationErrorKind> {
        self.error.as_ref().map(|e| e.kind)
    }
}

/// Runs `input` against `automaton`, one character per symbol.
///
/// Deterministic automata use single-state stepping, all others active-set stepping.
/// The automaton is only read, so several simulations may share it across threads.
pub fn simulate(automaton: &Automaton, input: &str) -> SimulationOutcome {
    if is_deterministic(automaton) {
        debug!("Simulating '{}' as DFA", input.escape_default());
        run(DfaRunner::new(automaton), input)
    } else {
        debug!("Simulating '{}' as NFA", input.escape_default());
        run(NfaRunner::new(automaton), input)
    }
}

fn run<R: Runner>(mut runner: R, input: &str) -> SimulationOutcome {
    let mut trace = Vec::new();
    let mut length = 0;
    for (position, symbol) in input.chars().enumerate() {
        match runner.step(position, symbol) {
            Ok(step) => trace.push(step),
            Err(error) => {
                trace!("Rejected at {}: {}", position, error);
                return SimulationOutcome::rejected(trace, runner.active_states(), error);
            }
        }
        length = position + 1;
    }
    if runner.is_accepting() {
        trace!("Accepted in {:?}", runner.active_states());
        SimulationOutcome::accepted(trace, runner.active_states())
    } else {
        let error = SimulationError::not_accepting(length, runner.active_states());
        trace!("Rejected: {}", error);
        SimulationOutcome::rejected(trace, runner.active_states(), error)
    }
}
