//! Longest accepted prefix search.
//!
//! [`longest_accepted_prefix`] is the reference algorithm: it simulates every prefix from
//! scratch and keeps the longest accepted one. That is quadratic in the input length, which is
//! fine for single tokens of realistic length.
//!
//! [`longest_accepted_prefix_incremental`] steps through the input once and remembers the last
//! accepting position. It returns exactly what the reference returns: a failed step fails every
//! longer prefix at the same symbol, and the trace of an accepted prefix is the head of the trace
//! of the full run. The property tests check the two against each other.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::{
    internal::{DfaRunner, MatchingState, NfaRunner, Runner},
    simulation::simulate,
    validator::is_deterministic,
    Automaton, SimulationOutcome, Span,
};

/// The algorithm used to find the longest accepted prefix.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrefixStrategy {
    /// Re-run the simulation on every prefix.
    #[default]
    Restart,
    /// Step once over the input and record the last accepting position.
    Incremental,
}

/// The longest prefix of an input that an automaton accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixMatch<'h> {
    prefix: &'h str,
    outcome: Option<SimulationOutcome>,
}

impl<'h> PrefixMatch<'h> {
    pub(crate) fn new(prefix: &'h str, outcome: Option<SimulationOutcome>) -> Self {
        Self { prefix, outcome }
    }

    pub(crate) fn none() -> Self {
        Self {
            prefix: "",
            outcome: None,
        }
    }

    /// The accepted prefix. Empty if no non-empty prefix was accepted.
    #[inline]
    pub fn prefix(&self) -> &'h str {
        self.prefix
    }

    /// The outcome of simulating the prefix, `None` if nothing was accepted.
    #[inline]
    pub fn outcome(&self) -> Option<&SimulationOutcome> {
        self.outcome.as_ref()
    }

    /// Consumes the match and returns the outcome.
    pub fn into_outcome(self) -> Option<SimulationOutcome> {
        self.outcome
    }

    /// True if a non-empty prefix was accepted.
    #[inline]
    pub fn is_accepted(&self) -> bool {
        self.outcome.as_ref().is_some_and(|o| o.accepted)
    }

    /// Length of the prefix in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.prefix.len()
    }

    /// True if no prefix was accepted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.prefix.is_empty()
    }

    /// Length of the prefix in characters.
    pub fn char_count(&self) -> usize {
        self.prefix.chars().count()
    }

    /// The byte span of the prefix within the searched input.
    #[inline]
    pub fn span(&self) -> Span {
        Span::new(0, self.prefix.len())
    }
}

/// Returns the longest non-empty prefix of `input` that `automaton` accepts, together with the
/// outcome of simulating exactly that prefix.
///
/// The empty prefix is never tried, so an empty input yields an empty match without outcome.
pub fn longest_accepted_prefix<'h>(automaton: &Automaton, input: &'h str) -> PrefixMatch<'h> {
    let mut longest = PrefixMatch::none();
    for (offset, c) in input.char_indices() {
        let prefix = &input[..offset + c.len_utf8()];
        let outcome = simulate(automaton, prefix);
        if outcome.accepted {
            trace!("Prefix '{}' accepted", prefix.escape_default());
            longest = PrefixMatch::new(prefix, Some(outcome));
        }
    }
    longest
}

/// Single-pass equivalent of [`longest_accepted_prefix`].
pub fn longest_accepted_prefix_incremental<'h>(
    automaton: &Automaton,
    input: &'h str,
) -> PrefixMatch<'h> {
    if is_deterministic(automaton) {
        scan_prefix(DfaRunner::new(automaton), input)
    } else {
        scan_prefix(NfaRunner::new(automaton), input)
    }
}

/// Dispatches to the algorithm selected by `strategy`.
pub fn find_longest_prefix<'h>(
    automaton: &Automaton,
    input: &'h str,
    strategy: PrefixStrategy,
) -> PrefixMatch<'h> {
    match strategy {
        PrefixStrategy::Restart => longest_accepted_prefix(automaton, input),
        PrefixStrategy::Incremental => longest_accepted_prefix_incremental(automaton, input),
    }
}

fn scan_prefix<R: Runner>(mut runner: R, input: &str) -> PrefixMatch<'_> {
    let mut matching_state = MatchingState::new();
    let mut trace = Vec::new();
    for (position, (offset, c)) in input.char_indices().enumerate() {
        match runner.step(position, c) {
            Ok(step) => {
                trace.push(step);
                if runner.is_accepting() {
                    matching_state.transition_to_accepting(
                        offset + c.len_utf8(),
                        trace.len(),
                        runner.active_states(),
                    );
                } else {
                    matching_state.transition_to_non_accepting();
                }
            }
            Err(_) => matching_state.no_transition(),
        }
        if matching_state.is_longest_match() {
            break;
        }
    }
    match matching_state.into_last_match() {
        Some(last) => {
            trace.truncate(last.steps);
            PrefixMatch::new(
                &input[..last.end],
                Some(SimulationOutcome::accepted(trace, last.final_states)),
            )
        }
        None => PrefixMatch::none(),
    }
}
