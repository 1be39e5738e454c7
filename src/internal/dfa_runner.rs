use std::collections::BTreeSet;

use log::trace;

use crate::{Automaton, Edge, SimulationError, Step};

use super::Runner;

/// Single-state stepping for deterministic automata.
#[derive(Debug, Clone)]
pub(crate) struct DfaRunner<'a> {
    automaton: &'a Automaton,
    current: &'a str,
}

impl<'a> DfaRunner<'a> {
    pub(crate) fn new(automaton: &'a Automaton) -> Self {
        Self {
            automaton,
            current: automaton.initial_state(),
        }
    }
}

impl Runner for DfaRunner<'_> {
    fn step(&mut self, position: usize, symbol: char) -> Result<Step, SimulationError> {
        if !self.automaton.in_alphabet(symbol) {
            return Err(SimulationError::invalid_symbol(
                position,
                self.active_states(),
                symbol,
            ));
        }
        // The automaton is deterministic, so there is at most one target.
        let Some(next) = self.automaton.targets(self.current, symbol).next() else {
            return Err(SimulationError::no_transition(
                position,
                self.active_states(),
                symbol,
            ));
        };
        trace!("{}: {} --{}--> {}", position, self.current, symbol, next);
        let edge = Edge::new(self.current.to_string(), symbol, next.to_string());
        self.current = next;
        Ok(Step {
            symbol,
            position,
            active_states: self.active_states(),
            edges: vec![edge],
        })
    }

    fn is_accepting(&self) -> bool {
        self.automaton.is_final(self.current)
    }

    fn active_states(&self) -> BTreeSet<String> {
        BTreeSet::from([self.current.to_string()])
    }
}
