use std::collections::BTreeSet;

use log::trace;

use crate::{Automaton, Edge, SimulationError, Step};

use super::Runner;

/// Active-set stepping, i.e. the subset construction performed on the fly.
#[derive(Debug, Clone)]
pub(crate) struct NfaRunner<'a> {
    automaton: &'a Automaton,
    active: BTreeSet<&'a str>,
}

impl<'a> NfaRunner<'a> {
    pub(crate) fn new(automaton: &'a Automaton) -> Self {
        Self {
            automaton,
            active: BTreeSet::from([automaton.initial_state()]),
        }
    }
}

impl Runner for NfaRunner<'_> {
    fn step(&mut self, position: usize, symbol: char) -> Result<Step, SimulationError> {
        if !self.automaton.in_alphabet(symbol) {
            return Err(SimulationError::invalid_symbol(
                position,
                self.active_states(),
                symbol,
            ));
        }
        let mut next = BTreeSet::new();
        let mut edges = Vec::new();
        // Both sets are ordered, so the edges come out sorted by source and then target.
        for from in &self.active {
            for to in self.automaton.targets(from, symbol) {
                next.insert(to);
                edges.push(Edge::new(from.to_string(), symbol, to.to_string()));
            }
        }
        if next.is_empty() {
            return Err(SimulationError::no_transition(
                position,
                self.active_states(),
                symbol,
            ));
        }
        trace!("{}: {:?} --{}--> {:?}", position, self.active, symbol, next);
        self.active = next;
        Ok(Step {
            symbol,
            position,
            active_states: self.active_states(),
            edges,
        })
    }

    fn is_accepting(&self) -> bool {
        self.active.iter().any(|state| self.automaton.is_final(state))
    }

    fn active_states(&self) -> BTreeSet<String> {
        self.active.iter().map(|state| state.to_string()).collect()
    }
}
