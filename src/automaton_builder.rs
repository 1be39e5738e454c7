use std::collections::{BTreeMap, BTreeSet};

use crate::{automaton::TransitionTable, Automaton, LayoutPoint, StructuralError};

/// A builder for creating an automaton piece by piece.
///
/// Nothing is checked until [`AutomatonBuilder::build`], which runs the validator.
#[derive(Debug, Clone, Default)]
pub struct AutomatonBuilder {
    states: BTreeSet<String>,
    alphabet: BTreeSet<char>,
    transitions: TransitionTable,
    initial: Option<String>,
    finals: BTreeSet<String>,
    layout: BTreeMap<String, LayoutPoint>,
}

impl AutomatonBuilder {
    /// Creates a new automaton builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a state.
    pub fn state(mut self, name: &str) -> Self {
        self.states.insert(name.to_string());
        self
    }

    /// Adds multiple states.
    pub fn states<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.states.extend(names.into_iter().map(Into::into));
        self
    }

    /// Adds symbols to the alphabet.
    pub fn alphabet<I>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        self.alphabet.extend(symbols);
        self
    }

    /// Adds the edge `from --symbol--> to`.
    pub fn transition(mut self, from: &str, symbol: char, to: &str) -> Self {
        self.transitions
            .entry(from.to_string())
            .or_default()
            .entry(symbol)
            .or_default()
            .insert(to.to_string());
        self
    }

    /// Adds the edges `from --symbol--> to` for every symbol in `symbols`.
    pub fn transitions<I>(mut self, from: &str, symbols: I, to: &str) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        for symbol in symbols {
            self = self.transition(from, symbol, to);
        }
        self
    }

    /// Sets the initial state.
    pub fn initial_state(mut self, name: &str) -> Self {
        self.initial = Some(name.to_string());
        self
    }

    /// Adds final states.
    pub fn final_states<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.finals.extend(names.into_iter().map(Into::into));
        self
    }

    /// Sets layout coordinates for a state.
    pub fn layout(mut self, name: &str, x: f64, y: f64) -> Self {
        self.layout.insert(name.to_string(), LayoutPoint::new(x, y));
        self
    }

    /// Builds and validates the automaton.
    ///
    /// Without an explicit initial state the lexicographically smallest state is used.
    pub fn build(self) -> Result<Automaton, StructuralError> {
        let initial = match self.initial {
            Some(initial) => initial,
            None => self.states.first().cloned().unwrap_or_default(),
        };
        Automaton::from_parts(
            self.states,
            self.alphabet,
            self.transitions,
            initial,
            self.finals,
            self.layout,
        )
        .into_validated()
    }
}
