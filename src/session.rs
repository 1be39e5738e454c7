//! An editing session that owns at most one automaton.
//!
//! The session replaces a shared, ambient automaton: every operation goes through the session
//! handle. Mutations are not synchronized. A host that reads from other threads should take a
//! [`Session::snapshot`] and simulate on that copy.

use std::path::Path;

use log::debug;

use crate::{
    prefix_match::find_longest_prefix, Automaton, FasimError, FasimErrorKind, PrefixMatch,
    PrefixStrategy, Result, SimulationOutcome,
};

/// An editing session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    automaton: Option<Automaton>,
    strategy: PrefixStrategy,
}

impl Session {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the algorithm used by [`Session::longest_accepted_prefix`].
    pub fn with_prefix_strategy(mut self, strategy: PrefixStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Replaces the current automaton and returns the previous one.
    pub fn load(&mut self, automaton: Automaton) -> Option<Automaton> {
        debug!(
            "Session loads {} with {} states",
            automaton.kind().short_name(),
            automaton.state_count()
        );
        self.automaton.replace(automaton)
    }

    /// Parses, validates and loads an automaton from JSON.
    /// On failure the current automaton is kept.
    pub fn load_json(&mut self, json: &str) -> Result<()> {
        let automaton = Automaton::from_json(json)?;
        self.load(automaton);
        Ok(())
    }

    /// Reads, validates and loads an automaton from a JSON file.
    /// On failure the current automaton is kept.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let automaton = Automaton::from_file(path)?;
        self.load(automaton);
        Ok(())
    }

    /// Drops the current automaton and returns it.
    pub fn discard(&mut self) -> Option<Automaton> {
        debug!("Session discards its automaton");
        self.automaton.take()
    }

    /// True if the session holds an automaton.
    #[inline]
    pub fn is_loaded(&self) -> bool {
        self.automaton.is_some()
    }

    /// The current automaton.
    pub fn automaton(&self) -> Result<&Automaton> {
        self.automaton
            .as_ref()
            .ok_or_else(|| FasimError::new(FasimErrorKind::NoAutomaton))
    }

    fn automaton_mut(&mut self) -> Result<&mut Automaton> {
        self.automaton
            .as_mut()
            .ok_or_else(|| FasimError::new(FasimErrorKind::NoAutomaton))
    }

    /// A copy of the current automaton that later edits do not affect.
    pub fn snapshot(&self) -> Result<Automaton> {
        self.automaton().cloned()
    }

    /// See [`Automaton::add_state`].
    pub fn add_state(&mut self, name: &str) -> Result<()> {
        debug!("Session: add state {}", name);
        Ok(self.automaton_mut()?.add_state(name)?)
    }

    /// See [`Automaton::remove_state`].
    pub fn remove_state(&mut self, name: &str) -> Result<()> {
        debug!("Session: remove state {}", name);
        Ok(self.automaton_mut()?.remove_state(name)?)
    }

    /// See [`Automaton::rename_state`].
    pub fn rename_state(&mut self, old: &str, new: &str) -> Result<()> {
        debug!("Session: rename state {} to {}", old, new);
        Ok(self.automaton_mut()?.rename_state(old, new)?)
    }

    /// See [`Automaton::set_initial`].
    pub fn set_initial(&mut self, state: &str) -> Result<()> {
        debug!("Session: set initial state {}", state);
        Ok(self.automaton_mut()?.set_initial(state)?)
    }

    /// See [`Automaton::toggle_final`].
    pub fn toggle_final(&mut self, state: &str) -> Result<bool> {
        debug!("Session: toggle final state {}", state);
        Ok(self.automaton_mut()?.toggle_final(state)?)
    }

    /// See [`Automaton::set_layout`].
    pub fn set_layout(&mut self, state: &str, x: f64, y: f64) -> Result<()> {
        debug!("Session: set layout of {} to ({}, {})", state, x, y);
        Ok(self.automaton_mut()?.set_layout(state, x, y)?)
    }

    /// See [`Automaton::add_transition`].
    pub fn add_transition(&mut self, from: &str, symbol: char, to: &str) -> Result<()> {
        debug!("Session: add transition {} --{}--> {}", from, symbol, to);
        Ok(self.automaton_mut()?.add_transition(from, symbol, to)?)
    }

    /// See [`Automaton::remove_transition`].
    pub fn remove_transition(&mut self, from: &str, symbol: char, to: &str) -> Result<()> {
        debug!("Session: remove transition {} --{}--> {}", from, symbol, to);
        Ok(self.automaton_mut()?.remove_transition(from, symbol, to)?)
    }

    /// Runs `input` against the current automaton.
    pub fn simulate(&self, input: &str) -> Result<SimulationOutcome> {
        Ok(self.automaton()?.simulate(input))
    }

    /// Finds the longest prefix of `input` the current automaton accepts.
    pub fn longest_accepted_prefix<'h>(&self, input: &'h str) -> Result<PrefixMatch<'h>> {
        Ok(find_longest_prefix(self.automaton()?, input, self.strategy))
    }

    /// The current automaton as JSON.
    pub fn to_json(&self) -> Result<String> {
        self.automaton()?.to_json()
    }

    /// Writes the current automaton to a JSON file.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.automaton()?.save_to_file(path)
    }
}
