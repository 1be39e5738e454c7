//! The automaton model.
//!
//! An [`Automaton`] owns its states, alphabet, transition relation, initial and final states and
//! an optional layout. All collections are ordered, so iteration, traces and error messages are
//! reproducible.
//!
//! The editing operations check every precondition before they touch the model. An operation
//! that fails leaves the automaton exactly as it was.

use std::collections::{BTreeMap, BTreeSet};

use log::trace;
use serde::{Deserialize, Serialize};

use crate::{
    prefix_match::longest_accepted_prefix,
    simulation::{simulate, Edge},
    validator::{is_deterministic, validate},
    PrefixMatch, SimulationOutcome, StructuralError,
};

/// The transition table. Every state owns a row, possibly empty.
pub(crate) type TransitionTable = BTreeMap<String, BTreeMap<char, BTreeSet<String>>>;

/// Presentation coordinates of a state. They have no effect on simulation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutPoint {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl LayoutPoint {
    /// Create a new layout point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Whether the transition relation is single-valued everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AutomatonKind {
    /// Every (state, symbol) pair has at most one destination.
    Deterministic,
    /// Some (state, symbol) pair has more than one destination.
    NonDeterministic,
}

impl AutomatonKind {
    /// The conventional short name, `DFA` or `NFA`.
    pub fn short_name(&self) -> &'static str {
        match self {
            AutomatonKind::Deterministic => "DFA",
            AutomatonKind::NonDeterministic => "NFA",
        }
    }
}

impl std::fmt::Display for AutomatonKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AutomatonKind::Deterministic => write!(f, "DFA (deterministic finite automaton)"),
            AutomatonKind::NonDeterministic => {
                write!(f, "NFA (non-deterministic finite automaton)")
            }
        }
    }
}

/// A finite automaton over single-character symbols.
///
/// Instances are created by deserializing a definition (see [`Automaton::from_json`]) or with
/// the [`crate::AutomatonBuilder`]. Both paths validate the result.
#[derive(Debug, Clone, PartialEq)]
pub struct Automaton {
    pub(crate) states: BTreeSet<String>,
    pub(crate) alphabet: BTreeSet<char>,
    pub(crate) transitions: TransitionTable,
    pub(crate) initial: String,
    pub(crate) finals: BTreeSet<String>,
    pub(crate) layout: BTreeMap<String, LayoutPoint>,
}

impl Automaton {
    /// Assembles an automaton from its parts without validating it.
    pub(crate) fn from_parts(
        states: BTreeSet<String>,
        alphabet: BTreeSet<char>,
        transitions: TransitionTable,
        initial: String,
        finals: BTreeSet<String>,
        layout: BTreeMap<String, LayoutPoint>,
    ) -> Self {
        Self {
            states,
            alphabet,
            transitions,
            initial,
            finals,
            layout,
        }
    }

    /// Validates the automaton and gives every state a transition row.
    pub(crate) fn into_validated(mut self) -> Result<Self, StructuralError> {
        validate(&self)?;
        for state in &self.states {
            if !self.transitions.contains_key(state) {
                self.transitions.insert(state.clone(), BTreeMap::new());
            }
        }
        Ok(self)
    }

    /// The states in lexicographic order.
    pub fn states(&self) -> impl Iterator<Item = &str> {
        self.states.iter().map(String::as_str)
    }

    /// Number of states.
    #[inline]
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Returns true if `state` is a state of the automaton.
    #[inline]
    pub fn has_state(&self, state: &str) -> bool {
        self.states.contains(state)
    }

    /// The alphabet in ascending order.
    pub fn alphabet(&self) -> impl Iterator<Item = char> + '_ {
        self.alphabet.iter().copied()
    }

    /// Returns true if `symbol` belongs to the alphabet.
    #[inline]
    pub fn in_alphabet(&self, symbol: char) -> bool {
        self.alphabet.contains(&symbol)
    }

    /// The initial state.
    #[inline]
    pub fn initial_state(&self) -> &str {
        &self.initial
    }

    /// The final states in lexicographic order.
    pub fn final_states(&self) -> impl Iterator<Item = &str> {
        self.finals.iter().map(String::as_str)
    }

    /// Returns true if `state` is a final state.
    #[inline]
    pub fn is_final(&self, state: &str) -> bool {
        self.finals.contains(state)
    }

    /// The destinations of `state` on `symbol`, in lexicographic order.
    pub fn targets(&self, state: &str, symbol: char) -> impl Iterator<Item = &str> {
        self.transitions
            .get(state)
            .and_then(|row| row.get(&symbol))
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    /// All edges ordered by source state, symbol and target state.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.transitions.iter().flat_map(|(from, row)| {
            row.iter().flat_map(move |(symbol, targets)| {
                targets
                    .iter()
                    .map(move |to| Edge::new(from.clone(), *symbol, to.clone()))
            })
        })
    }

    /// Number of individual (from, symbol, to) edges.
    pub fn transition_count(&self) -> usize {
        self.transitions
            .values()
            .flat_map(|row| row.values())
            .map(BTreeSet::len)
            .sum()
    }

    /// The layout coordinates of `state`, if any were set.
    pub fn layout(&self, state: &str) -> Option<LayoutPoint> {
        self.layout.get(state).copied()
    }

    /// Whether the automaton is deterministic or not.
    pub fn kind(&self) -> AutomatonKind {
        if is_deterministic(self) {
            AutomatonKind::Deterministic
        } else {
            AutomatonKind::NonDeterministic
        }
    }

    /// Checks the structural invariants. See [`crate::validate`].
    pub fn validate(&self) -> Result<(), StructuralError> {
        validate(self)
    }

    /// Runs `input` against the automaton. See [`crate::simulate`].
    pub fn simulate(&self, input: &str) -> SimulationOutcome {
        simulate(self, input)
    }

    /// Finds the longest prefix of `input` the automaton accepts.
    /// See [`crate::longest_accepted_prefix`].
    pub fn longest_accepted_prefix<'h>(&self, input: &'h str) -> PrefixMatch<'h> {
        longest_accepted_prefix(self, input)
    }

    /// Renders the automaton in graphviz dot format.
    #[cfg(feature = "dot_writer")]
    pub fn render_dot<W: std::io::Write>(&self, label: &str, output: &mut W) {
        crate::internal::dot::automaton_render(self, label, output);
    }

    /// Adds a state without transitions.
    pub fn add_state(&mut self, name: &str) -> Result<(), StructuralError> {
        if name.is_empty() {
            return Err(StructuralError::EmptyStateName);
        }
        if self.states.contains(name) {
            return Err(StructuralError::DuplicateState(name.to_string()));
        }
        trace!("Adding state {}", name);
        self.states.insert(name.to_string());
        self.transitions.insert(name.to_string(), BTreeMap::new());
        Ok(())
    }

    /// Removes a state together with every transition that leaves or enters it.
    ///
    /// If the removed state was the initial state, the lexicographically smallest remaining
    /// state becomes the initial state.
    pub fn remove_state(&mut self, name: &str) -> Result<(), StructuralError> {
        if !self.states.contains(name) {
            return Err(StructuralError::UnknownState(name.to_string()));
        }
        if self.states.len() == 1 {
            return Err(StructuralError::LastState(name.to_string()));
        }
        trace!("Removing state {}", name);
        self.states.remove(name);
        self.finals.remove(name);
        self.layout.remove(name);
        self.transitions.remove(name);
        for row in self.transitions.values_mut() {
            row.retain(|_, targets| {
                targets.remove(name);
                !targets.is_empty()
            });
        }
        if self.initial == name {
            // The set is non-empty, we refused to remove the last state above.
            if let Some(first) = self.states.first() {
                trace!("Initial state moves to {}", first);
                self.initial = first.clone();
            }
        }
        Ok(())
    }

    /// Renames a state everywhere it is referenced, including its layout entry.
    pub fn rename_state(&mut self, old: &str, new: &str) -> Result<(), StructuralError> {
        if old.is_empty() || new.is_empty() {
            return Err(StructuralError::EmptyStateName);
        }
        if !self.states.contains(old) {
            return Err(StructuralError::UnknownState(old.to_string()));
        }
        if self.states.contains(new) {
            return Err(StructuralError::DuplicateState(new.to_string()));
        }
        trace!("Renaming state {} to {}", old, new);
        self.states.remove(old);
        self.states.insert(new.to_string());
        if self.initial == old {
            self.initial = new.to_string();
        }
        if self.finals.remove(old) {
            self.finals.insert(new.to_string());
        }
        if let Some(row) = self.transitions.remove(old) {
            self.transitions.insert(new.to_string(), row);
        }
        for row in self.transitions.values_mut() {
            for targets in row.values_mut() {
                if targets.remove(old) {
                    targets.insert(new.to_string());
                }
            }
        }
        if let Some(point) = self.layout.remove(old) {
            self.layout.insert(new.to_string(), point);
        }
        Ok(())
    }

    /// Makes `state` the initial state.
    pub fn set_initial(&mut self, state: &str) -> Result<(), StructuralError> {
        if !self.states.contains(state) {
            return Err(StructuralError::UnknownState(state.to_string()));
        }
        self.initial = state.to_string();
        Ok(())
    }

    /// Flips the membership of `state` in the final states.
    /// Returns true if the state is final afterwards.
    pub fn toggle_final(&mut self, state: &str) -> Result<bool, StructuralError> {
        if !self.states.contains(state) {
            return Err(StructuralError::UnknownState(state.to_string()));
        }
        if self.finals.remove(state) {
            Ok(false)
        } else {
            self.finals.insert(state.to_string());
            Ok(true)
        }
    }

    /// Sets the layout coordinates of `state`.
    pub fn set_layout(&mut self, state: &str, x: f64, y: f64) -> Result<(), StructuralError> {
        if !self.states.contains(state) {
            return Err(StructuralError::UnknownState(state.to_string()));
        }
        self.layout.insert(state.to_string(), LayoutPoint::new(x, y));
        Ok(())
    }

    /// Adds the edge `from --symbol--> to`.
    pub fn add_transition(
        &mut self,
        from: &str,
        symbol: char,
        to: &str,
    ) -> Result<(), StructuralError> {
        if !self.states.contains(from) {
            return Err(StructuralError::UnknownState(from.to_string()));
        }
        if !self.states.contains(to) {
            return Err(StructuralError::UnknownState(to.to_string()));
        }
        if !self.alphabet.contains(&symbol) {
            return Err(StructuralError::UnknownSymbol(symbol));
        }
        if self.targets(from, symbol).any(|target| target == to) {
            return Err(StructuralError::DuplicateTransition {
                from: from.to_string(),
                symbol,
                to: to.to_string(),
            });
        }
        trace!("Adding transition {} --{}--> {}", from, symbol, to);
        self.transitions
            .entry(from.to_string())
            .or_default()
            .entry(symbol)
            .or_default()
            .insert(to.to_string());
        Ok(())
    }

    /// Removes the edge `from --symbol--> to`. The symbol entry disappears with its last target.
    pub fn remove_transition(
        &mut self,
        from: &str,
        symbol: char,
        to: &str,
    ) -> Result<(), StructuralError> {
        let unknown = || StructuralError::UnknownTransition {
            from: from.to_string(),
            symbol,
            to: to.to_string(),
        };
        let row = self.transitions.get_mut(from).ok_or_else(unknown)?;
        let targets = row.get_mut(&symbol).ok_or_else(unknown)?;
        if !targets.remove(to) {
            return Err(unknown());
        }
        if targets.is_empty() {
            row.remove(&symbol);
        }
        trace!("Removed transition {} --{}--> {}", from, symbol, to);
        Ok(())
    }
}

impl std::fmt::Display for Automaton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let join = |items: Vec<String>| items.join(", ");
        writeln!(f, "Type: {}", self.kind())?;
        writeln!(f, "States: {{{}}}", join(self.states.iter().cloned().collect()))?;
        writeln!(
            f,
            "Alphabet: {{{}}}",
            join(self.alphabet.iter().map(char::to_string).collect())
        )?;
        writeln!(f, "Initial state: {}", self.initial)?;
        writeln!(
            f,
            "Final states: {{{}}}",
            join(self.finals.iter().cloned().collect())
        )?;
        writeln!(f, "Transitions:")?;
        for edge in self.edges() {
            writeln!(f, "  {}", edge)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AutomatonBuilder;

    fn sample() -> Automaton {
        AutomatonBuilder::new()
            .states(["a", "b", "c"])
            .alphabet(['0', '1'])
            .transition("a", '0', "b")
            .transition("a", '0', "c")
            .transition("b", '1', "a")
            .transition("c", '1', "c")
            .initial_state("a")
            .final_states(["c"])
            .layout("a", 10.0, 20.0)
            .build()
            .unwrap()
    }

    #[test]
    fn test_add_state_rejects_empty_and_duplicate_names() {
        let mut automaton = sample();
        assert_eq!(
            automaton.add_state(""),
            Err(StructuralError::EmptyStateName)
        );
        assert_eq!(
            automaton.add_state("a"),
            Err(StructuralError::DuplicateState("a".to_string()))
        );
        assert_eq!(automaton, sample());
        automaton.add_state("d").unwrap();
        assert!(automaton.has_state("d"));
        assert_eq!(automaton.targets("d", '0').count(), 0);
    }

    #[test]
    fn test_remove_state_strips_incoming_edges() {
        let mut automaton = sample();
        automaton.remove_state("c").unwrap();
        assert_eq!(automaton.states().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(automaton.final_states().count(), 0);
        assert_eq!(automaton.targets("a", '0').collect::<Vec<_>>(), vec!["b"]);
        automaton.remove_state("b").unwrap();
        // The symbol entry of `a` on '0' lost its last target and is gone.
        assert!(automaton.transitions["a"].is_empty());
        assert!(automaton.validate().is_ok());
    }

    #[test]
    fn test_remove_initial_state_picks_smallest_remaining() {
        let mut automaton = sample();
        automaton.remove_state("a").unwrap();
        assert_eq!(automaton.initial_state(), "b");
        assert_eq!(automaton.layout("a"), None);
        assert!(automaton.validate().is_ok());
    }

    #[test]
    fn test_remove_last_state_fails() {
        let mut automaton = sample();
        automaton.remove_state("b").unwrap();
        automaton.remove_state("c").unwrap();
        assert_eq!(
            automaton.remove_state("a"),
            Err(StructuralError::LastState("a".to_string()))
        );
        assert_eq!(
            automaton.remove_state("x"),
            Err(StructuralError::UnknownState("x".to_string()))
        );
    }

    #[test]
    fn test_rename_state_updates_every_reference() {
        let mut automaton = sample();
        automaton.rename_state("a", "start").unwrap();
        assert_eq!(automaton.initial_state(), "start");
        assert_eq!(automaton.targets("b", '1').collect::<Vec<_>>(), vec!["start"]);
        assert_eq!(automaton.targets("start", '0').count(), 2);
        assert_eq!(automaton.layout("start"), Some(LayoutPoint::new(10.0, 20.0)));
        assert!(automaton.validate().is_ok());

        automaton.rename_state("c", "end").unwrap();
        assert!(automaton.is_final("end"));
        assert_eq!(automaton.targets("end", '1').collect::<Vec<_>>(), vec!["end"]);
    }

    #[test]
    fn test_rename_state_failures_leave_model_untouched() {
        let mut automaton = sample();
        assert_eq!(
            automaton.rename_state("a", "b"),
            Err(StructuralError::DuplicateState("b".to_string()))
        );
        assert_eq!(
            automaton.rename_state("x", "y"),
            Err(StructuralError::UnknownState("x".to_string()))
        );
        assert_eq!(
            automaton.rename_state("a", ""),
            Err(StructuralError::EmptyStateName)
        );
        assert_eq!(automaton, sample());
    }

    #[test]
    fn test_toggle_final_and_set_initial() {
        let mut automaton = sample();
        assert_eq!(automaton.toggle_final("b"), Ok(true));
        assert!(automaton.is_final("b"));
        assert_eq!(automaton.toggle_final("b"), Ok(false));
        assert!(!automaton.is_final("b"));
        automaton.set_initial("c").unwrap();
        assert_eq!(automaton.initial_state(), "c");
        assert!(automaton.set_initial("z").is_err());
        assert!(automaton.toggle_final("z").is_err());
        assert!(automaton.set_layout("z", 1.0, 1.0).is_err());
    }

    #[test]
    fn test_add_and_remove_transition() {
        let mut automaton = sample();
        assert_eq!(
            automaton.add_transition("a", '0', "b"),
            Err(StructuralError::DuplicateTransition {
                from: "a".to_string(),
                symbol: '0',
                to: "b".to_string()
            })
        );
        assert_eq!(
            automaton.add_transition("a", '2', "b"),
            Err(StructuralError::UnknownSymbol('2'))
        );
        assert_eq!(
            automaton.add_transition("a", '1', "x"),
            Err(StructuralError::UnknownState("x".to_string()))
        );
        automaton.add_transition("b", '0', "b").unwrap();
        assert_eq!(automaton.transition_count(), 5);
        automaton.remove_transition("b", '0', "b").unwrap();
        assert_eq!(automaton, sample());
        assert_eq!(
            automaton.remove_transition("b", '0', "b"),
            Err(StructuralError::UnknownTransition {
                from: "b".to_string(),
                symbol: '0',
                to: "b".to_string()
            })
        );
    }

    #[test]
    fn test_add_remove_state_round_trip() {
        let mut automaton = sample();
        automaton.add_state("x").unwrap();
        automaton.remove_state("x").unwrap();
        assert_eq!(automaton, sample());
    }

    #[test]
    fn test_rename_round_trip() {
        let mut automaton = sample();
        automaton.rename_state("a", "z").unwrap();
        automaton.rename_state("z", "a").unwrap();
        assert_eq!(automaton, sample());
    }

    #[test]
    fn test_display() {
        let text = sample().to_string();
        assert!(text.starts_with("Type: NFA"));
        assert!(text.contains("States: {a, b, c}"));
        assert!(text.contains("Alphabet: {0, 1}"));
        assert!(text.contains("  a --0--> b\n  a --0--> c\n"));
    }

    #[cfg(feature = "dot_writer")]
    #[test]
    fn test_render_dot() {
        let mut output = Vec::new();
        sample().render_dot("Sample", &mut output);
        let dot = String::from_utf8(output).unwrap();
        assert!(dot.starts_with("digraph"));
        assert!(dot.contains("Sample"));
        assert_eq!(dot.matches("->").count(), 4);
    }
}
