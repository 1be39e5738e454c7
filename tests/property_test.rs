//! Property tests for the validator, the classifier, the simulator, the prefix search and the
//! mutation API.

use std::collections::BTreeSet;

use fasim::{
    find_longest_prefix, is_deterministic, longest_accepted_prefix,
    longest_accepted_prefix_incremental, Automaton, AutomatonBuilder, AutomatonDefinition,
    PrefixStrategy, StructuralError,
};
use proptest::prelude::*;

// ========================================================================
// Generators
// ========================================================================

fn state_name(index: usize) -> String {
    format!("s{}", index)
}

/// A transition table over `{a, b}` given as one destination list per (state, symbol) pair,
/// `a` rows at even and `b` rows at odd indices, together with the final state flags.
#[derive(Debug, Clone)]
struct Table {
    rows: Vec<Vec<usize>>,
    finals: Vec<bool>,
}

impl Table {
    fn state_count(&self) -> usize {
        self.finals.len()
    }

    fn is_deterministic(&self) -> bool {
        self.rows
            .iter()
            .all(|row| row.iter().collect::<BTreeSet<_>>().len() <= 1)
    }

    fn build(&self) -> Automaton {
        let mut builder = AutomatonBuilder::new()
            .states((0..self.state_count()).map(state_name))
            .alphabet(['a', 'b'])
            .initial_state("s0")
            .final_states(
                self.finals
                    .iter()
                    .enumerate()
                    .filter(|(_, is_final)| **is_final)
                    .map(|(index, _)| state_name(index)),
            );
        for (index, row) in self.rows.iter().enumerate() {
            let from = state_name(index / 2);
            let symbol = if index % 2 == 0 { 'a' } else { 'b' };
            for to in row {
                builder = builder.transition(&from, symbol, &state_name(*to));
            }
        }
        builder.build().unwrap()
    }
}

fn arb_table() -> impl Strategy<Value = Table> {
    (1usize..5).prop_flat_map(|n| {
        (
            prop::collection::vec(prop::collection::vec(0..n, 0..3), n * 2),
            prop::collection::vec(any::<bool>(), n),
        )
            .prop_map(|(rows, finals)| Table { rows, finals })
    })
}

/// Inputs over the alphabet, occasionally with a foreign symbol.
fn arb_input() -> impl Strategy<Value = String> {
    "[ab]{0,10}c?[ab]{0,3}"
}

/// Strings over {a, b} whose second to last symbol is `a`.
fn second_to_last_nfa() -> Automaton {
    AutomatonBuilder::new()
        .states(["q0", "q1", "q2"])
        .alphabet(['a', 'b'])
        .transitions("q0", ['a', 'b'], "q0")
        .transition("q0", 'a', "q1")
        .transitions("q1", ['a', 'b'], "q2")
        .initial_state("q0")
        .final_states(["q2"])
        .build()
        .unwrap()
}

/// The same language, determinized by hand. A state remembers the last two symbols.
fn second_to_last_dfa() -> Automaton {
    let mut builder = AutomatonBuilder::new()
        .states(["bb", "ba", "ab", "aa"])
        .alphabet(['a', 'b'])
        .initial_state("bb")
        .final_states(["ab", "aa"]);
    for state in ["bb", "ba", "ab", "aa"] {
        let last = &state[1..];
        builder = builder
            .transition(state, 'a', &format!("{}a", last))
            .transition(state, 'b', &format!("{}b", last));
    }
    builder.build().unwrap()
}

fn rejection(definition: AutomatonDefinition) -> StructuralError {
    Automaton::try_from(definition).unwrap_err()
}

// ========================================================================
// Properties
// ========================================================================

proptest! {
    #[test]
    fn valid_automata_validate(table in arb_table()) {
        let automaton = table.build();
        prop_assert!(automaton.validate().is_ok());
        prop_assert!(Automaton::try_from(automaton.to_definition()).is_ok());
    }

    #[test]
    fn every_single_violation_is_named(table in arb_table()) {
        let valid = table.build().to_definition();

        let mut definition = valid.clone();
        definition.states.clear();
        prop_assert_eq!(rejection(definition), StructuralError::NoStates);

        let mut definition = valid.clone();
        definition.alphabet.clear();
        prop_assert_eq!(rejection(definition), StructuralError::NoSymbols);

        let mut definition = valid.clone();
        definition.initial_state = "zz".to_string();
        prop_assert_eq!(
            rejection(definition),
            StructuralError::UnknownInitialState("zz".to_string())
        );

        let mut definition = valid.clone();
        definition.final_states.push("zz".to_string());
        prop_assert_eq!(
            rejection(definition),
            StructuralError::UnknownFinalState("zz".to_string())
        );

        let mut definition = valid.clone();
        definition
            .transitions
            .entry("zz".to_string())
            .or_default()
            .insert("a".to_string(), vec!["s0".to_string()]);
        prop_assert_eq!(
            rejection(definition),
            StructuralError::UnknownTransitionSource("zz".to_string())
        );

        let mut definition = valid.clone();
        definition
            .transitions
            .entry("s0".to_string())
            .or_default()
            .insert("c".to_string(), vec!["s0".to_string()]);
        prop_assert_eq!(
            rejection(definition),
            StructuralError::UnknownTransitionSymbol('c')
        );

        let mut definition = valid;
        definition
            .transitions
            .entry("s0".to_string())
            .or_default()
            .entry("a".to_string())
            .or_default()
            .push("zz".to_string());
        prop_assert_eq!(
            rejection(definition),
            StructuralError::UnknownTransitionTarget("zz".to_string())
        );
    }

    #[test]
    fn classifier_checks_destination_set_sizes(table in arb_table()) {
        let automaton = table.build();
        prop_assert_eq!(is_deterministic(&automaton), table.is_deterministic());
    }

    #[test]
    fn nfa_agrees_with_determinized_dfa(input in "[ab]{0,16}") {
        let nfa = second_to_last_nfa();
        let dfa = second_to_last_dfa();
        prop_assert!(!is_deterministic(&nfa));
        prop_assert!(is_deterministic(&dfa));
        prop_assert_eq!(nfa.simulate(&input).accepted, dfa.simulate(&input).accepted);
    }

    #[test]
    fn longest_prefix_is_accepted_on_its_own(table in arb_table(), input in arb_input()) {
        let automaton = table.build();
        let found = longest_accepted_prefix(&automaton, &input);
        prop_assert!(found.len() <= input.len());
        prop_assert!(input.starts_with(found.prefix()));
        if found.is_empty() {
            prop_assert!(found.outcome().is_none());
        } else {
            let outcome = automaton.simulate(found.prefix());
            prop_assert!(outcome.accepted);
            prop_assert_eq!(Some(&outcome), found.outcome());
        }
        // No longer prefix is accepted.
        for end in found.len() + 1..=input.len() {
            prop_assert!(!automaton.simulate(&input[..end]).accepted);
        }
    }

    #[test]
    fn incremental_prefix_equals_restart(table in arb_table(), input in arb_input()) {
        let automaton = table.build();
        prop_assert_eq!(
            longest_accepted_prefix(&automaton, &input),
            longest_accepted_prefix_incremental(&automaton, &input)
        );
        prop_assert_eq!(
            find_longest_prefix(&automaton, &input, PrefixStrategy::Restart),
            find_longest_prefix(&automaton, &input, PrefixStrategy::Incremental)
        );
    }

    #[test]
    fn add_then_remove_state_restores_the_automaton(table in arb_table()) {
        let original = table.build();
        let mut automaton = original.clone();
        automaton.add_state("x").unwrap();
        automaton.remove_state("x").unwrap();
        prop_assert_eq!(automaton, original);
    }

    #[test]
    fn rename_there_and_back_restores_the_automaton(
        table in arb_table(),
        index in 0usize..5
    ) {
        let original = table.build();
        let mut automaton = original.clone();
        automaton.set_layout("s0", 1.0, 2.0).unwrap();
        let with_layout = automaton.clone();
        let name = state_name(index % table.state_count());
        automaton.rename_state(&name, "renamed").unwrap();
        prop_assert!(!automaton.has_state(&name));
        automaton.rename_state("renamed", &name).unwrap();
        prop_assert_eq!(automaton, with_layout);
    }

    #[test]
    fn add_then_remove_transition_restores_the_automaton(
        table in arb_table(),
        from in 0usize..5,
        to in 0usize..5,
        symbol in prop_oneof![Just('a'), Just('b')]
    ) {
        let original = table.build();
        let mut automaton = original.clone();
        let from = state_name(from % table.state_count());
        let to = state_name(to % table.state_count());
        if automaton.add_transition(&from, symbol, &to).is_ok() {
            automaton.remove_transition(&from, symbol, &to).unwrap();
            prop_assert_eq!(automaton, original);
        } else {
            prop_assert!(original.targets(&from, symbol).any(|target| target == to));
            prop_assert_eq!(automaton, original);
        }
    }
}
