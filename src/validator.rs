//! Structural checks and the determinism classifier.

use crate::{Automaton, StructuralError};

/// Checks the structural invariants of `automaton` and returns the first violation.
///
/// The checks run in this order: states non-empty, alphabet non-empty, initial state is a
/// state, every final state is a state, every transition source is a state, every transition
/// symbol is in the alphabet, every transition target is a state.
pub fn validate(automaton: &Automaton) -> Result<(), StructuralError> {
    if automaton.states.is_empty() {
        return Err(StructuralError::NoStates);
    }
    if automaton.alphabet.is_empty() {
        return Err(StructuralError::NoSymbols);
    }
    if !automaton.states.contains(&automaton.initial) {
        return Err(StructuralError::UnknownInitialState(
            automaton.initial.clone(),
        ));
    }
    if let Some(state) = automaton
        .finals
        .iter()
        .find(|state| !automaton.states.contains(*state))
    {
        return Err(StructuralError::UnknownFinalState(state.clone()));
    }
    if let Some(from) = automaton
        .transitions
        .keys()
        .find(|from| !automaton.states.contains(*from))
    {
        return Err(StructuralError::UnknownTransitionSource(from.clone()));
    }
    if let Some(symbol) = automaton
        .transitions
        .values()
        .flat_map(|row| row.keys())
        .find(|symbol| !automaton.alphabet.contains(*symbol))
    {
        return Err(StructuralError::UnknownTransitionSymbol(*symbol));
    }
    if let Some(to) = automaton
        .transitions
        .values()
        .flat_map(|row| row.values())
        .flatten()
        .find(|to| !automaton.states.contains(*to))
    {
        return Err(StructuralError::UnknownTransitionTarget(to.clone()));
    }
    Ok(())
}

/// Returns true if no (state, symbol) pair has more than one destination.
pub fn is_deterministic(automaton: &Automaton) -> bool {
    automaton
        .transitions
        .values()
        .flat_map(|row| row.values())
        .all(|targets| targets.len() <= 1)
}
