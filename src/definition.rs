//! The JSON exchange format of automata.
//!
//! ```json
//! {
//!   "states": ["q0", "q1"],
//!   "alphabet": ["a", "b"],
//!   "transitions": { "q0": { "a": ["q1"] } },
//!   "initialState": "q0",
//!   "finalStates": ["q1"],
//!   "positions": { "q0": { "x": 10.0, "y": 20.0 } }
//! }
//! ```
//!
//! Symbols are strings of exactly one character. An empty destination array means that no
//! transition is defined. Loading always validates the automaton.

use std::{
    collections::{BTreeMap, BTreeSet},
    fs,
    io::Read,
    path::Path,
};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::{Automaton, LayoutPoint, Result, StructuralError};

/// The serialized form of an [`Automaton`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutomatonDefinition {
    /// The state names.
    pub states: Vec<String>,
    /// The alphabet, one character per entry.
    pub alphabet: Vec<String>,
    /// Transitions keyed by source state and symbol.
    #[serde(default)]
    pub transitions: BTreeMap<String, BTreeMap<String, Vec<String>>>,
    /// The initial state.
    pub initial_state: String,
    /// The final states.
    #[serde(default)]
    pub final_states: Vec<String>,
    /// Optional layout coordinates per state.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub positions: BTreeMap<String, LayoutPoint>,
}

fn parse_symbol(symbol: &str) -> std::result::Result<char, StructuralError> {
    let mut chars = symbol.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(StructuralError::MalformedSymbol(symbol.to_string())),
    }
}

impl TryFrom<AutomatonDefinition> for Automaton {
    type Error = StructuralError;

    fn try_from(definition: AutomatonDefinition) -> std::result::Result<Self, Self::Error> {
        let AutomatonDefinition {
            states: state_list,
            alphabet: symbol_list,
            transitions: transition_map,
            initial_state,
            final_states,
            positions,
        } = definition;

        if state_list.is_empty() {
            return Err(StructuralError::NoStates);
        }
        if symbol_list.is_empty() {
            return Err(StructuralError::NoSymbols);
        }

        let mut states = BTreeSet::new();
        for state in state_list {
            if states.contains(&state) {
                return Err(StructuralError::DuplicateState(state));
            }
            states.insert(state);
        }

        let mut alphabet = BTreeSet::new();
        for symbol in &symbol_list {
            if !alphabet.insert(parse_symbol(symbol)?) {
                return Err(StructuralError::DuplicateSymbol(symbol.clone()));
            }
        }

        let mut transitions = BTreeMap::new();
        for (from, row) in transition_map {
            let mut parsed_row = BTreeMap::new();
            for (symbol, targets) in row {
                let symbol = parse_symbol(&symbol)?;
                if !targets.is_empty() {
                    parsed_row.insert(symbol, targets.into_iter().collect::<BTreeSet<_>>());
                }
            }
            transitions.insert(from, parsed_row);
        }

        let layout = positions
            .into_iter()
            .filter(|(state, _)| {
                let known = states.contains(state);
                if !known {
                    warn!("Dropping layout of unknown state '{}'", state);
                }
                known
            })
            .collect();

        Automaton::from_parts(
            states,
            alphabet,
            transitions,
            initial_state,
            final_states.into_iter().collect(),
            layout,
        )
        .into_validated()
    }
}

impl From<&Automaton> for AutomatonDefinition {
    fn from(automaton: &Automaton) -> Self {
        let transitions: BTreeMap<String, BTreeMap<String, Vec<String>>> = automaton
            .transitions
            .iter()
            .filter(|(_, row)| !row.is_empty())
            .map(|(from, row)| {
                let row: BTreeMap<String, Vec<String>> = row
                    .iter()
                    .map(|(symbol, targets)| {
                        (symbol.to_string(), targets.iter().cloned().collect())
                    })
                    .collect();
                (from.clone(), row)
            })
            .collect();
        Self {
            states: automaton.states.iter().cloned().collect(),
            alphabet: automaton.alphabet.iter().map(char::to_string).collect(),
            transitions,
            initial_state: automaton.initial.clone(),
            final_states: automaton.finals.iter().cloned().collect(),
            positions: automaton.layout.clone(),
        }
    }
}

impl Automaton {
    /// Reads and validates an automaton from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let definition: AutomatonDefinition = serde_json::from_str(json)?;
        Ok(Automaton::try_from(definition)?)
    }

    /// Reads and validates an automaton from a JSON reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let definition: AutomatonDefinition = serde_json::from_reader(reader)?;
        Ok(Automaton::try_from(definition)?)
    }

    /// Reads and validates an automaton from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        debug!("Loading automaton from {}", path.as_ref().display());
        let file = fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Returns the exchange format representation.
    pub fn to_definition(&self) -> AutomatonDefinition {
        AutomatonDefinition::from(self)
    }

    /// Serializes the automaton as pretty printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_definition())?)
    }

    /// Writes the automaton as JSON to a file.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        debug!("Saving automaton to {}", path.as_ref().display());
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
