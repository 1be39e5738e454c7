use std::collections::BTreeSet;

use crate::{SimulationError, Step};

/// A stepping strategy over an automaton.
///
/// A runner starts in the initial configuration and consumes one symbol per call to
/// [`Runner::step`]. After a failed step the runner is left in the configuration it had before
/// the failing symbol.
pub(crate) trait Runner {
    /// Consumes `symbol` found at character `position` of the input.
    fn step(&mut self, position: usize, symbol: char) -> Result<Step, SimulationError>;

    /// True if the current configuration contains a final state.
    fn is_accepting(&self) -> bool;

    /// The currently active states.
    fn active_states(&self) -> BTreeSet<String>;
}
