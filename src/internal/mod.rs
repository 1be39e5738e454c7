/// Module with the cursor the scanner moves over its input.
mod cursor;
pub(crate) use cursor::Cursor;

/// Module that provides single-state stepping for deterministic automata.
mod dfa_runner;
pub(crate) use dfa_runner::DfaRunner;

/// Module with conversion to graphviz dot format
#[cfg(feature = "dot_writer")]
pub(crate) mod dot;

/// Module that tracks the longest accepted prefix during a single pass.
pub(crate) mod matching_state;
pub(crate) use matching_state::MatchingState;

/// Module that provides active-set stepping for non-deterministic automata.
mod nfa_runner;
pub(crate) use nfa_runner::NfaRunner;

/// Module with the raw scan of number-like text.
pub(crate) mod number_scan;

/// Module with the trait shared by the stepping strategies.
mod runner;
pub(crate) use runner::Runner;

/// Module that provides the token recognition of the scanner.
pub(crate) mod scanner_impl;
pub(crate) use scanner_impl::ScannerImpl;
