#![forbid(missing_docs)]
//! # `fasim`
//! The `fasim` crate models, edits and simulates finite automata and uses them to drive a lexical
//! scanner.
//!
//! An [`Automaton`] is a quintuple of states, alphabet, transition relation, initial state and
//! final states. It is deterministic if no state has more than one destination on any symbol,
//! otherwise it is simulated as a non-deterministic automaton by tracking the set of active
//! states. Every simulation produces a [`SimulationOutcome`] with a step-by-step trace and, for a
//! rejected input, a classified [`SimulationError`].
//!
//! Automata can be edited in place. Every edit checks its preconditions first and leaves the
//! automaton untouched on failure, so an automaton that was valid stays valid.
//!
//! The [`Scanner`] asks an identifier automaton, an integer automaton and a float automaton for
//! the longest accepted prefix of the remaining input and picks the winning token by a fixed
//! policy.
//!
//! # Example
//! ```rust
//! use fasim::{AutomatonBuilder, SimulationErrorKind};
//!
//! // Binary strings ending in "01".
//! let automaton = AutomatonBuilder::new()
//!     .states(["q0", "q1", "q2"])
//!     .alphabet(['0', '1'])
//!     .transition("q0", '0', "q1")
//!     .transition("q0", '1', "q0")
//!     .transition("q1", '0', "q1")
//!     .transition("q1", '1', "q2")
//!     .transition("q2", '0', "q1")
//!     .transition("q2", '1', "q0")
//!     .initial_state("q0")
//!     .final_states(["q2"])
//!     .build()
//!     .expect("AutomatonBuilder error");
//!
//! let outcome = automaton.simulate("1001");
//! assert!(outcome.accepted);
//! assert_eq!(outcome.trace.len(), 4);
//!
//! let outcome = automaton.simulate("100");
//! assert_eq!(outcome.error_kind(), Some(SimulationErrorKind::NotAccepting));
//!
//! assert_eq!(automaton.longest_accepted_prefix("10011").prefix(), "1001");
//! ```
//!
//! Scanning with the bundled automata:
//! ```rust
//! use fasim::{ScannerBuilder, TokenKind};
//!
//! let scanner = ScannerBuilder::new().build().expect("ScannerBuilder error");
//! let kinds = scanner
//!     .find_iter("x := 12.3.4")
//!     .map(|token| token.kind())
//!     .collect::<Vec<_>>();
//! assert_eq!(
//!     kinds,
//!     vec![TokenKind::Identifier, TokenKind::ShortAssign, TokenKind::Illegal]
//! );
//! ```
//!
//! # Crate features
//! - `dot_writer`: Enabled by default. Provides [`Automaton::render_dot`] which renders an
//!   automaton in graphviz dot format.

/// Module with the automaton model and its mutation API
mod automaton;
pub use automaton::{Automaton, AutomatonKind, LayoutPoint};

/// Module that provides an AutomatonBuilder type
mod automaton_builder;
pub use automaton_builder::AutomatonBuilder;

/// Module with the JSON exchange format
mod definition;
pub use definition::AutomatonDefinition;

/// Module with error definitions
mod errors;
pub use errors::{FasimError, FasimErrorKind, Result, StructuralError};

/// Module that provides a FindTokens type
mod find_tokens;
pub use find_tokens::FindTokens;

/// The module with internal implementation details.
mod internal;
pub(crate) use internal::ScannerImpl;

/// Module that provides a position type
mod position;
pub use position::Position;

/// Module with the longest accepted prefix search
mod prefix_match;
pub use prefix_match::{
    find_longest_prefix, longest_accepted_prefix, longest_accepted_prefix_incremental,
    PrefixMatch, PrefixStrategy,
};

/// The module with the scanner.
mod scanner;
pub use scanner::Scanner;

/// The module with the scanner builder.
mod scanner_builder;
pub use scanner_builder::{
    default_float_automaton, default_identifier_automaton, default_integer_automaton,
    ScannerBuilder,
};

/// Module with the editing session
mod session;
pub use session::Session;

/// Module with the simulator
mod simulation;
pub use simulation::{
    simulate, Edge, SimulationError, SimulationErrorKind, SimulationOutcome, Step,
};

/// Module that provides a Span type
mod span;
pub use span::Span;

/// Module that provides a Token type
mod token;
pub use token::{Token, TokenKind};

/// Module with the validator and the determinism classifier
mod validator;
pub use validator::{is_deterministic, validate};
