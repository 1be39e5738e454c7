use thiserror::Error;

/// The result type for the `fasim` crate.
pub type Result<T> = std::result::Result<T, FasimError>;

/// The error type for the `fasim` crate.
#[derive(Error, Debug)]
pub struct FasimError {
    /// The source of the error.
    pub source: Box<FasimErrorKind>,
}

impl FasimError {
    /// Create a new `FasimError`.
    pub fn new(kind: FasimErrorKind) -> Self {
        FasimError {
            source: Box::new(kind),
        }
    }

    /// Returns the structural violation if this error was caused by one.
    pub fn as_structural(&self) -> Option<&StructuralError> {
        match self.source.as_ref() {
            FasimErrorKind::Structural(e) => Some(e),
            _ => None,
        }
    }
}

impl std::fmt::Display for FasimError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}

/// The error kind type.
#[derive(Error, Debug)]
pub enum FasimErrorKind {
    /// The automaton violates a structural invariant or a mutation was rejected.
    #[error(transparent)]
    Structural(StructuralError),

    /// A std::io error occurred.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    /// The automaton definition could not be read or written as JSON.
    #[error("Automaton definition error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The session does not hold an automaton.
    #[error("No automaton loaded")]
    NoAutomaton,
}

impl From<StructuralError> for FasimError {
    fn from(error: StructuralError) -> Self {
        FasimError::new(FasimErrorKind::Structural(error))
    }
}

impl From<std::io::Error> for FasimError {
    fn from(error: std::io::Error) -> Self {
        FasimError::new(FasimErrorKind::IoError(error))
    }
}

impl From<serde_json::Error> for FasimError {
    fn from(error: serde_json::Error) -> Self {
        FasimError::new(FasimErrorKind::JsonError(error))
    }
}

/// A violation of the structural well-formedness of an automaton.
///
/// Returned by the validator and by every editing operation. An operation that returns one of
/// these has left the automaton untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructuralError {
    /// The set of states is empty.
    #[error("The automaton must have at least one state")]
    NoStates,

    /// The alphabet is empty.
    #[error("The automaton must have at least one symbol in its alphabet")]
    NoSymbols,

    /// The initial state is not a member of the states.
    #[error("Initial state '{0}' is not a state of the automaton")]
    UnknownInitialState(String),

    /// A final state is not a member of the states.
    #[error("Final state '{0}' is not a state of the automaton")]
    UnknownFinalState(String),

    /// A transition starts in a state that does not exist.
    #[error("Transition source '{0}' is not a state of the automaton")]
    UnknownTransitionSource(String),

    /// A transition is labelled with a symbol outside the alphabet.
    #[error("Transition symbol '{0}' is not in the alphabet")]
    UnknownTransitionSymbol(char),

    /// A transition leads to a state that does not exist.
    #[error("Transition target '{0}' is not a state of the automaton")]
    UnknownTransitionTarget(String),

    /// A state name was empty.
    #[error("State name must not be empty")]
    EmptyStateName,

    /// A state with this name already exists.
    #[error("State '{0}' already exists")]
    DuplicateState(String),

    /// No state with this name exists.
    #[error("State '{0}' does not exist")]
    UnknownState(String),

    /// The state is the only one left and cannot be removed.
    #[error("Cannot remove '{0}', the only state of the automaton")]
    LastState(String),

    /// The symbol is not in the alphabet.
    #[error("Symbol '{0}' is not in the alphabet")]
    UnknownSymbol(char),

    /// The transition is already present.
    #[error("Transition {from} --{symbol}--> {to} already exists")]
    DuplicateTransition {
        /// Source state
        from: String,
        /// Symbol consumed
        symbol: char,
        /// Target state
        to: String,
    },

    /// The transition is not present.
    #[error("Transition {from} --{symbol}--> {to} does not exist")]
    UnknownTransition {
        /// Source state
        from: String,
        /// Symbol consumed
        symbol: char,
        /// Target state
        to: String,
    },

    /// The definition lists a symbol twice in its alphabet.
    #[error("Symbol '{0}' is listed twice in the alphabet")]
    DuplicateSymbol(String),

    /// A symbol in the definition is not exactly one character long.
    #[error("Symbol '{0}' must be exactly one character")]
    MalformedSymbol(String),
}
