use log::debug;

use crate::{scanner::Scanner, Automaton, PrefixStrategy, Result, ScannerImpl};

const IDENTIFIER_DEFINITION: &str = include_str!("../definitions/identifier.json");
const INTEGER_DEFINITION: &str = include_str!("../definitions/integer.json");
const FLOAT_DEFINITION: &str = include_str!("../definitions/float.json");

/// The bundled identifier automaton, `[A-Za-z_][A-Za-z0-9_]*`.
pub fn default_identifier_automaton() -> Result<Automaton> {
    Automaton::from_json(IDENTIFIER_DEFINITION)
}

/// The bundled integer automaton, `0|[1-9][0-9]*`.
pub fn default_integer_automaton() -> Result<Automaton> {
    Automaton::from_json(INTEGER_DEFINITION)
}

/// The bundled float automaton. It accepts a fraction with an optional exponent, like `.5`,
/// `3.14` or `1.5e-3`, and an integer part with an exponent, like `1e10`.
pub fn default_float_automaton() -> Result<Automaton> {
    Automaton::from_json(FLOAT_DEFINITION)
}

/// A builder for creating a scanner.
///
/// Automata that are not set explicitly are taken from the bundled definitions.
#[derive(Debug, Clone, Default)]
pub struct ScannerBuilder {
    identifier: Option<Automaton>,
    integer: Option<Automaton>,
    float: Option<Automaton>,
    strategy: PrefixStrategy,
}

impl ScannerBuilder {
    /// Creates a new scanner builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the automaton that recognizes identifiers.
    pub fn identifier_automaton(mut self, automaton: Automaton) -> Self {
        self.identifier = Some(automaton);
        self
    }

    /// Sets the automaton that recognizes integers.
    pub fn integer_automaton(mut self, automaton: Automaton) -> Self {
        self.integer = Some(automaton);
        self
    }

    /// Sets the automaton that recognizes floats.
    pub fn float_automaton(mut self, automaton: Automaton) -> Self {
        self.float = Some(automaton);
        self
    }

    /// Loads all three bundled automata, replacing automata set before.
    pub fn with_default_automata(self) -> Result<Self> {
        Ok(self
            .identifier_automaton(default_identifier_automaton()?)
            .integer_automaton(default_integer_automaton()?)
            .float_automaton(default_float_automaton()?))
    }

    /// Selects how the longest accepted prefixes are searched.
    pub fn prefix_strategy(mut self, strategy: PrefixStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Builds the scanner from the scanner builder.
    pub fn build(self) -> Result<Scanner> {
        let identifier = match self.identifier {
            Some(automaton) => automaton,
            None => default_identifier_automaton()?,
        };
        let integer = match self.integer {
            Some(automaton) => automaton,
            None => default_integer_automaton()?,
        };
        let float = match self.float {
            Some(automaton) => automaton,
            None => default_float_automaton()?,
        };
        debug!(
            "Building scanner: identifier {}, integer {}, float {}, {:?} prefix search",
            identifier.kind().short_name(),
            integer.kind().short_name(),
            float.kind().short_name(),
            self.strategy
        );
        Ok(Scanner {
            inner: ScannerImpl {
                identifier,
                integer,
                float,
                strategy: self.strategy,
            },
        })
    }
}
