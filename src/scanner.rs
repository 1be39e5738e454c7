use crate::{internal::Cursor, FindTokens, ScannerImpl, Token, TokenKind};

/// A lexical scanner whose identifiers and numbers are recognized by finite automata.
///
/// At every token boundary the scanner asks the identifier automaton, or for a leading digit both
/// the integer and the float automaton, for their longest accepted prefix of the remaining input
/// and consumes exactly the winning prefix. Operators, punctuation, strings and comments are
/// recognized by hand.
///
/// The scanner is immutable after construction and can be shared between threads. Each call to
/// [`Scanner::find_iter`] creates an independent iterator.
///
/// Use the [`crate::ScannerBuilder`] to create a scanner.
#[derive(Debug, Clone)]
pub struct Scanner {
    pub(crate) inner: ScannerImpl,
}

impl Scanner {
    /// Returns an iterator over the tokens of `input`.
    pub fn find_iter<'s, 'h>(&'s self, input: &'h str) -> FindTokens<'s, 'h> {
        FindTokens::new(&self.inner, input)
    }

    /// Scans the whole input.
    pub fn tokenize(&self, input: &str) -> Vec<Token> {
        self.find_iter(input).collect()
    }

    /// Classifies the numeral at the start of `text` and returns its kind and text.
    ///
    /// Returns `None` if `text` does not start with a digit.
    pub fn classify_number<'h>(&self, text: &'h str) -> Option<(TokenKind, &'h str)> {
        if !text.starts_with(|c: char| c.is_ascii_digit()) {
            return None;
        }
        let (kind, len) = self.inner.classify_number(text);
        Some((kind, &text[..len]))
    }

    /// Scans a single token at the start of `text`, skipping leading whitespace and comments.
    pub fn scan_one(&self, text: &str) -> Option<Token> {
        self.inner.next_token(&mut Cursor::new(text))
    }
}
