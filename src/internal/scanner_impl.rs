use log::trace;

use crate::{
    prefix_match::find_longest_prefix, Automaton, PrefixMatch, PrefixStrategy, Span, Token,
    TokenKind,
};

use super::{number_scan, Cursor};

/// Token recognition shared by all iterators of one scanner.
///
/// Identifiers and numbers are recognized by automata, everything else by hand.
#[derive(Debug, Clone)]
pub(crate) struct ScannerImpl {
    pub(crate) identifier: Automaton,
    pub(crate) integer: Automaton,
    pub(crate) float: Automaton,
    pub(crate) strategy: PrefixStrategy,
}

impl ScannerImpl {
    #[inline]
    fn longest<'h>(&self, automaton: &Automaton, text: &'h str) -> PrefixMatch<'h> {
        find_longest_prefix(automaton, text, self.strategy)
    }

    /// Scans the next token and moves the cursor behind it.
    /// Whitespace and comments are skipped. Returns `None` at the end of the input.
    pub(crate) fn next_token(&self, cursor: &mut Cursor<'_>) -> Option<Token> {
        loop {
            cursor.eat_while(|c| matches!(c, ' ' | '\t' | '\n' | '\r'));
            let c = cursor.peek()?;
            if c == '/' {
                match cursor.peek_second() {
                    Some('/') => {
                        cursor.eat_while(|c| c != '\n');
                        continue;
                    }
                    Some('*') => {
                        Self::skip_block_comment(cursor);
                        continue;
                    }
                    _ => {}
                }
            }
            let start = cursor.offset();
            let position = cursor.position();
            let (kind, content) = self.scan_token(cursor, c);
            let literal = content.unwrap_or_else(|| cursor.slice_from(start).to_string());
            let token = Token::new(kind, literal, Span::new(start, cursor.offset()), position);
            trace!("Token {}", token);
            return Some(token);
        }
    }

    /// Scans one token starting with `c`.
    /// Returns the kind and, for string literals, the unescaped content.
    fn scan_token(&self, cursor: &mut Cursor<'_>, c: char) -> (TokenKind, Option<String>) {
        let kind = match c {
            '=' => Self::operator(cursor, TokenKind::Assign, &[('=', TokenKind::Eq)]),
            '+' => Self::operator(
                cursor,
                TokenKind::Plus,
                &[('=', TokenKind::PlusAssign), ('+', TokenKind::Increment)],
            ),
            '-' => Self::operator(cursor, TokenKind::Minus, &[('=', TokenKind::MinusAssign)]),
            '*' => Self::operator(cursor, TokenKind::Asterisk, &[('=', TokenKind::MultAssign)]),
            '/' => Self::operator(cursor, TokenKind::Slash, &[('=', TokenKind::DivAssign)]),
            '%' => Self::operator(cursor, TokenKind::Percent, &[('=', TokenKind::ModAssign)]),
            '!' => Self::operator(cursor, TokenKind::Exclamation, &[('=', TokenKind::Neq)]),
            '<' => Self::operator(cursor, TokenKind::Lt, &[('=', TokenKind::Lte)]),
            '>' => Self::operator(cursor, TokenKind::Gt, &[('=', TokenKind::Gte)]),
            '&' => Self::operator(cursor, TokenKind::Ampersand, &[('&', TokenKind::And)]),
            '|' => Self::operator(cursor, TokenKind::Illegal, &[('|', TokenKind::Or)]),
            ':' => Self::operator(cursor, TokenKind::Colon, &[('=', TokenKind::ShortAssign)]),
            '(' => Self::operator(cursor, TokenKind::LParen, &[]),
            ')' => Self::operator(cursor, TokenKind::RParen, &[]),
            '{' => Self::operator(cursor, TokenKind::LBrace, &[]),
            '}' => Self::operator(cursor, TokenKind::RBrace, &[]),
            ',' => Self::operator(cursor, TokenKind::Comma, &[]),
            ';' => Self::operator(cursor, TokenKind::Semicolon, &[]),
            '.' => self.scan_leading_dot(cursor),
            '"' => return Self::scan_string(cursor),
            c if c.is_ascii_digit() => {
                let (kind, len) = self.classify_number(cursor.rest());
                cursor.advance(len);
                kind
            }
            c if c.is_alphabetic() || c == '_' => self.scan_identifier(cursor),
            _ => {
                cursor.bump();
                TokenKind::Illegal
            }
        };
        (kind, None)
    }

    /// Consumes one character and, if the next one completes a longer operator, that one too.
    fn operator(
        cursor: &mut Cursor<'_>,
        single: TokenKind,
        pairs: &[(char, TokenKind)],
    ) -> TokenKind {
        cursor.bump();
        let Some(next) = cursor.peek() else {
            return single;
        };
        match pairs.iter().find(|(c, _)| *c == next) {
            Some((_, kind)) => {
                cursor.bump();
                *kind
            }
            None => single,
        }
    }

    fn scan_identifier(&self, cursor: &mut Cursor<'_>) -> TokenKind {
        let found = self.longest(&self.identifier, cursor.rest());
        if found.is_empty() {
            cursor.bump();
            return TokenKind::Illegal;
        }
        cursor.advance(found.len());
        TokenKind::lookup_identifier(found.prefix())
    }

    /// A dot either starts a float like `.5` or is a dot on its own.
    fn scan_leading_dot(&self, cursor: &mut Cursor<'_>) -> TokenKind {
        let found = self.longest(&self.float, cursor.rest());
        if found.is_empty() {
            cursor.bump();
            TokenKind::Dot
        } else {
            cursor.advance(found.len());
            TokenKind::Float
        }
    }

    /// Decides what the numeral at the start of `text` is and how many bytes it spans.
    ///
    /// The integer and the float automaton both run on `text`:
    /// * A raw numeral scan longer than both results makes the whole numeral illegal.
    /// * Otherwise the strictly longer float wins, else an accepted integer.
    /// * A winner followed by another dot group (`12.3` in front of `.4`) makes the winner and
    ///   that group one illegal token.
    pub(crate) fn classify_number(&self, text: &str) -> (TokenKind, usize) {
        let float = self.longest(&self.float, text);
        let integer = self.longest(&self.integer, text);
        let raw = number_scan::number_like_len(text);
        trace!(
            "Numeral lengths: float {}, integer {}, raw {}",
            float.len(),
            integer.len(),
            raw
        );
        if raw > float.len() && raw > integer.len() {
            return (TokenKind::Illegal, raw);
        }
        let (kind, len) = if float.len() > integer.len() {
            (TokenKind::Float, float.len())
        } else if integer.is_accepted() {
            (TokenKind::Int, integer.len())
        } else {
            return (
                TokenKind::Illegal,
                text.chars().next().map_or(0, char::len_utf8),
            );
        };
        // `float` is already the longest float over the combined text, so the continuation can
        // not extend the winner into a valid float.
        match number_scan::malformed_tail_len(&text[len..]) {
            Some(tail) => (TokenKind::Illegal, len + tail),
            None => (kind, len),
        }
    }

    fn skip_block_comment(cursor: &mut Cursor<'_>) {
        cursor.advance(2);
        while let Some(c) = cursor.bump() {
            if c == '*' && cursor.peek() == Some('/') {
                cursor.bump();
                return;
            }
        }
    }

    /// Scans a string literal. A literal that is not closed before the line end is illegal.
    fn scan_string(cursor: &mut Cursor<'_>) -> (TokenKind, Option<String>) {
        cursor.bump();
        let mut content = String::new();
        loop {
            match cursor.peek() {
                None | Some('\n') => return (TokenKind::Illegal, None),
                Some('"') => {
                    cursor.bump();
                    return (TokenKind::String, Some(content));
                }
                Some('\\') => {
                    cursor.bump();
                    match cursor.peek() {
                        None | Some('\n') => return (TokenKind::Illegal, None),
                        Some(escaped) => {
                            cursor.bump();
                            match escaped {
                                'n' => content.push('\n'),
                                't' => content.push('\t'),
                                'r' => content.push('\r'),
                                '\\' => content.push('\\'),
                                '"' => content.push('"'),
                                other => {
                                    content.push('\\');
                                    content.push(other);
                                }
                            }
                        }
                    }
                }
                Some(c) => {
                    cursor.bump();
                    content.push(c);
                }
            }
        }
    }
}
