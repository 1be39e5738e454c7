use crate::Position;

/// Read position of the scanner.
///
/// Tracks the byte offset together with the 1-based line and column of the next character.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'h> {
    input: &'h str,
    offset: usize,
    line: usize,
    column: usize,
}

impl<'h> Cursor<'h> {
    pub(crate) fn new(input: &'h str) -> Self {
        Self {
            input,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    #[inline]
    pub(crate) fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub(crate) fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// The unread part of the input.
    #[inline]
    pub(crate) fn rest(&self) -> &'h str {
        &self.input[self.offset..]
    }

    /// The input between `start` and the current offset.
    #[inline]
    pub(crate) fn slice_from(&self, start: usize) -> &'h str {
        &self.input[start..self.offset]
    }

    #[inline]
    pub(crate) fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    #[inline]
    pub(crate) fn peek_second(&self) -> Option<char> {
        self.rest().chars().nth(1)
    }

    /// Consumes one character.
    pub(crate) fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.offset += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Consumes `len` bytes. `len` must end on a character boundary.
    pub(crate) fn advance(&mut self, len: usize) {
        let end = self.offset + len;
        while self.offset < end && self.bump().is_some() {}
    }

    /// Consumes characters while `predicate` holds.
    pub(crate) fn eat_while(&mut self, predicate: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&predicate) {
            self.bump();
        }
    }
}
