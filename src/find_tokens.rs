use crate::{internal::Cursor, Position, ScannerImpl, Token};

/// An iterator over the tokens of an input.
///
/// * `'s` is the lifetime of the scanner.
/// * `'h` is the lifetime of the input being scanned.
///
/// This iterator can be created with the [`crate::Scanner::find_iter`] method.
#[derive(Debug, Clone)]
pub struct FindTokens<'s, 'h> {
    scanner: &'s ScannerImpl,
    cursor: Cursor<'h>,
}

impl<'s, 'h> FindTokens<'s, 'h> {
    pub(crate) fn new(scanner: &'s ScannerImpl, input: &'h str) -> Self {
        Self {
            scanner,
            cursor: Cursor::new(input),
        }
    }

    /// The byte offset of the next unread character.
    #[inline]
    pub fn offset(&self) -> usize {
        self.cursor.offset()
    }

    /// Line and column of the next unread character.
    #[inline]
    pub fn position(&self) -> Position {
        self.cursor.position()
    }

    /// The part of the input not scanned yet.
    #[inline]
    pub fn rest(&self) -> &'h str {
        self.cursor.rest()
    }

    /// Returns the next token, or `None` at the end of the input.
    #[inline]
    pub fn next_token(&mut self) -> Option<Token> {
        self.scanner.next_token(&mut self.cursor)
    }
}

impl Iterator for FindTokens<'_, '_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

impl std::iter::FusedIterator for FindTokens<'_, '_> {}

#[cfg(test)]
mod tests {
    use crate::{ScannerBuilder, Span, TokenKind};

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_find_tokens() {
        init();
        let scanner = ScannerBuilder::new().build().unwrap();
        let mut find_iter = scanner.find_iter("x := 3.5\ny++");
        let token = find_iter.next().unwrap();
        assert_eq!(token.kind(), TokenKind::Identifier);
        assert_eq!(find_iter.offset(), 1);
        let kinds = find_iter.by_ref().map(|t| t.kind()).collect::<Vec<_>>();
        assert_eq!(
            kinds,
            vec![
                TokenKind::ShortAssign,
                TokenKind::Float,
                TokenKind::Identifier,
                TokenKind::Increment
            ]
        );
        assert_eq!(find_iter.rest(), "");
        assert_eq!(find_iter.position(), crate::Position::new(2, 4));
        assert!(find_iter.next().is_none());
    }

    #[test]
    fn test_token_spans() {
        let scanner = ScannerBuilder::new().build().unwrap();
        let input = "if a>=10 {";
        let spans = scanner
            .find_iter(input)
            .map(|t| (t.span(), t.position().column))
            .collect::<Vec<_>>();
        assert_eq!(
            spans,
            vec![
                (Span::new(0, 2), 1),
                (Span::new(3, 4), 4),
                (Span::new(4, 6), 5),
                (Span::new(6, 8), 7),
                (Span::new(9, 10), 10),
            ]
        );
    }
}
