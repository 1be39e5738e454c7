//! Raw, automaton free scans of number-like text.
//!
//! These measure how far a numeral extends so the scanner can tell a valid number from a
//! malformed one. All characters involved are ASCII, so character and byte lengths agree.

#[inline]
fn is_numeral_char(c: char) -> bool {
    c.is_ascii_digit() || c == '_'
}

fn count_while(text: &str, predicate: impl Fn(char) -> bool) -> usize {
    text.chars().take_while(|c| predicate(*c)).count()
}

/// Length of `digits [. digits] [(e|E) [+|-] digits]` at the start of `text`.
/// Underscores count as digits.
pub(crate) fn number_like_len(text: &str) -> usize {
    let mut len = count_while(text, is_numeral_char);
    if text[len..].starts_with('.') {
        len += 1;
        len += count_while(&text[len..], is_numeral_char);
    }
    if text[len..].starts_with(['e', 'E']) {
        len += 1;
        if text[len..].starts_with(['+', '-']) {
            len += 1;
        }
        len += count_while(&text[len..], is_numeral_char);
    }
    len
}

/// If `tail` continues a numeral with another dot group, like the `.4` of `12.3.4`, returns the
/// length of that continuation.
pub(crate) fn malformed_tail_len(tail: &str) -> Option<usize> {
    let mut chars = tail.chars();
    if chars.next() != Some('.') {
        return None;
    }
    match chars.next() {
        Some(c) if is_numeral_char(c) || c == 'e' || c == 'E' => Some(
            1 + count_while(&tail[1..], |c| {
                is_numeral_char(c) || matches!(c, 'e' | 'E' | '+' | '-')
            }),
        ),
        _ => None,
    }
}
