//! Tokens produced by the scanner.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::{Position, Span};

/// The kind of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    /// Text that no rule accepts, including malformed numerals and unterminated strings.
    Illegal,

    /// An identifier as accepted by the identifier automaton.
    Identifier,
    /// An integer literal.
    Int,
    /// A float literal.
    Float,
    /// A string literal. The token literal holds the unescaped content.
    String,

    /// `=`
    Assign,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `+=`
    PlusAssign,
    /// `-=`
    MinusAssign,
    /// `*=`
    MultAssign,
    /// `/=`
    DivAssign,
    /// `%=`
    ModAssign,
    /// `++`
    Increment,
    /// `:=`
    ShortAssign,
    /// `==`
    Eq,
    /// `!=`
    Neq,
    /// `<`
    Lt,
    /// `<=`
    Lte,
    /// `>`
    Gt,
    /// `>=`
    Gte,
    /// `&&`
    And,
    /// `||`
    Or,
    /// `!`
    Exclamation,
    /// `&`
    Ampersand,

    /// `(`
    #[serde(rename = "LPAREN")]
    LParen,
    /// `)`
    #[serde(rename = "RPAREN")]
    RParen,
    /// `{`
    #[serde(rename = "LBRACE")]
    LBrace,
    /// `}`
    #[serde(rename = "RBRACE")]
    RBrace,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `.`
    Dot,
    /// `:`
    Colon,

    /// `package`
    Package,
    /// `import`
    Import,
    /// `const`
    Const,
    /// `type`
    Type,
    /// `struct`
    Struct,
    /// `func`
    Func,
    /// `var`
    Var,
    /// `return`
    Return,
    /// `if`
    If,
    /// `else`
    Else,
    /// `for`
    For,
}

static KEYWORDS: LazyLock<FxHashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    FxHashMap::from_iter([
        ("package", TokenKind::Package),
        ("import", TokenKind::Import),
        ("const", TokenKind::Const),
        ("type", TokenKind::Type),
        ("struct", TokenKind::Struct),
        ("func", TokenKind::Func),
        ("var", TokenKind::Var),
        ("return", TokenKind::Return),
        ("if", TokenKind::If),
        ("else", TokenKind::Else),
        ("for", TokenKind::For),
    ])
});

impl TokenKind {
    /// The keyword kind for `ident`, or [`TokenKind::Identifier`].
    ///
    /// Type names such as `int` or `string` are identifiers.
    pub fn lookup_identifier(ident: &str) -> TokenKind {
        KEYWORDS
            .get(ident)
            .copied()
            .unwrap_or(TokenKind::Identifier)
    }

    /// True for the reserved words.
    pub fn is_keyword(&self) -> bool {
        KEYWORDS.values().any(|kind| kind == self)
    }
}

/// A token found by the scanner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    kind: TokenKind,
    literal: String,
    span: Span,
    position: Position,
}

impl Token {
    pub(crate) fn new(kind: TokenKind, literal: String, span: Span, position: Position) -> Self {
        Self {
            kind,
            literal,
            span,
            position,
        }
    }

    /// The kind of the token.
    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The token text. For string literals this is the content with escapes resolved.
    #[inline]
    pub fn literal(&self) -> &str {
        &self.literal
    }

    /// The byte span of the token in the input.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Line and column of the first character of the token.
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:?} '{}' at {}",
            self.kind,
            self.literal.escape_default(),
            self.position
        )
    }
}
