//! Token kinds and the classification overlay.
//!
//! The state machine assigns every lexeme a generic kind from its shape
//! alone. The overlay then looks the lexeme up by exact spelling and lets
//! keywords, builtin operators, builtin types and builtin functions take
//! precedence over the generic kind.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Highlighting class of a lexeme.
///
/// The set is closed: these are the only kinds the lexer emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// Reserved word or reserved symbol sequence.
    Keyword,
    /// Builtin operator, type or function.
    Builtin,
    /// Module prefix such as `Board.`.
    Qualifier,
    /// Type or constructor name, or an operator starting with `:`.
    TypeOrConstructorRef,
    /// Variable name or ordinary operator.
    Identifier,
    /// Hexadecimal literal.
    IntegerLiteral,
    /// Decimal or octal literal.
    NumberLiteral,
    /// String or character literal, or one line of a string.
    StringLiteral,
    /// Unterminated string or malformed character literal.
    StringError,
    /// Line comment or block comment segment.
    Comment,
    /// Pragma comment segment (`{-# ... #-}`).
    MetaComment,
    /// Unrecognized input.
    Error,
    /// No visual class: whitespace and brackets.
    None,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 13] = [
        TokenKind::Keyword,
        TokenKind::Builtin,
        TokenKind::Qualifier,
        TokenKind::TypeOrConstructorRef,
        TokenKind::Identifier,
        TokenKind::IntegerLiteral,
        TokenKind::NumberLiteral,
        TokenKind::StringLiteral,
        TokenKind::StringError,
        TokenKind::Comment,
        TokenKind::MetaComment,
        TokenKind::Error,
        TokenKind::None,
    ];

    /// Returns the style tag the renderer uses for this kind.
    ///
    /// `None` has no style.
    ///
    /// # Example
    ///
    /// ```
    /// use bogl_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::TypeOrConstructorRef.style(), Some("variable-2"));
    /// assert_eq!(TokenKind::StringError.style(), Some("string error"));
    /// assert_eq!(TokenKind::None.style(), None);
    /// ```
    pub fn style(self) -> Option<&'static str> {
        let style = match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Builtin => "builtin",
            TokenKind::Qualifier => "qualifier",
            TokenKind::TypeOrConstructorRef => "variable-2",
            TokenKind::Identifier => "variable",
            TokenKind::IntegerLiteral => "integer",
            TokenKind::NumberLiteral => "number",
            TokenKind::StringLiteral => "string",
            TokenKind::StringError => "string error",
            TokenKind::Comment => "comment",
            TokenKind::MetaComment => "meta",
            TokenKind::Error => "error",
            TokenKind::None => return None,
        };
        Some(style)
    }

    /// Returns true for the two error kinds.
    pub fn is_error(self) -> bool {
        matches!(self, TokenKind::Error | TokenKind::StringError)
    }

    /// Returns true for comment kinds.
    pub fn is_comment(self) -> bool {
        matches!(self, TokenKind::Comment | TokenKind::MetaComment)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.style().unwrap_or("none"))
    }
}

/// Error returned when a style tag names no token kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown token style: {0:?}")]
pub struct ParseTokenKindError(pub String);

impl FromStr for TokenKind {
    type Err = ParseTokenKindError;

    /// Parses a style tag as produced by [`TokenKind::style`], or `none`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "none" {
            return Ok(TokenKind::None);
        }
        TokenKind::ALL
            .into_iter()
            .find(|kind| kind.style() == Some(s))
            .ok_or_else(|| ParseTokenKindError(s.to_string()))
    }
}

/// A classified lexeme.
///
/// The lexeme borrows the line it was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Token<'a> {
    /// Final kind after the overlay.
    pub kind: TokenKind,
    /// Exact text consumed for this token.
    pub lexeme: &'a str,
}

impl<'a> Token<'a> {
    /// Creates a token.
    pub fn new(kind: TokenKind, lexeme: &'a str) -> Self {
        Self { kind, lexeme }
    }

    /// Returns the style tag of this token's kind.
    pub fn style(&self) -> Option<&'static str> {
        self.kind.style()
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.kind, self.lexeme)
    }
}

/// Reserved words and reserved symbol sequences.
pub const KEYWORDS: &[&str] = &[
    "do", "if", "then", "else", "in", "let", "of", "type", "where", "game", "break", "while",
    "..", ":", "\\", "<-", "->", "!", "=",
];

/// Builtin operators.
pub const BUILTIN_OPERATORS: &[&str] = &[
    "&&", "+", "-", ".", "/", "/=", "<", "<=", "==", ">", ">=", "||", "*", "?",
];

/// Builtin types and constructors.
pub const BUILTIN_TYPES: &[&str] = &[
    "Bool", "False", "True", "Int", "Board", "Array", "Input", "Player", "Content",
];

/// Builtin functions.
pub const BUILTIN_FUNCTIONS: &[&str] = &[
    "input",
    "place",
    "countBoard",
    "countCol",
    "countRow",
    "countDiag",
    "isFull",
    "inARow",
    "not",
    "or",
    "and",
];

/// Exact-spelling overrides, built on first use and never modified.
static CLASSIFICATION_TABLE: LazyLock<ClassificationTable> = LazyLock::new(|| {
    let mut table = ClassificationTable::default();
    table.insert_all(TokenKind::Keyword, KEYWORDS);
    table.insert_all(TokenKind::Builtin, BUILTIN_OPERATORS);
    table.insert_all(TokenKind::Builtin, BUILTIN_TYPES);
    table.insert_all(TokenKind::Builtin, BUILTIN_FUNCTIONS);
    table
});

/// Mapping from exact lexeme spelling to the kind that overrides the
/// generic classification.
#[derive(Debug, Default)]
pub struct ClassificationTable {
    words: FxHashMap<&'static str, TokenKind>,
}

impl ClassificationTable {
    /// Returns the process-wide table.
    pub fn global() -> &'static ClassificationTable {
        &CLASSIFICATION_TABLE
    }

    fn insert_all(&mut self, kind: TokenKind, words: &[&'static str]) {
        for word in words {
            self.words.insert(*word, kind);
        }
    }

    /// Looks up a lexeme. No prefix matching is done.
    pub fn get(&self, lexeme: &str) -> Option<TokenKind> {
        self.words.get(lexeme).copied()
    }

    /// Returns the overriding kind if `lexeme` is listed, else `generic`.
    #[inline]
    pub fn classify(&self, lexeme: &str, generic: TokenKind) -> TokenKind {
        self.get(lexeme).unwrap_or(generic)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates over all entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, TokenKind)> + '_ {
        self.words.iter().map(|(word, kind)| (*word, *kind))
    }
}

/// Looks up a lexeme in the global overlay.
///
/// # Example
///
/// ```
/// use bogl_lex::{classify, TokenKind};
///
/// assert_eq!(classify("while"), Some(TokenKind::Keyword));
/// assert_eq!(classify("inARow"), Some(TokenKind::Builtin));
/// assert_eq!(classify("inA"), None);
/// ```
pub fn classify(lexeme: &str) -> Option<TokenKind> {
    ClassificationTable::global().get(lexeme)
}

/// Returns true if `lexeme` is a keyword.
pub fn is_keyword(lexeme: &str) -> bool {
    classify(lexeme) == Some(TokenKind::Keyword)
}

/// Returns true if `lexeme` is a builtin operator, type or function.
pub fn is_builtin(lexeme: &str) -> bool {
    classify(lexeme) == Some(TokenKind::Builtin)
}
