//! Character classes for the BoGL lexer.
//!
//! Every predicate here is a plain `fn(char) -> bool`, so it can be handed
//! straight to [`CharStream::eat`](crate::stream::CharStream::eat) and
//! [`CharStream::eat_while`](crate::stream::CharStream::eat_while).

/// Lowest code point accepted as an extended identifier character.
pub const EXTENDED_IDENT_START: char = '\u{a1}';

/// Characters that form operator lexemes.
pub const OPERATOR_SYMBOLS: &str = "-!#$%&*+./<=>?@\\^|~:";

/// Brackets and punctuation, which never combine with neighbours.
pub const PUNCTUATION: &str = "(),;[]`{}";

/// Checks if a character starts a lower-case identifier.
///
/// # Example
///
/// ```
/// use bogl_lex::charclass::is_lower_start;
///
/// assert!(is_lower_start('x'));
/// assert!(is_lower_start('_'));
/// assert!(!is_lower_start('X'));
/// ```
#[inline]
pub fn is_lower_start(c: char) -> bool {
    c.is_ascii_lowercase() || c == '_'
}

/// Checks if a character starts a type, constructor or module name.
#[inline]
pub fn is_upper_start(c: char) -> bool {
    c.is_ascii_uppercase()
}

/// Checks if a character is a decimal digit.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Checks if a character is a hexadecimal digit.
#[inline]
pub fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

/// Checks if a character is an octal digit.
#[inline]
pub fn is_oct_digit(c: char) -> bool {
    matches!(c, '0'..='7')
}

/// Checks if a character may continue an identifier.
///
/// Besides ASCII letters, digits, `_` and `'`, every code point from
/// U+00A1 upwards is accepted as an extended letter.
///
/// # Example
///
/// ```
/// use bogl_lex::charclass::is_ident_continue;
///
/// assert!(is_ident_continue('a'));
/// assert!(is_ident_continue('\''));
/// assert!(is_ident_continue('9'));
/// assert!(is_ident_continue('λ'));
/// assert!(!is_ident_continue('-'));
/// assert!(!is_ident_continue(' '));
/// ```
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    is_lower_start(c)
        || is_upper_start(c)
        || is_digit(c)
        || c == '\''
        || c >= EXTENDED_IDENT_START
}

/// Checks if a character belongs to an operator lexeme.
///
/// # Example
///
/// ```
/// use bogl_lex::charclass::is_operator_symbol;
///
/// assert!(is_operator_symbol('-'));
/// assert!(is_operator_symbol('\\'));
/// assert!(is_operator_symbol(':'));
/// assert!(!is_operator_symbol('('));
/// ```
#[inline]
pub fn is_operator_symbol(c: char) -> bool {
    OPERATOR_SYMBOLS.contains(c)
}

/// Checks if a character is a bracket or punctuation mark.
#[inline]
pub fn is_punctuation(c: char) -> bool {
    PUNCTUATION.contains(c)
}

/// Checks if a character is horizontal whitespace.
///
/// Line terminators are not whitespace here: the stream never yields them.
///
/// # Example
///
/// ```
/// use bogl_lex::charclass::is_horizontal_whitespace;
///
/// assert!(is_horizontal_whitespace(' '));
/// assert!(is_horizontal_whitespace('\t'));
/// assert!(is_horizontal_whitespace('\x0B'));
/// assert!(is_horizontal_whitespace('\x0C'));
/// assert!(!is_horizontal_whitespace('\n'));
/// ```
#[inline]
pub fn is_horizontal_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0B' | '\x0C')
}
