//! Identifier lexing.
//!
//! Lower-case names are variables; upper-case names are types, constructors
//! or, when directly followed by `.`, module qualifiers. Keywords and
//! builtins are recognized later by the overlay.

use crate::charclass::is_ident_continue;
use crate::stream::CharStream;
use crate::token::TokenKind;
use crate::Lexer;

use super::Step;

impl Lexer {
    /// Lexes the rest of a name that started with an upper-case letter.
    pub(super) fn lex_upper_identifier<'a, S>(&self, stream: &mut S) -> Step
    where
        S: CharStream<'a>,
    {
        stream.eat_while(is_ident_continue);
        if stream.eat('.') {
            return Step::normal(TokenKind::Qualifier);
        }
        Step::normal(TokenKind::TypeOrConstructorRef)
    }

    /// Lexes the rest of a name that started with a lower-case letter or `_`.
    pub(super) fn lex_lower_identifier<'a, S>(&self, stream: &mut S) -> Step
    where
        S: CharStream<'a>,
    {
        stream.eat_while(is_ident_continue);
        Step::normal(TokenKind::Identifier)
    }
}
