//! Number literal lexing.
//!
//! Hexadecimal literals are styled as integers; octal and decimal literals,
//! with or without fraction and exponent, as numbers. Digit runs are never
//! required to be non-empty, so `0x` alone is still a literal.

use crate::charclass::{is_digit, is_hex_digit, is_oct_digit};
use crate::stream::CharStream;
use crate::token::TokenKind;
use crate::Lexer;

use super::Step;

/// A `.` followed by at least one digit.
const FRACTION: &[fn(char) -> bool] = &[is_dot, is_digit];

fn is_dot(c: char) -> bool {
    c == '.'
}

fn is_hex_marker(c: char) -> bool {
    matches!(c, 'x' | 'X')
}

fn is_oct_marker(c: char) -> bool {
    matches!(c, 'o' | 'O')
}

fn is_exponent_marker(c: char) -> bool {
    matches!(c, 'e' | 'E')
}

fn is_sign(c: char) -> bool {
    matches!(c, '+' | '-')
}

impl Lexer {
    /// Lexes a number whose first digit has been consumed.
    pub(super) fn lex_number<'a, S>(&self, stream: &mut S, first: char) -> Step
    where
        S: CharStream<'a>,
    {
        if first == '0' {
            if stream.eat(is_hex_marker) {
                stream.eat_while(is_hex_digit);
                return Step::normal(TokenKind::IntegerLiteral);
            }
            if stream.eat(is_oct_marker) {
                stream.eat_while(is_oct_digit);
                return Step::normal(TokenKind::NumberLiteral);
            }
        }

        stream.eat_while(is_digit);
        if stream.match_seq(FRACTION) {
            stream.eat_while(is_digit);
        }
        if stream.eat(is_exponent_marker) {
            stream.eat(is_sign);
            stream.eat_while(is_digit);
        }
        Step::normal(TokenKind::NumberLiteral)
    }
}
