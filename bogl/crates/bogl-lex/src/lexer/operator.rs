//! Operator and line comment lexing.
//!
//! Operators are maximal runs of operator symbols. A run of two or more
//! dashes starts a line comment unless the character right after the dashes
//! is itself an operator symbol, in which case the whole run is an operator
//! (`-->`, `--|`).

use crate::charclass::is_operator_symbol;
use crate::stream::CharStream;
use crate::token::TokenKind;
use crate::Lexer;

use super::Step;

impl Lexer {
    /// Lexes an operator whose first symbol has been consumed.
    pub(super) fn lex_operator<'a, S>(&self, stream: &mut S, first: char) -> Step
    where
        S: CharStream<'a>,
    {
        if first == '-' && stream.eat('-') {
            stream.eat_while('-');
            if !stream.eat(is_operator_symbol) {
                stream.skip_to_end();
                return Step::normal(TokenKind::Comment);
            }
        }

        let generic = if first == ':' {
            TokenKind::TypeOrConstructorRef
        } else {
            TokenKind::Identifier
        };
        stream.eat_while(is_operator_symbol);
        Step::normal(generic)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Lexer, LexerState, TokenKind};

    fn lex(line: &str) -> Vec<(TokenKind, &str)> {
        let mut state = LexerState::Normal;
        Lexer::new()
            .tokenize_line(line, &mut state)
            .into_iter()
            .map(|t| (t.kind, t.lexeme))
            .collect()
    }

    #[test]
    fn test_line_comment() {
        assert_eq!(lex("-- comment"), vec![(TokenKind::Comment, "-- comment")]);
        assert_eq!(lex("x -- y z")[2], (TokenKind::Comment, "-- y z"));
        assert_eq!(lex("----"), vec![(TokenKind::Comment, "----")]);
        assert_eq!(lex("--"), vec![(TokenKind::Comment, "--")]);
    }

    #[test]
    fn test_dash_run_followed_by_symbol_is_operator() {
        assert_eq!(lex("-->"), vec![(TokenKind::Identifier, "-->")]);
        assert_eq!(lex("---| x")[0], (TokenKind::Identifier, "---|"));
    }

    #[test]
    fn test_dash_run_followed_by_letter_is_comment() {
        assert_eq!(lex("--x"), vec![(TokenKind::Comment, "--x")]);
    }

    #[test]
    fn test_keyword_operators() {
        assert_eq!(lex("->"), vec![(TokenKind::Keyword, "->")]);
        assert_eq!(lex("<-"), vec![(TokenKind::Keyword, "<-")]);
        assert_eq!(lex("="), vec![(TokenKind::Keyword, "=")]);
        assert_eq!(lex("\\"), vec![(TokenKind::Keyword, "\\")]);
        assert_eq!(lex(":"), vec![(TokenKind::Keyword, ":")]);
    }

    #[test]
    fn test_builtin_operators() {
        for op in ["&&", "||", "==", "/=", "<=", ">=", "+", "-", "*", "/", "?"] {
            assert_eq!(lex(op), vec![(TokenKind::Builtin, op)], "{}", op);
        }
    }

    #[test]
    fn test_generic_operator_kinds() {
        assert_eq!(lex("<+>"), vec![(TokenKind::Identifier, "<+>")]);
        assert_eq!(lex("::"), vec![(TokenKind::TypeOrConstructorRef, "::")]);
        assert_eq!(lex(":+"), vec![(TokenKind::TypeOrConstructorRef, ":+")]);
    }

    #[test]
    fn test_operators_are_greedy() {
        assert_eq!(lex("x==>y")[1], (TokenKind::Identifier, "==>"));
        assert_eq!(lex("a+-b")[1], (TokenKind::Identifier, "+-"));
    }
}
