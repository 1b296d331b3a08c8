//! String and character literal lexing.
//!
//! A string literal never runs past the end of its line on its own. To
//! continue a string on the next line it must end the line with a string
//! gap: a backslash, optional whitespace, and on the following line more
//! optional whitespace and a second backslash.
//!
//! ```text
//! "first half \
//!     \second half"
//! ```

use crate::charclass::is_horizontal_whitespace;
use crate::state::LexerState;
use crate::stream::CharStream;
use crate::token::TokenKind;
use crate::Lexer;

use super::Step;

impl Lexer {
    /// Lexes a character literal after its opening quote.
    ///
    /// Escapes are not interpreted: a backslash takes the next character
    /// with it, whatever it is.
    pub(super) fn lex_char_literal<'a, S>(&self, stream: &mut S) -> Step
    where
        S: CharStream<'a>,
    {
        stream.eat('\\');
        stream.next_char();
        if stream.eat('\'') {
            Step::normal(TokenKind::StringLiteral)
        } else {
            Step::normal(TokenKind::StringError)
        }
    }

    /// String literal mode: runs to the closing quote, a gap, or end of line.
    pub(super) fn lex_string_literal<'a, S>(&self, stream: &mut S) -> Step
    where
        S: CharStream<'a>,
    {
        while let Some(c) = stream.next_char() {
            match c {
                '"' => return Step::normal(TokenKind::StringLiteral),
                '\\' => {
                    if stream.eol() || stream.eat(is_horizontal_whitespace) {
                        return Step::Emit(TokenKind::StringLiteral, LexerState::InStringGap);
                    }
                    // escaped character, including the empty escape `\&`
                    stream.next_char();
                },
                _ => {},
            }
        }
        Step::normal(TokenKind::StringError)
    }

    /// String gap mode: whitespace up to the backslash that resumes the
    /// string.
    pub(super) fn lex_string_gap<'a, S>(&self, stream: &mut S) -> Step
    where
        S: CharStream<'a>,
    {
        if stream.eat_while(is_horizontal_whitespace) && stream.eol() {
            return Step::Emit(TokenKind::StringLiteral, LexerState::InStringGap);
        }
        if stream.eat('\\') {
            return Step::Switch(LexerState::InStringLiteral);
        }
        stream.next_char();
        Step::normal(TokenKind::Error)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Lexer, LexerState, TokenKind};

    fn lex_from(state: &mut LexerState, line: &str) -> Vec<(TokenKind, String)> {
        Lexer::new()
            .tokenize_line(line, state)
            .into_iter()
            .map(|t| (t.kind, t.lexeme.to_string()))
            .collect()
    }

    fn lex(line: &str) -> Vec<(TokenKind, String)> {
        lex_from(&mut LexerState::Normal, line)
    }

    fn tok(kind: TokenKind, lexeme: &str) -> (TokenKind, String) {
        (kind, lexeme.to_string())
    }

    #[test]
    fn test_simple_string() {
        assert_eq!(lex(r#""hello""#), vec![tok(TokenKind::StringLiteral, r#""hello""#)]);
        assert_eq!(lex(r#""""#), vec![tok(TokenKind::StringLiteral, r#""""#)]);
    }

    #[test]
    fn test_string_then_code() {
        let tokens = lex(r#""a" ++ b"#);
        assert_eq!(tokens[0], tok(TokenKind::StringLiteral, r#""a""#));
        assert_eq!(tokens[2], tok(TokenKind::Identifier, "++"));
    }

    #[test]
    fn test_escapes_do_not_close() {
        assert_eq!(
            lex(r#""say \"hi\"" x"#)[0],
            tok(TokenKind::StringLiteral, r#""say \"hi\"""#)
        );
        assert_eq!(lex(r#""a\&b""#), vec![tok(TokenKind::StringLiteral, r#""a\&b""#)]);
        assert_eq!(lex(r#""\\""#), vec![tok(TokenKind::StringLiteral, r#""\\""#)]);
    }

    #[test]
    fn test_unterminated_string() {
        let mut state = LexerState::Normal;
        assert_eq!(lex_from(&mut state, "\"abc"), vec![tok(TokenKind::StringError, "\"abc")]);
        assert_eq!(state, LexerState::Normal);
    }

    #[test]
    fn test_string_gap_across_lines() {
        let mut state = LexerState::Normal;
        assert_eq!(lex_from(&mut state, "\"ab\\"), vec![tok(TokenKind::StringLiteral, "\"ab\\")]);
        assert_eq!(state, LexerState::InStringGap);

        let tokens = lex_from(&mut state, "   \\cd\"");
        assert_eq!(tokens, vec![tok(TokenKind::StringLiteral, "   \\cd\"")]);
        assert_eq!(state, LexerState::Normal);
    }

    #[test]
    fn test_gap_opened_by_whitespace() {
        let mut state = LexerState::Normal;
        let tokens = lex_from(&mut state, "\"ab\\ ");
        assert_eq!(tokens, vec![tok(TokenKind::StringLiteral, "\"ab\\ ")]);
        assert_eq!(state, LexerState::InStringGap);
    }

    #[test]
    fn test_gap_on_one_line() {
        let tokens = lex(r#""ab\ \cd""#);
        assert_eq!(
            tokens,
            vec![
                tok(TokenKind::StringLiteral, "\"ab\\ "),
                tok(TokenKind::StringLiteral, "\\cd\""),
            ]
        );
    }

    #[test]
    fn test_gap_spans_whitespace_only_lines() {
        let mut state = LexerState::InStringGap;
        assert_eq!(lex_from(&mut state, "    "), vec![tok(TokenKind::StringLiteral, "    ")]);
        assert_eq!(state, LexerState::InStringGap);
        assert!(lex_from(&mut state, "").is_empty());
        assert_eq!(state, LexerState::InStringGap);
    }

    #[test]
    fn test_malformed_gap() {
        let mut state = LexerState::InStringGap;
        let tokens = lex_from(&mut state, "  x\"");
        assert_eq!(tokens[0], tok(TokenKind::Error, "  x"));
        assert_eq!(tokens[1], tok(TokenKind::StringError, "\""));
        assert_eq!(state, LexerState::Normal);
    }

    #[test]
    fn test_char_literals() {
        assert_eq!(lex("'x'"), vec![tok(TokenKind::StringLiteral, "'x'")]);
        assert_eq!(lex(r"'\n'"), vec![tok(TokenKind::StringLiteral, r"'\n'")]);
        assert_eq!(lex(r"'\''"), vec![tok(TokenKind::StringLiteral, r"'\''")]);
    }

    #[test]
    fn test_malformed_char_literals() {
        assert_eq!(lex("'xy'")[0], tok(TokenKind::StringError, "'x"));
        assert_eq!(lex("'"), vec![tok(TokenKind::StringError, "'")]);
        let mut state = LexerState::Normal;
        lex_from(&mut state, "'ab");
        assert_eq!(state, LexerState::Normal);
    }
}
