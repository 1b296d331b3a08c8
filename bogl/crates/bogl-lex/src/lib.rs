//! bogl-lex - Highlighting Lexer for the BoGL Language
//!
//! This crate provides a streaming lexer for BoGL, the board game language,
//! built for editor syntax highlighting. Instead of turning a whole file into
//! a token vector, it hands out one token per request and keeps everything it
//! needs to resume in a small, copyable [`LexerState`]. An editor can store
//! that state per line and re-highlight from any line without looking back.
//!
//! # Example Usage
//!
//! ```
//! use bogl_lex::{Lexer, LexerState, TokenKind};
//!
//! let lexer = Lexer::new();
//! let mut state = LexerState::Normal;
//!
//! let first = lexer.tokenize_line("game TicTacToe {- board", &mut state);
//! assert_eq!(first[0].kind, TokenKind::Keyword);
//! assert_eq!(first[2].kind, TokenKind::TypeOrConstructorRef);
//! assert!(!state.is_normal());
//!
//! // The next line starts inside the comment.
//! let second = lexer.tokenize_line("size -} type Board", &mut state);
//! assert_eq!(second[0].kind, TokenKind::Comment);
//! assert_eq!(second[2].kind, TokenKind::Keyword);
//! assert_eq!(second[4].kind, TokenKind::Builtin);
//! ```
//!
//! # Module Structure
//!
//! - [`charclass`] - Character class predicates
//! - [`stream`] - The character stream abstraction the lexer reads from
//! - [`cursor`] - A stream over one borrowed line
//! - [`token`] - Token kinds, style tags and the keyword/builtin overlay
//! - [`state`] - The state carried between lines
//! - [`lexer`] - The mode state machine
//! - [`document`] - Per-line state caching for whole buffers
//!
//! # Token Kinds
//!
//! Every lexeme, including whitespace, is returned as a token, so the
//! lexemes of a line always concatenate back to the line. Kinds map to
//! CodeMirror-style tags through [`TokenKind::style`]:
//!
//! | kind | style |
//! |---|---|
//! | `Keyword` | `keyword` |
//! | `Builtin` | `builtin` |
//! | `Qualifier` | `qualifier` |
//! | `TypeOrConstructorRef` | `variable-2` |
//! | `Identifier` | `variable` |
//! | `IntegerLiteral` | `integer` |
//! | `NumberLiteral` | `number` |
//! | `StringLiteral` | `string` |
//! | `StringError` | `string error` |
//! | `Comment` | `comment` |
//! | `MetaComment` | `meta` |
//! | `Error` | `error` |
//! | `None` | no style |
//!
//! Lexical errors never abort lexing. They are reported as `Error` and
//! `StringError` tokens and the lexer carries on from the next character.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod charclass;
pub mod cursor;
pub mod document;
pub mod lexer;
pub mod state;
pub mod stream;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::LineCursor;
pub use document::{Document, DocumentError, DocumentResult};
pub use lexer::{CommentDelimiters, Lexer, LineTokens};
pub use state::{CommentKind, LexerState};
pub use stream::{CharPattern, CharStream};
pub use token::{
    classify, is_builtin, is_keyword, ClassificationTable, ParseTokenKindError, Token, TokenKind,
};

#[cfg(test)]
mod tests {
    use super::*;

    /// Lexes a multi-line source, returning every line's tokens.
    fn lex_source(source: &str) -> Vec<Vec<(TokenKind, &str)>> {
        let lexer = Lexer::new();
        let mut state = lexer.start_state();
        source
            .lines()
            .map(|line| {
                lexer
                    .tokenize_line(line, &mut state)
                    .into_iter()
                    .filter(|t| t.kind != TokenKind::None)
                    .map(|t| (t.kind, t.lexeme))
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_tic_tac_toe_program() {
        let source = r#"game TicTacToe

type Board = Array (3,3) of Player & {Empty}
type Input = (Int,Int)

initialBoard : Board
initialBoard!(x,y) = Empty

isValid : Board -> Input -> Bool
isValid(b,p) = if b!p == Empty then True else False"#;
        let lines = lex_source(source);

        assert_eq!(
            lines[0],
            vec![(TokenKind::Keyword, "game"), (TokenKind::TypeOrConstructorRef, "TicTacToe")]
        );
        assert_eq!(lines[2][0], (TokenKind::Keyword, "type"));
        assert_eq!(lines[2][1], (TokenKind::Builtin, "Board"));
        assert_eq!(lines[2][3], (TokenKind::Builtin, "Array"));
        assert_eq!(lines[2][4], (TokenKind::NumberLiteral, "3"));
        assert_eq!(lines[2][6], (TokenKind::Keyword, "of"));
        assert_eq!(lines[2][8], (TokenKind::Identifier, "&"));
        assert_eq!(lines[5][1], (TokenKind::Keyword, ":"));
        assert_eq!(lines[6][1], (TokenKind::Keyword, "!"));
        assert!(lines[8].contains(&(TokenKind::Keyword, "->")));
        assert!(lines[9].contains(&(TokenKind::Builtin, "==")));
        assert!(lines[9].contains(&(TokenKind::Builtin, "True")));
    }

    #[test]
    fn test_builtin_functions() {
        let lines = lex_source("main = place(input, countBoard b, inARow 3 X b)");
        let builtins: Vec<&str> = lines[0]
            .iter()
            .filter(|(kind, _)| *kind == TokenKind::Builtin)
            .map(|(_, lexeme)| *lexeme)
            .collect();
        assert_eq!(builtins, vec!["place", "input", "countBoard", "inARow"]);
    }

    #[test]
    fn test_qualified_name() {
        let lines = lex_source("Prelude.not x");
        assert_eq!(lines[0][0], (TokenKind::Qualifier, "Prelude."));
        assert_eq!(lines[0][1], (TokenKind::Builtin, "not"));
    }

    #[test]
    fn test_multi_line_constructs() {
        let source = "{- a board\n   {- nested -}\n-}\nx = \"one \\\n   \\two\"\n-- done";
        let lines = lex_source(source);
        assert_eq!(lines[0], vec![(TokenKind::Comment, "{- a board")]);
        assert_eq!(lines[1], vec![(TokenKind::Comment, "   {- nested -}")]);
        assert_eq!(lines[2], vec![(TokenKind::Comment, "-}")]);
        assert_eq!(lines[3][2], (TokenKind::StringLiteral, "\"one \\"));
        assert_eq!(lines[4], vec![(TokenKind::StringLiteral, "   \\two\"")]);
        assert_eq!(lines[5], vec![(TokenKind::Comment, "-- done")]);
    }

    #[test]
    fn test_style_tags_round_trip() {
        for kind in TokenKind::ALL {
            let tag = kind.to_string();
            assert_eq!(tag.parse::<TokenKind>(), Ok(kind), "{}", tag);
        }
    }

    #[test]
    fn test_table_is_shared_between_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                std::thread::spawn(|| {
                    let mut state = LexerState::Normal;
                    Lexer::new().tokenize_line("while True", &mut state)[0].kind
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), TokenKind::Keyword);
        }
    }
}
