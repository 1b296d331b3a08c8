//! Lexer module.
//!
//! The state machine is split by mode and by lexeme shape:
//! - `core` - `Lexer` session, mode dispatch and the Normal mode
//! - `identifier` - names and qualifiers
//! - `number` - numeric literals
//! - `operator` - operator runs and line comments
//! - `string` - character literals, string literals and string gaps
//! - `comment` - nested block comments

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::{CommentDelimiters, Lexer, LineTokens};

use crate::state::LexerState;
use crate::token::TokenKind;

/// Outcome of running one mode against the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Emit a token of this kind; the next request resumes in the state.
    Emit(TokenKind, LexerState),
    /// Continue lexing the same token in another mode.
    Switch(LexerState),
}

impl Step {
    /// Emit a token and stay in ordinary code.
    fn normal(kind: TokenKind) -> Self {
        Step::Emit(kind, LexerState::Normal)
    }
}
