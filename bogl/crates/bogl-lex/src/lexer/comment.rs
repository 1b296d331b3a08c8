//! Block comment lexing.
//!
//! Block comments nest and may span any number of lines. Each call styles
//! the part of the current line that belongs to the comment as one token.

use std::num::NonZeroU32;

use crate::state::{CommentKind, LexerState};
use crate::stream::CharStream;
use crate::Lexer;

use super::Step;

impl Lexer {
    /// Block comment mode, entered `depth` levels deep.
    ///
    /// Depth saturates at `u32::MAX`.
    pub(super) fn lex_block_comment<'a, S>(
        &self,
        stream: &mut S,
        kind: CommentKind,
        depth: NonZeroU32,
    ) -> Step
    where
        S: CharStream<'a>,
    {
        let mut depth = depth.get();

        while let Some(c) = stream.next_char() {
            if c == '{' && stream.eat('-') {
                depth = depth.saturating_add(1);
            } else if c == '-' && stream.eat('}') {
                depth -= 1;
                if depth == 0 {
                    return Step::normal(kind.token_kind());
                }
            }
        }

        match NonZeroU32::new(depth) {
            Some(depth) => Step::Emit(kind.token_kind(), LexerState::InBlockComment { kind, depth }),
            None => Step::normal(kind.token_kind()),
        }
    }
}
