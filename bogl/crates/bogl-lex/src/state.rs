//! Persistent lexer state.
//!
//! [`LexerState`] is the only thing carried from one token request to the
//! next, and from one line to the next. It is small, `Copy` and comparable,
//! so editors can store one per line and compare states to decide where
//! re-lexing may stop.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::token::TokenKind;

/// Flavour of a block comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommentKind {
    /// `{- ... -}`
    Comment,
    /// `{-# ... #-}`
    Meta,
}

impl CommentKind {
    /// Token kind emitted for segments of this comment.
    pub fn token_kind(self) -> TokenKind {
        match self {
            CommentKind::Comment => TokenKind::Comment,
            CommentKind::Meta => TokenKind::MetaComment,
        }
    }
}

/// Mode the lexer resumes in on the next token request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LexerState {
    /// Ordinary code.
    #[default]
    Normal,
    /// Inside a block comment nested `depth` levels deep.
    InBlockComment {
        /// Comment flavour, fixed by the outermost opener.
        kind: CommentKind,
        /// Nesting depth; closing the last level returns to `Normal`.
        depth: NonZeroU32,
    },
    /// Inside a string literal.
    InStringLiteral,
    /// Between the two backslashes of a string gap.
    InStringGap,
}

impl LexerState {
    /// State after an opening `{-` (or `{-#`) in ordinary code.
    pub fn block_comment(kind: CommentKind) -> Self {
        LexerState::InBlockComment {
            kind,
            depth: NonZeroU32::MIN,
        }
    }

    /// Returns true in ordinary code.
    pub fn is_normal(&self) -> bool {
        matches!(self, LexerState::Normal)
    }

    /// Returns the comment nesting depth, or 0 outside comments.
    pub fn comment_depth(&self) -> u32 {
        match self {
            LexerState::InBlockComment { depth, .. } => depth.get(),
            _ => 0,
        }
    }

    /// Returns true if the state continues a construct from an earlier line.
    pub fn is_continuation(&self) -> bool {
        !self.is_normal()
    }
}
