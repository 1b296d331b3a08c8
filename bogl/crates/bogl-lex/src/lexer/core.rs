//! Core lexer implementation.
//!
//! This module contains the [`Lexer`] session, the mode dispatch loop and
//! the Normal mode.

use crate::charclass::{
    is_digit, is_horizontal_whitespace, is_lower_start, is_operator_symbol, is_punctuation,
    is_upper_start,
};
use crate::cursor::LineCursor;
use crate::state::{CommentKind, LexerState};
use crate::stream::CharStream;
use crate::token::{ClassificationTable, Token, TokenKind};

use super::Step;

/// Comment delimiters of the language, for comment-aware editing commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentDelimiters {
    /// Opens a block comment.
    pub block_start: &'static str,
    /// Closes a block comment.
    pub block_end: &'static str,
    /// Starts a comment running to end of line.
    pub line: &'static str,
}

/// Highlighting lexer for BoGL.
///
/// The lexer itself holds no per-buffer data. Everything that must survive
/// between token requests lives in the caller-owned [`LexerState`], so one
/// `Lexer` can serve any number of buffers.
///
/// # Example
///
/// ```
/// use bogl_lex::cursor::LineCursor;
/// use bogl_lex::{Lexer, TokenKind};
///
/// let lexer = Lexer::new();
/// let mut state = lexer.start_state();
/// let mut line = LineCursor::new("if x then 1 else 2");
///
/// let token = lexer.next_token(&mut line, &mut state).unwrap();
/// assert_eq!(token.kind, TokenKind::Keyword);
/// assert_eq!(token.lexeme, "if");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Lexer {
    /// Exact-spelling overrides applied to ordinary code.
    table: &'static ClassificationTable,
}

impl Default for Lexer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexer {
    /// Opens a block comment.
    pub const BLOCK_COMMENT_START: &'static str = "{-";

    /// Closes a block comment.
    pub const BLOCK_COMMENT_END: &'static str = "-}";

    /// Starts a line comment.
    pub const LINE_COMMENT: &'static str = "--";

    /// Creates a lexer using the global classification table.
    pub fn new() -> Self {
        Self {
            table: ClassificationTable::global(),
        }
    }

    /// Returns the state a fresh buffer starts in.
    pub fn start_state(&self) -> LexerState {
        LexerState::Normal
    }

    /// Duplicates a state so an independent pass can continue from it.
    pub fn copy_state(&self, state: &LexerState) -> LexerState {
        *state
    }

    /// Returns the comment delimiters.
    pub fn comment_delimiters(&self) -> CommentDelimiters {
        CommentDelimiters {
            block_start: Self::BLOCK_COMMENT_START,
            block_end: Self::BLOCK_COMMENT_END,
            line: Self::LINE_COMMENT,
        }
    }

    /// Returns the next token on the stream's current line.
    ///
    /// Consumes at least one character and updates `state` to the mode the
    /// next request resumes in. Returns `None`, leaving `state` untouched,
    /// when the stream is already at end of line; the caller then moves on
    /// to the next line.
    pub fn next_token<'a, S>(&self, stream: &mut S, state: &mut LexerState) -> Option<Token<'a>>
    where
        S: CharStream<'a>,
    {
        if stream.eol() {
            return None;
        }
        stream.mark_start();

        let kind = self.step(stream, state);

        // Every mode consumes before emitting; anything else is reported
        // as an error rather than stalling the caller.
        if stream.current().is_empty() {
            stream.next_char();
            *state = LexerState::Normal;
            return Some(Token::new(TokenKind::Error, stream.current()));
        }

        let lexeme = stream.current();
        Some(Token::new(self.table.classify(lexeme, kind), lexeme))
    }

    /// Lexes a whole line, starting from and updating `state`.
    ///
    /// # Example
    ///
    /// ```
    /// use bogl_lex::{Lexer, LexerState, TokenKind};
    ///
    /// let lexer = Lexer::new();
    /// let mut state = LexerState::Normal;
    /// let tokens = lexer.tokenize_line("{- open", &mut state);
    ///
    /// assert_eq!(tokens[0].kind, TokenKind::Comment);
    /// assert_eq!(state.comment_depth(), 1);
    /// ```
    pub fn tokenize_line<'a>(&self, line: &'a str, state: &mut LexerState) -> Vec<Token<'a>> {
        self.tokens(line, state).collect()
    }

    /// Returns an iterator over the tokens of one line.
    pub fn tokens<'s, 'a>(&self, line: &'a str, state: &'s mut LexerState) -> LineTokens<'s, 'a> {
        LineTokens {
            lexer: *self,
            cursor: LineCursor::new(line),
            state,
        }
    }

    /// Runs modes until one emits a token and returns its generic kind.
    ///
    /// The overlay is applied by the caller, whatever mode emitted.
    fn step<'a, S>(&self, stream: &mut S, state: &mut LexerState) -> TokenKind
    where
        S: CharStream<'a>,
    {
        loop {
            let step = match *state {
                LexerState::Normal => self.lex_normal(stream),
                LexerState::InBlockComment { kind, depth } => {
                    self.lex_block_comment(stream, kind, depth)
                },
                LexerState::InStringLiteral => self.lex_string_literal(stream),
                LexerState::InStringGap => self.lex_string_gap(stream),
            };
            match step {
                Step::Emit(kind, next) => {
                    *state = next;
                    return kind;
                },
                Step::Switch(next) => *state = next,
            }
        }
    }

    /// Normal mode: dispatches on the first character of the lexeme.
    fn lex_normal<'a, S>(&self, stream: &mut S) -> Step
    where
        S: CharStream<'a>,
    {
        if stream.eat_while(is_horizontal_whitespace) {
            return Step::normal(TokenKind::None);
        }

        let Some(c) = stream.next_char() else {
            return Step::normal(TokenKind::None);
        };

        match c {
            c if is_punctuation(c) => self.lex_punctuation(stream, c),
            '\'' => self.lex_char_literal(stream),
            '"' => Step::Switch(LexerState::InStringLiteral),
            c if is_upper_start(c) => self.lex_upper_identifier(stream),
            c if is_lower_start(c) => self.lex_lower_identifier(stream),
            c if is_digit(c) => self.lex_number(stream, c),
            '.' if stream.eat('.') => Step::normal(TokenKind::Keyword),
            c if is_operator_symbol(c) => self.lex_operator(stream, c),
            _ => Step::normal(TokenKind::Error),
        }
    }

    /// Brackets carry no style, except `{-` which opens a block comment.
    fn lex_punctuation<'a, S>(&self, stream: &mut S, c: char) -> Step
    where
        S: CharStream<'a>,
    {
        if c == '{' && stream.eat('-') {
            let kind = if stream.eat('#') {
                CommentKind::Meta
            } else {
                CommentKind::Comment
            };
            return Step::Switch(LexerState::block_comment(kind));
        }
        Step::normal(TokenKind::None)
    }
}

/// Iterator over the tokens of one line.
///
/// Created by [`Lexer::tokens`]. The borrowed state is updated as tokens
/// are produced, so after the iterator is exhausted it holds the state for
/// the next line.
pub struct LineTokens<'s, 'a> {
    lexer: Lexer,
    cursor: LineCursor<'a>,
    state: &'s mut LexerState,
}

impl<'s, 'a> LineTokens<'s, 'a> {
    /// Returns the underlying cursor.
    pub fn cursor(&self) -> &LineCursor<'a> {
        &self.cursor
    }

    /// Returns the state the next token will be lexed in.
    pub fn state(&self) -> LexerState {
        *self.state
    }
}

impl<'s, 'a> Iterator for LineTokens<'s, 'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lexer.next_token(&mut self.cursor, &mut *self.state)
    }
}
