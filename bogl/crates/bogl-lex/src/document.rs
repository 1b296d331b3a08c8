//! Per-line state caching for whole buffers.
//!
//! An editor highlights a buffer line by line and keeps the lexer state
//! reached at the start of every line. After an edit only the edited line is
//! guaranteed to need re-lexing; the following lines are re-lexed until the
//! state at the start of a line matches the cached one again, at which point
//! the rest of the cache is still valid.

use thiserror::Error;
use tracing::{debug, trace};

use crate::state::LexerState;
use crate::token::Token;
use crate::Lexer;

/// Errors reported by [`Document`] edits and queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// The line index is past the end of the document.
    #[error("line {line} is out of range (document has {len} lines)")]
    LineOutOfRange {
        /// Requested line index.
        line: usize,
        /// Number of lines in the document.
        len: usize,
    },

    /// The replacement text spans more than one line.
    #[error("text for line {line} contains a line break")]
    LineBreak {
        /// Line index the text was meant for.
        line: usize,
    },
}

/// Result type alias for document operations.
pub type DocumentResult<T> = std::result::Result<T, DocumentError>;

/// The lines of one buffer together with the lexer state at each line start.
///
/// # Example
///
/// ```
/// use bogl_lex::{Document, TokenKind};
///
/// let mut doc = Document::new("{- header\n-}\ngame Tic");
/// assert_eq!(doc.tokens(1).unwrap()[0].kind, TokenKind::Comment);
///
/// // Closing the comment early changes how every later line starts.
/// doc.replace_line(0, "{- header -}").unwrap();
/// assert_eq!(doc.tokens(1).unwrap()[0].kind, TokenKind::Builtin);
/// ```
#[derive(Debug, Clone)]
pub struct Document {
    lexer: Lexer,
    lines: Vec<String>,
    /// `states[i]` is the state at the start of line `i`; the last entry is
    /// the state after the final line.
    states: Vec<LexerState>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new("")
    }
}

impl Document {
    /// Creates a document from source text and lexes it once.
    ///
    /// Lines are split on `\n` and `\r\n`.
    pub fn new(source: &str) -> Self {
        Self::from_lines(source.lines())
    }

    /// Creates a document from individual lines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lexer = Lexer::new();
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        let mut states = Vec::with_capacity(lines.len() + 1);
        let mut state = lexer.start_state();
        states.push(state);
        for line in &lines {
            lexer.tokens(line, &mut state).for_each(drop);
            states.push(state);
        }
        debug!(lines = lines.len(), end_state = ?state, "lexed document");
        Self { lexer, lines, states }
    }

    /// Number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the document has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the text of a line.
    pub fn line(&self, line: usize) -> Option<&str> {
        self.lines.get(line).map(String::as_str)
    }

    /// Returns the state at the start of `line`.
    ///
    /// `line == line_count()` gives the state after the last line.
    pub fn state_before(&self, line: usize) -> Option<LexerState> {
        self.states.get(line).copied()
    }

    /// Returns the state after the last line.
    pub fn end_state(&self) -> LexerState {
        self.states.last().copied().unwrap_or_default()
    }

    /// Returns the document text, lines joined with `\n`.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Lexes one line from its cached start state.
    pub fn tokens(&self, line: usize) -> DocumentResult<Vec<Token<'_>>> {
        let text = self.lines.get(line).ok_or(self.out_of_range(line))?;
        let mut state = self.states[line];
        Ok(self.lexer.tokenize_line(text, &mut state))
    }

    /// Iterates over the tokens of every line.
    pub fn lines_tokens(&self) -> impl Iterator<Item = Vec<Token<'_>>> + '_ {
        self.lines.iter().zip(&self.states).map(|(text, state)| {
            let mut state = *state;
            self.lexer.tokenize_line(text, &mut state)
        })
    }

    /// Replaces the text of a line.
    ///
    /// Returns the number of lines re-lexed.
    pub fn replace_line(&mut self, line: usize, text: impl Into<String>) -> DocumentResult<usize> {
        if line >= self.lines.len() {
            return Err(self.out_of_range(line));
        }
        self.lines[line] = single_line(line, text.into())?;
        Ok(self.relex_from(line))
    }

    /// Inserts a line before `line`; `line == line_count()` appends.
    ///
    /// Returns the number of lines re-lexed.
    pub fn insert_line(&mut self, line: usize, text: impl Into<String>) -> DocumentResult<usize> {
        if line > self.lines.len() {
            return Err(self.out_of_range(line));
        }
        let text = single_line(line, text.into())?;
        self.lines.insert(line, text);
        // The line that used to start here still starts from the same state.
        self.states.insert(line + 1, self.states[line]);
        Ok(self.relex_from(line))
    }

    /// Removes a line.
    ///
    /// Returns the number of lines re-lexed.
    pub fn remove_line(&mut self, line: usize) -> DocumentResult<usize> {
        if line >= self.lines.len() {
            return Err(self.out_of_range(line));
        }
        self.lines.remove(line);
        self.states.remove(line + 1);
        Ok(self.relex_from(line))
    }

    /// Re-lexes from `first` until a line start state matches the cache.
    fn relex_from(&mut self, first: usize) -> usize {
        let mut relexed = 0;
        for line in first..self.lines.len() {
            let mut state = self.states[line];
            self.lexer.tokens(&self.lines[line], &mut state).for_each(drop);
            relexed += 1;
            if self.states[line + 1] == state {
                break;
            }
            trace!(line = line + 1, ?state, "line start state changed");
            self.states[line + 1] = state;
        }
        debug!(first, relexed, "re-lexed document");
        relexed
    }

    fn out_of_range(&self, line: usize) -> DocumentError {
        DocumentError::LineOutOfRange {
            line,
            len: self.lines.len(),
        }
    }
}

fn single_line(line: usize, text: String) -> DocumentResult<String> {
    if text.contains('\n') {
        return Err(DocumentError::LineBreak { line });
    }
    Ok(text)
}
