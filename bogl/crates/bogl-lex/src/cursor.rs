//! Line cursor for traversing source text.
//!
//! This module provides [`LineCursor`], the [`CharStream`] implementation
//! used throughout the crate. It walks one line of text, tracks the start of
//! the lexeme being built and handles UTF-8 correctly.

use crate::stream::CharStream;

/// A cursor over a single line of source text.
///
/// # Example
///
/// ```
/// use bogl_lex::cursor::LineCursor;
/// use bogl_lex::stream::CharStream;
///
/// let mut cursor = LineCursor::new("let x = 42");
///
/// assert_eq!(cursor.peek(), Some('l'));
/// assert!(cursor.eat('l'));
/// assert!(cursor.eat_while(|c: char| c.is_ascii_alphabetic()));
/// assert_eq!(cursor.current(), "let");
/// ```
#[derive(Debug, Clone)]
pub struct LineCursor<'a> {
    /// The line being traversed, without its terminator.
    line: &'a str,

    /// Current byte position in the line.
    position: usize,

    /// Byte position where the current lexeme starts.
    start: usize,
}

impl<'a> LineCursor<'a> {
    /// Creates a new cursor at the start of `line`.
    ///
    /// A trailing `\n` or `\r\n` is not part of the line and is dropped.
    pub fn new(line: &'a str) -> Self {
        let line = line.strip_suffix('\n').unwrap_or(line);
        let line = line.strip_suffix('\r').unwrap_or(line);
        Self {
            line,
            position: 0,
            start: 0,
        }
    }

    /// Returns the current byte position in the line.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the byte position where the current lexeme starts.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Returns the 1-based character column of the lexeme start.
    ///
    /// # Example
    ///
    /// ```
    /// use bogl_lex::cursor::LineCursor;
    /// use bogl_lex::stream::CharStream;
    ///
    /// let mut cursor = LineCursor::new("λx y");
    /// cursor.eat_while(|c: char| c != ' ');
    /// cursor.eat(' ');
    /// cursor.mark_start();
    /// assert_eq!(cursor.start_column(), 4);
    /// ```
    pub fn start_column(&self) -> usize {
        self.line[..self.start].chars().count() + 1
    }

    /// Returns the line text from the current position to the end.
    pub fn remaining(&self) -> &'a str {
        &self.line[self.position..]
    }

    /// Returns the full line text.
    pub fn line(&self) -> &'a str {
        self.line
    }

    /// Creates a snapshot of the cursor state.
    ///
    /// # Example
    ///
    /// ```
    /// use bogl_lex::cursor::LineCursor;
    /// use bogl_lex::stream::CharStream;
    ///
    /// let mut cursor = LineCursor::new("game Tic");
    /// let snapshot = cursor.snapshot();
    /// cursor.skip_to_end();
    /// cursor.restore(snapshot);
    /// assert_eq!(cursor.peek(), Some('g'));
    /// ```
    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            position: self.position,
            start: self.start,
        }
    }

    /// Restores the cursor to a previously saved snapshot.
    pub fn restore(&mut self, snapshot: CursorSnapshot) {
        self.position = snapshot.position;
        self.start = snapshot.start;
    }

    /// Returns the character `offset` characters past the cursor.
    fn char_at(&self, offset: usize) -> Option<char> {
        self.remaining().chars().nth(offset)
    }
}

impl<'a> CharStream<'a> for LineCursor<'a> {
    #[inline]
    fn peek(&self) -> Option<char> {
        // Fast path for ASCII
        match self.line.as_bytes().get(self.position) {
            Some(&b) if b < 128 => Some(b as char),
            Some(_) => self.char_at(0),
            None => None,
        }
    }

    #[inline]
    fn next_char(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position += c.len_utf8();
        Some(c)
    }

    fn match_seq(&mut self, seq: &[fn(char) -> bool]) -> bool {
        let mut chars = self.remaining().chars();
        let mut width = 0;
        for pattern in seq {
            match chars.next() {
                Some(c) if pattern(c) => width += c.len_utf8(),
                _ => return false,
            }
        }
        self.position += width;
        true
    }

    fn skip_to_end(&mut self) {
        self.position = self.line.len();
    }

    #[inline]
    fn eol(&self) -> bool {
        self.position >= self.line.len()
    }

    fn current(&self) -> &'a str {
        &self.line[self.start..self.position]
    }

    fn mark_start(&mut self) {
        self.start = self.position;
    }
}

/// A snapshot of cursor state that can be restored later.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorSnapshot {
    /// Byte position in the line.
    pub position: usize,
    /// Byte position of the lexeme start.
    pub start: usize,
}
