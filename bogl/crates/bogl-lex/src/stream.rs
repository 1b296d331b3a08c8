//! The character stream the lexer reads from.
//!
//! The stream belongs to the embedding editor: it owns the line text and the
//! cursor, and the lexer only borrows it for the duration of one
//! [`Lexer::next_token`](crate::Lexer::next_token) call. All operations work
//! on the current line; a stream never yields a line terminator and never
//! looks ahead into the next line.
//!
//! [`LineCursor`](crate::cursor::LineCursor) is the stream used by the rest
//! of this crate. Editors with their own buffer representation implement
//! [`CharStream`] directly.

/// Something a single character can be tested against.
///
/// Implemented for `char` (exact match) and for any `Fn(char) -> bool`,
/// which covers the predicates in [`charclass`](crate::charclass).
pub trait CharPattern {
    /// Returns true if `c` matches this pattern.
    fn matches(&self, c: char) -> bool;
}

impl CharPattern for char {
    #[inline]
    fn matches(&self, c: char) -> bool {
        *self == c
    }
}

impl<F> CharPattern for F
where
    F: Fn(char) -> bool,
{
    #[inline]
    fn matches(&self, c: char) -> bool {
        self(c)
    }
}

/// Positional cursor over one line of source text.
///
/// The lifetime `'a` is the lifetime of the line text, so lexemes returned
/// by [`current`](CharStream::current) outlive the borrow of the stream.
pub trait CharStream<'a> {
    /// Returns the next character without consuming it, or `None` at end
    /// of line.
    fn peek(&self) -> Option<char>;

    /// Consumes and returns the next character, or `None` at end of line.
    fn next_char(&mut self) -> Option<char>;

    /// Tests a fixed-length pattern against the upcoming characters.
    ///
    /// The characters are consumed only when every position matches.
    fn match_seq(&mut self, seq: &[fn(char) -> bool]) -> bool;

    /// Consumes the rest of the line.
    fn skip_to_end(&mut self);

    /// Returns true if the cursor is at end of line.
    fn eol(&self) -> bool;

    /// Returns the text consumed since the last [`mark_start`](Self::mark_start).
    fn current(&self) -> &'a str;

    /// Starts a new lexeme at the cursor position.
    fn mark_start(&mut self);

    /// Consumes one character if it matches `pattern`.
    fn eat<P: CharPattern>(&mut self, pattern: P) -> bool {
        match self.peek() {
            Some(c) if pattern.matches(c) => {
                self.next_char();
                true
            },
            _ => false,
        }
    }

    /// Consumes the longest run of characters matching `pattern`.
    ///
    /// Returns true if at least one character was consumed.
    fn eat_while<P: CharPattern>(&mut self, pattern: P) -> bool {
        let mut eaten = false;
        while let Some(c) = self.peek() {
            if !pattern.matches(c) {
                break;
            }
            self.next_char();
            eaten = true;
        }
        eaten
    }
}
