//! Common types and utilities for boglt commands.
//!
//! This module provides shared types, constants, and utility functions
//! used across all command implementations to ensure consistency.

use std::io::Read;
use std::path::Path;

use bogl_lex::{Token, TokenKind};

use crate::config::ThemeConfig;
use crate::error::{BogltError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// Supported output formats for highlighted source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Terminal escape sequences
    Ansi,
    /// `<span class="cm-STYLE">` markup
    Html,
    /// Token arrays per line
    Json,
    /// One `line:col style lexeme` row per token
    Plain,
}

impl OutputFormat {
    /// Parse a string into an OutputFormat.
    ///
    /// # Arguments
    /// * `s` - The string to parse (case-insensitive)
    ///
    /// # Returns
    /// * `Option<OutputFormat>` - The parsed format or None if invalid
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ansi" | "term" => Some(Self::Ansi),
            "html" => Some(Self::Html),
            "json" => Some(Self::Json),
            "plain" | "text" => Some(Self::Plain),
            _ => None,
        }
    }
}

// ============================================================================
// Input
// ============================================================================

/// Reads a source file, or standard input when the path is `-`.
pub fn read_source(path: &Path) -> Result<String> {
    if is_stdin(path) {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        return Ok(source);
    }
    std::fs::read_to_string(path)
        .map_err(|e| BogltError::FileOperation(format!("{}: {}", path.display(), e)))
}

/// Name used for an input in diagnostics.
pub fn source_name(path: &Path) -> String {
    if is_stdin(path) {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Pairs each token with its 1-based character column.
///
/// Tokens of a line are contiguous, so columns follow from lexeme lengths.
pub fn with_columns<'a>(tokens: &[Token<'a>]) -> Vec<(usize, Token<'a>)> {
    let mut column = 1;
    tokens
        .iter()
        .map(|token| {
            let start = column;
            column += token.lexeme.chars().count();
            (start, *token)
        })
        .collect()
}

// ============================================================================
// Rendering
// ============================================================================

/// Escapes text for use in HTML element content and attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// CSS classes for a style tag; each space separated tag gets the `cm-`
/// prefix, so `string error` becomes `cm-string cm-error`.
pub fn css_classes(style: &str) -> String {
    style
        .split_whitespace()
        .map(|tag| format!("cm-{}", tag))
        .collect::<Vec<_>>()
        .join(" ")
}

/// An SGR sequence parsed from a colour name such as `bold bright-red`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnsiStyle {
    codes: Vec<u8>,
}

impl AnsiStyle {
    /// Parses a space separated list of attributes and at most one colour.
    ///
    /// `default` means no colour at all.
    pub fn parse(name: &str) -> Result<Self> {
        let mut codes = Vec::new();
        for word in name.split_whitespace() {
            let code = match word.to_lowercase().as_str() {
                "default" => continue,
                "bold" => 1,
                "dim" => 2,
                "italic" => 3,
                "underline" => 4,
                other => color_code(other).ok_or_else(|| {
                    BogltError::Config(format!("{} {:?}", error_messages::UNKNOWN_COLOR, other))
                })?,
            };
            codes.push(code);
        }
        Ok(Self { codes })
    }

    /// Wraps `text` in the style's escape sequences.
    pub fn paint(&self, text: &str) -> String {
        if self.codes.is_empty() {
            return text.to_string();
        }
        let codes: Vec<String> = self.codes.iter().map(u8::to_string).collect();
        format!("\x1b[{}m{}\x1b[0m", codes.join(";"), text)
    }
}

fn color_code(name: &str) -> Option<u8> {
    const COLORS: [&str; 8] = ["black", "red", "green", "yellow", "blue", "magenta", "cyan", "white"];
    let (base, name) = match name.strip_prefix("bright-") {
        Some(rest) => (90, rest),
        None => (30, name),
    };
    let index = COLORS.iter().position(|c| *c == name)?;
    u8::try_from(index).ok().map(|i| base + i)
}

/// Parsed ANSI styles for every token kind.
#[derive(Debug, Clone)]
pub struct Palette {
    styles: Vec<(TokenKind, AnsiStyle)>,
}

impl Palette {
    /// Parses every colour in the theme, failing on the first unknown name.
    pub fn from_theme(theme: &ThemeConfig) -> Result<Self> {
        let mut styles = Vec::new();
        for kind in TokenKind::ALL {
            if let Some(name) = theme.color_for(kind) {
                styles.push((kind, AnsiStyle::parse(name)?));
            }
        }
        Ok(Self { styles })
    }

    /// Paints a token's lexeme in its kind's colour.
    pub fn paint(&self, token: &Token<'_>) -> String {
        self.styles
            .iter()
            .find(|(kind, _)| *kind == token.kind)
            .map(|(_, style)| style.paint(token.lexeme))
            .unwrap_or_else(|| token.lexeme.to_string())
    }
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
pub mod error_messages {
    /// Error when an unknown format is specified.
    pub const UNKNOWN_FORMAT: &str = "Unknown format:";

    /// Error when a theme names an unknown colour.
    pub const UNKNOWN_COLOR: &str = "Unknown colour in theme:";

    /// Error when `check` found problems.
    pub const PROBLEMS_FOUND: &str = "problem(s) found";
}
