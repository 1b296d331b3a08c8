//! Tokens command implementation.
//!
//! Dumps every token of one source with its position, followed by the lexer
//! state each line ends in. Useful when a highlight looks wrong and the
//! question is which state a line started from.

use std::io::Write;
use std::path::PathBuf;

use bogl_lex::Document;

use crate::commands::common::{read_source, with_columns};
use crate::error::Result;

/// Arguments for the tokens command.
#[derive(Debug, Clone)]
pub struct TokensArgs {
    /// Input file; `-` reads standard input.
    pub input: PathBuf,
}

/// Execute the tokens command, writing to standard output.
pub fn run_tokens(args: TokensArgs) -> Result<()> {
    let source = read_source(&args.input)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    out.write_all(dump(&Document::new(&source)).as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Formats the token dump of a document.
pub fn dump(doc: &Document) -> String {
    let mut out = String::new();
    for (index, tokens) in doc.lines_tokens().enumerate() {
        let line = index + 1;
        for (column, token) in with_columns(&tokens) {
            out.push_str(&format!("{}:{}\t{:?}\t{:?}\n", line, column, token.kind, token.lexeme));
        }
        let end = doc.state_before(line).unwrap_or_default();
        out.push_str(&format!("{}\tend\t{:?}\n", line, end));
    }
    out
}
