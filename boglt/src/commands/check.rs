//! Check command implementation.
//!
//! Reports lexical problems in BoGL sources: stray characters, malformed
//! string gaps, unterminated literals, and block comments or string gaps
//! still open at the end of the file.

use std::path::PathBuf;

use bogl_lex::{Document, LexerState, TokenKind};
use tracing::{debug, info};

use crate::commands::common::{error_messages, read_source, source_name, with_columns};
use crate::error::{BogltError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone)]
pub struct CheckArgs {
    /// Input files; `-` reads standard input.
    pub inputs: Vec<PathBuf>,
}

/// A single lexical problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    /// 1-based line.
    pub line: usize,
    /// 1-based character column.
    pub column: usize,
    /// What went wrong.
    pub message: String,
}

/// Execute the check command.
///
/// Prints one `file:line:col: message` row per problem and fails when any
/// input has problems.
pub fn run_check(args: CheckArgs) -> Result<()> {
    let mut total = 0;
    for input in &args.inputs {
        let source = read_source(input)?;
        let name = source_name(input);
        let problems = find_problems(&Document::new(&source));
        debug!(file = %name, problems = problems.len(), "checked");

        for problem in &problems {
            println!("{}:{}:{}: {}", name, problem.line, problem.column, problem.message);
        }
        total += problems.len();
    }

    if total > 0 {
        return Err(BogltError::Validation(format!(
            "{} {}",
            total,
            error_messages::PROBLEMS_FOUND
        )));
    }
    info!(files = args.inputs.len(), "no problems found");
    Ok(())
}

/// Collects the problems of one document in source order.
pub fn find_problems(doc: &Document) -> Vec<Problem> {
    let mut problems = Vec::new();
    for (index, tokens) in doc.lines_tokens().enumerate() {
        for (column, token) in with_columns(&tokens) {
            let message = match token.kind {
                TokenKind::StringError => {
                    format!("unterminated string or character literal {:?}", token.lexeme)
                },
                TokenKind::Error => format!("unexpected {:?}", token.lexeme),
                _ => continue,
            };
            problems.push(Problem {
                line: index + 1,
                column,
                message,
            });
        }
    }

    let unclosed = match doc.end_state() {
        LexerState::Normal | LexerState::InStringLiteral => None,
        LexerState::InBlockComment { depth, .. } => {
            Some(format!("{} block comment(s) still open at end of file", depth))
        },
        LexerState::InStringGap => Some("string gap still open at end of file".to_string()),
    };
    if let Some(message) = unclosed {
        let line = doc.line_count().max(1);
        let column = doc.line(line - 1).map_or(0, |text| text.chars().count()) + 1;
        problems.push(Problem { line, column, message });
    }
    problems
}
