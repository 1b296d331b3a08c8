//! Highlight command implementation.
//!
//! Renders BoGL sources as ANSI-coloured text, HTML, JSON token arrays or
//! plain token rows.

use std::io::Write;
use std::path::PathBuf;

use bogl_lex::{Document, TokenKind};
use serde::Serialize;
use tracing::debug;

use crate::commands::common::{
    css_classes, error_messages, escape_html, read_source, source_name, with_columns,
    OutputFormat, Palette,
};
use crate::config::Config;
use crate::error::{BogltError, Result};

/// Arguments for the highlight command.
#[derive(Debug, Clone, Default)]
pub struct HighlightArgs {
    /// Input files; `-` reads standard input.
    pub inputs: Vec<PathBuf>,
    /// Output format, overriding the configured one.
    pub format: Option<String>,
    /// Emit ANSI output without colours.
    pub no_color: bool,
}

/// One token in JSON output.
#[derive(Debug, Serialize)]
struct TokenRecord<'a> {
    kind: TokenKind,
    style: Option<&'static str>,
    lexeme: &'a str,
}

/// One input in JSON output.
#[derive(Debug, Serialize)]
struct FileRecord<'a> {
    file: String,
    lines: Vec<Vec<TokenRecord<'a>>>,
}

/// Highlight command handler.
pub struct HighlightCommand {
    args: HighlightArgs,
    config: Config,
}

impl HighlightCommand {
    /// Create a new HighlightCommand.
    pub fn new(args: HighlightArgs, config: Config) -> Self {
        Self { args, config }
    }

    /// Execute the command, writing to standard output.
    pub fn run(&self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run_to(&mut out)
    }

    /// Execute the command, writing to `out`.
    pub fn run_to(&self, out: &mut impl Write) -> Result<()> {
        let format = self.output_format()?;
        let palette = match format {
            OutputFormat::Ansi if !self.args.no_color => {
                Some(Palette::from_theme(&self.config.theme)?)
            },
            _ => None,
        };

        for input in &self.args.inputs {
            let source = read_source(input)?;
            let doc = Document::new(&source);
            debug!(file = %input.display(), lines = doc.line_count(), ?format, "highlighting");

            let rendered = match format {
                OutputFormat::Ansi => render_ansi(&doc, palette.as_ref()),
                OutputFormat::Html => render_html(&doc),
                OutputFormat::Json => render_json(&doc, source_name(input))?,
                OutputFormat::Plain => render_plain(&doc),
            };
            out.write_all(rendered.as_bytes())?;
        }
        out.flush()?;
        Ok(())
    }

    /// The `--format` flag wins over the configuration file.
    fn output_format(&self) -> Result<OutputFormat> {
        let name = self
            .args
            .format
            .as_deref()
            .unwrap_or(&self.config.highlight.format);
        OutputFormat::from_str(name).ok_or_else(|| {
            BogltError::Validation(format!("{} {}", error_messages::UNKNOWN_FORMAT, name))
        })
    }
}

/// Renders with terminal colours; `None` gives the source back unchanged.
pub fn render_ansi(doc: &Document, palette: Option<&Palette>) -> String {
    let mut out = String::new();
    for tokens in doc.lines_tokens() {
        for token in &tokens {
            match palette {
                Some(palette) => out.push_str(&palette.paint(token)),
                None => out.push_str(token.lexeme),
            }
        }
        out.push('\n');
    }
    out
}

/// Renders as a `<pre>` block with one span per styled token.
pub fn render_html(doc: &Document) -> String {
    let mut out = String::from("<pre class=\"cm-s-bogl\">");
    for (index, tokens) in doc.lines_tokens().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        for token in &tokens {
            let text = escape_html(token.lexeme);
            match token.style() {
                Some(style) => {
                    out.push_str(&format!("<span class=\"{}\">{}</span>", css_classes(style), text))
                },
                None => out.push_str(&text),
            }
        }
    }
    out.push_str("</pre>\n");
    out
}

/// Renders one JSON object with the tokens of every line.
pub fn render_json(doc: &Document, file: String) -> Result<String> {
    let lines: Vec<Vec<TokenRecord<'_>>> = doc
        .lines_tokens()
        .map(|tokens| {
            tokens
                .into_iter()
                .map(|token| TokenRecord {
                    kind: token.kind,
                    style: token.style(),
                    lexeme: token.lexeme,
                })
                .collect::<Vec<_>>()
        })
        .collect();
    let mut json = serde_json::to_string_pretty(&FileRecord { file, lines })?;
    json.push('\n');
    Ok(json)
}

/// Renders `line:col style lexeme` rows for every styled token.
pub fn render_plain(doc: &Document) -> String {
    let mut out = String::new();
    for (index, tokens) in doc.lines_tokens().enumerate() {
        for (column, token) in with_columns(&tokens) {
            if let Some(style) = token.style() {
                out.push_str(&format!("{}:{} {} {}\n", index + 1, column, style, token.lexeme));
            }
        }
    }
    out
}
