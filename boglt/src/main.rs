//! boglt - command-line front end for the BoGL highlighting lexer.
//!
//! This is the main entry point for the boglt CLI application.
//! It uses clap for argument parsing and dispatches to the command
//! handlers in [`commands`].

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{run_check, run_tokens, CheckArgs, HighlightArgs, HighlightCommand, TokensArgs};
use config::Config;
use error::{BogltError, Result};

/// boglt - highlight and check BoGL sources
///
/// Runs the same lexer an editor uses for syntax highlighting over whole
/// files, for terminals, web pages and scripts.
#[derive(Parser, Debug)]
#[command(name = "boglt")]
#[command(author = "BoGL Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Highlight and check BoGL sources", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "BOGLT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "BOGLT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "BOGLT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the boglt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print highlighted source
    ///
    /// Lexes each input and prints it as ANSI-coloured text, HTML, JSON
    /// token arrays or plain `line:col style lexeme` rows.
    Highlight(HighlightCommandArgs),

    /// Dump the token stream
    ///
    /// Prints every token with its position and kind, and the lexer state
    /// at the end of each line.
    Tokens(TokensCommandArgs),

    /// Report lexical errors
    ///
    /// Lists stray characters, unterminated literals and unclosed comments.
    /// Exits with a non-zero status when anything was found.
    Check(CheckCommandArgs),
}

/// Arguments for the highlight subcommand.
#[derive(Parser, Debug)]
struct HighlightCommandArgs {
    /// Input files (`-` for standard input)
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output format (ansi, html, json, plain)
    #[arg(short = 'F', long)]
    format: Option<String>,
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommandArgs {
    /// Input file (`-` for standard input)
    input: PathBuf,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommandArgs {
    /// Input files (`-` for standard input)
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

/// Main entry point for the boglt CLI.
///
/// Parses command-line arguments, initializes logging, loads configuration,
/// and dispatches to the appropriate command handler.
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.no_color)?;

    // Load configuration
    let config = load_config(cli.config.as_deref())?;

    // Execute the selected command
    execute_command(cli.command, cli.no_color, config)
}

/// Initialize the logging system.
///
/// Logs go to standard error so they never mix with highlighted output.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| BogltError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, no_color: bool, config: Config) -> Result<()> {
    match command {
        Commands::Highlight(args) => {
            let highlight_args = HighlightArgs {
                inputs: args.inputs,
                format: args.format,
                no_color,
            };
            HighlightCommand::new(highlight_args, config).run()
        },
        Commands::Tokens(args) => run_tokens(TokensArgs { input: args.input }),
        Commands::Check(args) => run_check(CheckArgs {
            inputs: args.inputs,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_highlight() {
        let cli = Cli::parse_from(["boglt", "highlight", "game.bgl"]);
        if let Commands::Highlight(args) = cli.command {
            assert_eq!(args.inputs, vec![PathBuf::from("game.bgl")]);
            assert_eq!(args.format, None);
        } else {
            panic!("Expected Highlight command");
        }
    }

    #[test]
    fn test_cli_parse_highlight_with_format() {
        let cli = Cli::parse_from(["boglt", "highlight", "a.bgl", "b.bgl", "--format", "html"]);
        if let Commands::Highlight(args) = cli.command {
            assert_eq!(args.inputs.len(), 2);
            assert_eq!(args.format, Some("html".to_string()));
        } else {
            panic!("Expected Highlight command");
        }
    }

    #[test]
    fn test_cli_highlight_requires_input() {
        assert!(Cli::try_parse_from(["boglt", "highlight"]).is_err());
    }

    #[test]
    fn test_cli_parse_tokens_stdin() {
        let cli = Cli::parse_from(["boglt", "tokens", "-"]);
        if let Commands::Tokens(args) = cli.command {
            assert_eq!(args.input, PathBuf::from("-"));
        } else {
            panic!("Expected Tokens command");
        }
    }

    #[test]
    fn test_cli_parse_check() {
        let cli = Cli::parse_from(["boglt", "check", "a.bgl", "b.bgl"]);
        assert!(matches!(cli.command, Commands::Check(args) if args.inputs.len() == 2));
    }

    #[test]
    fn test_cli_parse_global_verbose() {
        let cli = Cli::parse_from(["boglt", "--verbose", "check", "a.bgl"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_parse_global_config() {
        let cli = Cli::parse_from(["boglt", "--config", "/path/to/boglt.toml", "check", "a.bgl"]);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/boglt.toml")));
    }

    #[test]
    fn test_cli_parse_global_no_color_after_subcommand() {
        let cli = Cli::parse_from(["boglt", "highlight", "a.bgl", "--no-color"]);
        assert!(cli.no_color);
    }
}
