//! Configuration module for the boglt CLI.
//!
//! This module finds and loads the configuration settings of the boglt
//! application.

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use bogl_lex::TokenKind;

use crate::error::{BogltError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "boglt.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Highlight-specific configuration.
    #[serde(default)]
    pub highlight: HighlightConfig,

    /// Terminal colours per style tag.
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// Highlight-specific configuration options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HighlightConfig {
    /// Output format used when `--format` is not given.
    #[serde(default = "default_format")]
    pub format: String,
}

/// Colour names for every style tag, used by ANSI output.
///
/// Keys are the style tags themselves, so a theme file reads
///
/// ```toml
/// [theme]
/// keyword = "bold magenta"
/// "variable-2" = "blue"
/// "string error" = "bold red"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    /// Keywords and reserved symbols.
    pub keyword: String,
    /// Builtin types, functions and operators.
    pub builtin: String,
    /// Qualified name prefixes.
    pub qualifier: String,
    /// Types and constructors.
    #[serde(rename = "variable-2")]
    pub variable_2: String,
    /// Plain identifiers and unknown operators.
    pub variable: String,
    /// Hexadecimal and octal literals.
    pub integer: String,
    /// Decimal literals.
    pub number: String,
    /// String and character literals.
    pub string: String,
    /// Unterminated literals.
    #[serde(rename = "string error")]
    pub string_error: String,
    /// Line and block comments.
    pub comment: String,
    /// Pragma comments.
    pub meta: String,
    /// Characters that start no token.
    pub error: String,
}

fn default_format() -> String {
    "ansi".to_string()
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            keyword: "bold magenta".to_string(),
            builtin: "cyan".to_string(),
            qualifier: "blue".to_string(),
            variable_2: "yellow".to_string(),
            variable: "default".to_string(),
            integer: "green".to_string(),
            number: "green".to_string(),
            string: "red".to_string(),
            string_error: "bold bright-red".to_string(),
            comment: "bright-black".to_string(),
            meta: "bright-blue".to_string(),
            error: "bold red".to_string(),
        }
    }
}

impl ThemeConfig {
    /// Returns the colour name configured for a token kind.
    ///
    /// Tokens without a style have no colour.
    pub fn color_for(&self, kind: TokenKind) -> Option<&str> {
        let color = match kind {
            TokenKind::Keyword => &self.keyword,
            TokenKind::Builtin => &self.builtin,
            TokenKind::Qualifier => &self.qualifier,
            TokenKind::TypeOrConstructorRef => &self.variable_2,
            TokenKind::Identifier => &self.variable,
            TokenKind::IntegerLiteral => &self.integer,
            TokenKind::NumberLiteral => &self.number,
            TokenKind::StringLiteral => &self.string,
            TokenKind::StringError => &self.string_error,
            TokenKind::Comment => &self.comment,
            TokenKind::MetaComment => &self.meta,
            TokenKind::Error => &self.error,
            TokenKind::None => return None,
        };
        Some(color)
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/boglt/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(BogltError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| BogltError::Config(format!("Failed to parse configuration: {}", e)))?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("boglt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("boglt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.highlight.format, "ansi");
        assert_eq!(config.theme.keyword, "bold magenta");
    }

    #[test]
    fn test_every_styled_kind_has_a_color() {
        let theme = ThemeConfig::default();
        for kind in TokenKind::ALL {
            assert_eq!(theme.color_for(kind).is_some(), kind.style().is_some(), "{:?}", kind);
        }
    }

    #[test]
    fn test_load_full_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("boglt.toml");
        std::fs::write(
            &config_path,
            "[highlight]\nformat = \"html\"\n\n[theme]\n\"string error\" = \"yellow\"\nmeta = \"blue\"\n",
        )
        .unwrap();

        let config = Config::load_from_path(&config_path).unwrap();
        assert_eq!(config.highlight.format, "html");
        assert_eq!(config.theme.color_for(TokenKind::StringError), Some("yellow"));
        assert_eq!(config.theme.color_for(TokenKind::MetaComment), Some("blue"));
        assert_eq!(config.theme.comment, ThemeConfig::default().comment);
    }

    #[test]
    fn test_partial_theme_keeps_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("boglt.toml");
        std::fs::write(&config_path, "[theme]\n\"variable-2\" = \"green\"\n").unwrap();

        let config = Config::load_from_path(&config_path).unwrap();
        assert_eq!(config.theme.variable_2, "green");
        assert_eq!(config.theme.keyword, "bold magenta");
        assert_eq!(config.highlight.format, "ansi");
    }

    #[test]
    fn test_malformed_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("boglt.toml");
        std::fs::write(&config_path, "[highlight\nformat = 1").unwrap();
        assert!(matches!(Config::load_from_path(&config_path), Err(BogltError::Config(_))));
    }

    #[test]
    fn test_load_from_nonexistent_path() {
        let result = Config::load_from_path(Path::new("/nonexistent/path/boglt.toml"));
        assert!(result.is_err());
    }
}
