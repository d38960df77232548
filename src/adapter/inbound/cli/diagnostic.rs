//! Miette-based error diagnostics for CLI error presentation.
//!
//! Renders configuration parse errors with the offending TOML snippet, a
//! label at the failing span, and a help suggestion.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::error::{ConfigError as AppConfigError, Error};

/// Configuration error with source location context.
///
/// Displays the configuration file content with a labeled span pointing
/// to the problematic location, along with an optional help message.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(fleetsel::config))]
pub struct ConfigError {
    /// Human-readable error message.
    pub message: String,

    /// Source content (typically the configuration file).
    #[source_code]
    pub src: String,

    /// Byte offset and length of the problematic region.
    #[label("here")]
    pub span: SourceSpan,

    /// Optional help text with suggestions for fixing the error.
    #[help]
    pub help: Option<String>,
}

impl ConfigError {
    /// Create a new configuration error with source location.
    #[must_use]
    pub fn new(
        message: impl Into<String>,
        src: impl Into<String>,
        offset: usize,
        len: usize,
    ) -> Self {
        Self {
            message: message.into(),
            src: src.into(),
            span: (offset, len).into(),
            help: None,
        }
    }

    /// Add a help suggestion to the error.
    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Build a source-annotated diagnostic for a config parse failure.
///
/// Returns `None` for any other error, or when the parser reported no span.
#[must_use]
pub fn config_parse_diagnostic(error: &Error, src: &str) -> Option<ConfigError> {
    let Error::Config(AppConfigError::Parse(parse)) = error else {
        return None;
    };
    let span = parse.span()?;
    Some(
        ConfigError::new(
            format!("failed to parse config: {}", parse.message().trim()),
            src,
            span.start,
            span.len(),
        )
        .with_help("run `fleetsel config init` for a documented template"),
    )
}
