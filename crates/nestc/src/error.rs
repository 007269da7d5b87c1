//! CLI errors.

use std::io;

use nest_fmt::{MalformedInput, PrintError};
use nest_parse::ParseError;

/// Any failure of a `nestc` command. Reported as a single `error:` line.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Bad command-line arguments.
    #[error("{0}")]
    Usage(String),

    #[error("failed to read {origin}: {source}")]
    Read { origin: String, source: io::Error },

    #[error("{origin}: {source}")]
    Parse { origin: String, source: ParseError },

    #[error("{origin}: invalid JSON: {source}")]
    Json {
        origin: String,
        source: serde_json::Error,
    },

    #[error("invalid config {path}: {source}")]
    Config {
        path: String,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Print(#[from] PrintError),

    #[error(transparent)]
    Malformed(#[from] MalformedInput),

    #[error("failed to write output: {0}")]
    Write(#[source] io::Error),
}

impl CliError {
    pub(crate) fn usage(message: impl Into<String>) -> Self {
        CliError::Usage(message.into())
    }
}
