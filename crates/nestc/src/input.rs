//! Reading and parsing input documents.

use std::io::Read;
use std::path::Path;

use nest_fmt::{DisplayLeaf, MalformedInput, PrintConfig, PrintError, StructuralPrinter};
use nest_ir::{Atom, NestedValue};

use crate::error::CliError;

/// Notation of an input document.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputFormat {
    /// Bracket literal notation read by `nest_parse`.
    Literal,
    Json,
}

impl InputFormat {
    /// JSON when forced or when the path ends in `.json`, literal otherwise.
    pub fn detect(path: Option<&str>, force_json: bool) -> Self {
        let is_json_file = path.is_some_and(|path| {
            Path::new(path)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
        });
        if force_json || is_json_file {
            InputFormat::Json
        } else {
            InputFormat::Literal
        }
    }
}

/// Raw input text and where it came from.
pub struct Source {
    /// File path, or `<stdin>`.
    pub origin: String,
    pub text: String,
}

impl Source {
    pub fn new(origin: impl Into<String>, text: impl Into<String>) -> Self {
        Source {
            origin: origin.into(),
            text: text.into(),
        }
    }

    /// Read a file, or stdin when `path` is `None` or `-`.
    pub fn read(path: Option<&str>) -> Result<Self, CliError> {
        match path {
            None | Some("-") => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .map_err(|source| CliError::Read {
                        origin: "<stdin>".to_owned(),
                        source,
                    })?;
                Ok(Source::new("<stdin>", text))
            }
            Some(path) => {
                let text = std::fs::read_to_string(path).map_err(|source| CliError::Read {
                    origin: path.to_owned(),
                    source,
                })?;
                Ok(Source::new(path, text))
            }
        }
    }

    pub fn parse(&self, format: InputFormat) -> Result<Document, CliError> {
        tracing::debug!(origin = %self.origin, ?format, bytes = self.text.len(), "parsing input");
        match format {
            InputFormat::Literal => nest_parse::parse(&self.text)
                .map(Document::Literal)
                .map_err(|source| CliError::Parse {
                    origin: self.origin.clone(),
                    source,
                }),
            InputFormat::Json => serde_json::from_str(&self.text)
                .map(Document::Json)
                .map_err(|source| CliError::Json {
                    origin: self.origin.clone(),
                    source,
                }),
        }
    }
}

/// A parsed input document.
#[derive(Debug)]
pub enum Document {
    Literal(NestedValue<Atom>),
    Json(serde_json::Value),
}

impl Document {
    pub fn render(&self, config: PrintConfig) -> Result<String, PrintError> {
        let mut printer = StructuralPrinter::with_config(DisplayLeaf, config);
        match self {
            Document::Literal(value) => printer.render(value),
            Document::Json(value) => printer.render(value),
        }
    }

    pub fn ndim(&self) -> Result<usize, MalformedInput> {
        match self {
            Document::Literal(value) => nest_fmt::ndim(value),
            Document::Json(value) => nest_fmt::ndim(value),
        }
    }
}
