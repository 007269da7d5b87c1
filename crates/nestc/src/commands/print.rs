//! The `print` command: render a document.

use std::io::Write;

use nest_fmt::PrintConfig;

use super::{parse_count, InputOptions};
use crate::error::CliError;
use crate::input::Source;

/// Options for `nestc print`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrintOptions {
    pub input: InputOptions,
    /// JSON file holding a `PrintConfig`. Flags below override it.
    pub config_path: Option<String>,
    pub separator: Option<String>,
    pub threshold: Option<usize>,
    pub edge_items: Option<usize>,
}

impl PrintOptions {
    pub fn parse(args: &[String]) -> Result<Self, CliError> {
        let mut options = PrintOptions::default();
        for arg in args {
            if options.input.accept(arg)? {
                continue;
            }
            if let Some(sep) = arg.strip_prefix("--sep=") {
                options.separator = Some(sep.to_owned());
            } else if let Some(n) = arg.strip_prefix("--threshold=") {
                options.threshold = Some(parse_count("--threshold", n)?);
            } else if let Some(n) = arg.strip_prefix("--edge-items=") {
                options.edge_items = Some(parse_count("--edge-items", n)?);
            } else if let Some(path) = arg.strip_prefix("--config=") {
                options.config_path = Some(path.to_owned());
            } else {
                return Err(CliError::usage(format!("unknown option '{arg}' for print")));
            }
        }
        Ok(options)
    }

    /// The config file (or the default config) with flags applied on top.
    pub fn resolve_config(&self) -> Result<PrintConfig, CliError> {
        let base = match &self.config_path {
            Some(path) => {
                let text = std::fs::read_to_string(path).map_err(|source| CliError::Read {
                    origin: path.clone(),
                    source,
                })?;
                load_config(path, &text)?
            }
            None => PrintConfig::default(),
        };
        Ok(self.apply_flags(base))
    }

    /// Apply `--sep`, `--threshold` and `--edge-items` to `config`.
    pub fn apply_flags(&self, mut config: PrintConfig) -> PrintConfig {
        if let Some(separator) = &self.separator {
            config.separator.clone_from(separator);
        }
        if self.threshold.is_some() || self.edge_items.is_some() {
            let mut summary = config.summary.unwrap_or_default();
            if let Some(threshold) = self.threshold {
                summary.threshold = threshold;
            }
            if let Some(edge_items) = self.edge_items {
                summary.edge_items = edge_items;
            }
            config.summary = Some(summary);
        }
        config
    }
}

/// Parse a `PrintConfig` from JSON. Missing fields take their defaults.
pub fn load_config(path: &str, text: &str) -> Result<PrintConfig, CliError> {
    serde_json::from_str(text).map_err(|source| CliError::Config {
        path: path.to_owned(),
        source,
    })
}

/// Run `nestc print`.
pub fn run_print(options: &PrintOptions, out: &mut impl Write) -> Result<(), CliError> {
    let source = Source::read(options.input.path.as_deref())?;
    print_source(&source, options, out)
}

/// Render an already-read source and write it followed by a newline.
pub fn print_source(
    source: &Source,
    options: &PrintOptions,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let config = options.resolve_config()?;
    let document = source.parse(options.input.format())?;
    let text = document.render(config)?;
    writeln!(out, "{text}").map_err(CliError::Write)?;
    Ok(())
}
