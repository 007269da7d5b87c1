//! Command handlers for the `nestc` CLI.
//!
//! Each command parses its own arguments into an options struct and runs
//! against an output writer, so handlers can be tested without a process.

mod ndim;
mod print;

pub use ndim::{ndim_source, run_ndim, NdimOptions};
pub use print::{load_config, print_source, run_print, PrintOptions};

use crate::error::CliError;
use crate::input::InputFormat;

/// Input selection shared by every command.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputOptions {
    /// File to read. `None` or `-` reads stdin.
    pub path: Option<String>,
    /// Parse as JSON regardless of the file extension.
    pub json: bool,
}

impl InputOptions {
    /// Consume `arg` if it selects the input. Returns `false` for anything
    /// else so the caller can try its own options.
    fn accept(&mut self, arg: &str) -> Result<bool, CliError> {
        if arg == "--json" {
            self.json = true;
            return Ok(true);
        }
        if arg == "-" || !arg.starts_with('-') {
            if let Some(previous) = &self.path {
                return Err(CliError::usage(format!(
                    "more than one input given: '{previous}' and '{arg}'"
                )));
            }
            self.path = Some(arg.to_owned());
            return Ok(true);
        }
        Ok(false)
    }

    pub fn format(&self) -> InputFormat {
        InputFormat::detect(self.path.as_deref(), self.json)
    }
}

/// Parse the value of a numeric `--flag=N` option.
fn parse_count(flag: &str, value: &str) -> Result<usize, CliError> {
    value
        .parse()
        .map_err(|_| CliError::usage(format!("{flag} expects a non-negative integer, got '{value}'")))
}
