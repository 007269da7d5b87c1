//! The `ndim` command: print a document's dimension.

use std::io::Write;

use super::InputOptions;
use crate::error::CliError;
use crate::input::Source;

/// Options for `nestc ndim`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NdimOptions {
    pub input: InputOptions,
}

impl NdimOptions {
    pub fn parse(args: &[String]) -> Result<Self, CliError> {
        let mut options = NdimOptions::default();
        for arg in args {
            if !options.input.accept(arg)? {
                return Err(CliError::usage(format!("unknown option '{arg}' for ndim")));
            }
        }
        Ok(options)
    }
}

/// Run `nestc ndim`.
pub fn run_ndim(options: &NdimOptions, out: &mut impl Write) -> Result<(), CliError> {
    let source = Source::read(options.input.path.as_deref())?;
    ndim_source(&source, options, out)
}

pub fn ndim_source(source: &Source, options: &NdimOptions, out: &mut impl Write) -> Result<(), CliError> {
    let document = source.parse(options.input.format())?;
    let ndim = document.ndim()?;
    writeln!(out, "{ndim}").map_err(CliError::Write)?;
    Ok(())
}
