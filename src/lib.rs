//! Random version-4 UUID generation.
//!
//! [`V4Generator`] stamps 16 bytes of entropy with the version and variant
//! bits and returns them either as the canonical string or written into a
//! caller buffer. Entropy comes from explicit bytes, a caller supplier, or a
//! pluggable [`ports::RandomSource`] whose live, recording and replaying
//! adapters live in [`adapters`].

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod context;
pub mod error;
pub mod generator;
pub mod logging;
pub mod metrics;
pub mod ports;

pub use error::GenerateError;
pub use generator::{v4, v4_into, v4_with, V4Generator, V4Options, UUID_LEN};

use clap::error::ErrorKind;
use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    commands::dispatch(&cli.command)
}
