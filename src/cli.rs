use std::ffi::OsString;
use std::io::Write;

use clap::Parser;
use clap::error::ErrorKind;

use crate::scanner::DEFAULT_TIMEOUT_SECS;

pub const USAGE: &str =
    "Usage: api-speculator <base_url>\nExample: api-speculator https://api.example.com";

#[derive(Parser, Debug)]
#[command(name = "api-speculator")]
#[command(version, about = "Guesses which common API endpoints a server answers on")]
pub struct Cli {
    /// Base address of the API, e.g. https://api.example.com
    pub base_url: String,

    /// Per-request timeout in seconds
    #[arg(short, long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    #[arg(short, long)]
    pub verbose: bool,
}

/// A missing base URL writes the usage text to `out` and yields `Ok(None)`;
/// the caller exits with status 1. Other clap errors are returned untouched.
pub fn parse_args<I, T, W>(args: I, out: &mut W) -> Result<Option<Cli>, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(e) if e.kind() == ErrorKind::MissingRequiredArgument => {
            writeln!(out, "{}", USAGE)?;
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
