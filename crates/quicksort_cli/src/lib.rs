//! Command-line driver around the `quicksort` crate.
//!
//! Acquires a sequence of integers (arguments, a file, stdin, or the built-in
//! demo sequence), prints it, sorts it in place and prints it again.
//!
//! Command functions return `CliResult<T>`; only `main` turns an error into a
//! process exit.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod display;
pub mod input;

use std::fmt;
use std::io::{Read, Write};
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use quicksort::SortVariant;

use crate::display::format_sequence;
use crate::input::{InputError, InputSource};

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// User-facing error plus the exit code to leave with.
#[derive(Debug)]
pub struct CliError {
    pub message: String,
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

impl From<InputError> for CliError {
    fn from(err: InputError) -> Self {
        Self::failure(err.to_string())
    }
}

pub type CliResult<T> = Result<T, CliError>;

/// Sort integers in place with Lomuto quicksort
#[derive(Parser, Debug)]
#[command(name = "quicksort", version, long_about = None)]
pub struct Cli {
    /// Integers to sort (the demo sequence is used when none are given)
    #[arg(value_name = "VALUES", allow_negative_numbers = true, conflicts_with = "input")]
    pub values: Vec<i64>,

    /// Read whitespace or comma separated integers from FILE (`-` for stdin)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Sorter to use: `recursive` or `tail-loop`
    #[arg(long, env = "QUICKSORT_VARIANT", default_value = "recursive")]
    pub variant: SortVariant,

    /// Fail if the result is not in non-decreasing order
    #[arg(long)]
    pub check: bool,
}

pub fn run<R: Read, W: Write>(cli: &Cli, stdin: R, out: &mut W) -> CliResult<()> {
    let source = InputSource::new(&cli.values, cli.input.as_deref());
    let mut values = source.read_values(stdin)?;
    tracing::debug!(%source, len = values.len(), variant = %cli.variant, "sequence loaded");

    write_sequence(out, "Unsorted array:", &values)?;

    let started = Instant::now();
    quicksort::sort_with_variant(cli.variant, &mut values);
    tracing::debug!(elapsed = ?started.elapsed(), "sequence sorted");

    if cli.check && !values.is_sorted() {
        return Err(CliError::failure("sorted output is not in non-decreasing order"));
    }

    write_sequence(out, "Sorted array:", &values)
}

fn write_sequence<W: Write>(out: &mut W, label: &str, values: &[i64]) -> CliResult<()> {
    writeln!(out, "{label} {}", format_sequence(values))
        .map_err(|err| CliError::failure(format!("failed to write output: {err}")))
}
