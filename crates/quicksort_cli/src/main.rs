//! `quicksort` binary entry point

use std::io;
use std::process;

use clap::Parser;
use quicksort_cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr so stdout only carries the sequences
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .try_init();

    let cli = Cli::parse();
    let mut stdout = io::stdout().lock();
    if let Err(err) = quicksort_cli::run(&cli, io::stdin().lock(), &mut stdout) {
        tracing::debug!(code = err.exit_code.0, "exiting with error");
        eprintln!("error: {err}");
        process::exit(err.exit_code.0);
    }
}
