//! Binary entry point for the `nvtest` CLI.

use std::env;
use std::io::{self, Write};
use std::path::Path;
use std::process;

use clap::Parser;
use thiserror::Error;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use nvtest::{InvokeError, exit_code_for};

mod cli;

use cli::Cli;

/// Exit code when the editor executable is not on `PATH`.
const EXIT_NOT_FOUND: i32 = 127;

/// Exit code when the editor exists but could not be started.
const EXIT_CANNOT_EXECUTE: i32 = 126;

#[derive(Debug, Error)]
enum CliError {
    #[error("{0}")]
    Invoke(#[from] InvokeError),
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            Self::Invoke(err) if err.is_not_found() => EXIT_NOT_FOUND,
            Self::Invoke(_) => EXIT_CANNOT_EXECUTE,
        }
    }
}

fn main() {
    Cli::parse();
    init_tracing();

    let exit_code = match dispatch() {
        Ok(code) => code,
        Err(err) => {
            report_error(&err);
            err.exit_code()
        }
    };

    process::exit(exit_code);
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env())
        .init();
}

fn dispatch() -> Result<i32, CliError> {
    let cwd = env::current_dir().ok();
    write_banner(io::stdout(), cwd.as_deref());

    let passed = nvtest::run_tests()?;
    Ok(exit_code_for(passed))
}

fn write_banner(mut target: impl Write, cwd: Option<&Path>) {
    match cwd.and_then(Path::file_name) {
        Some(name) => writeln!(target, "Testing {}...", name.to_string_lossy()).ok(),
        None => writeln!(target, "Testing...").ok(),
    };
}

fn report_error(err: &CliError) {
    write_error(io::stderr(), err);
}

fn write_error(mut target: impl Write, err: &CliError) {
    writeln!(target, "nvtest: {err}").ok();
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
