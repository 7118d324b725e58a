//! Synchronous child process execution.
//!
//! The runner spawns a program, waits for it to finish, and reports its exit
//! code. Standard streams are inherited so the child writes straight to the
//! invoking terminal.

use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::process::Command;

use thiserror::Error;

/// Exit status reported by a finished child process.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ExitOutcome {
    /// Exit code, or `None` when the child was terminated by a signal.
    pub code: Option<i32>,
}

impl ExitOutcome {
    /// Outcome for a child that exited with `code`.
    #[must_use]
    pub const fn exited(code: i32) -> Self {
        Self { code: Some(code) }
    }

    /// Outcome for a child that terminated without an exit code.
    #[must_use]
    pub const fn signalled() -> Self {
        Self { code: None }
    }

    /// Returns `true` when the exit code equals zero.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.code, Some(0))
    }
}

/// Errors raised before a child process produced an exit status.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum InvokeError {
    /// Raised when the program cannot be started.
    #[error("failed to start {program}: {message}")]
    Spawn {
        /// Program that failed to start.
        program: String,
        /// Category of the underlying operating system error.
        kind: io::ErrorKind,
        /// Operating system error string.
        message: String,
    },
    /// Raised when the current working directory cannot be resolved.
    #[error("cannot determine working directory: {message}")]
    WorkingDirectory {
        /// Operating system error string.
        message: String,
    },
}

impl InvokeError {
    /// Returns `true` when the program could not be located.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Spawn {
                kind: io::ErrorKind::NotFound,
                ..
            }
        )
    }
}

/// Abstraction over process execution to support fakes in tests.
pub trait CommandRunner {
    /// Runs `program` with `args` in `cwd` and waits for it to exit.
    ///
    /// # Errors
    ///
    /// Returns [`InvokeError::Spawn`] if the program cannot be started.
    fn run(
        &self,
        program: &str,
        args: &[OsString],
        cwd: &Path,
    ) -> Result<ExitOutcome, InvokeError>;
}

/// Real command runner that shells out to the host operating system.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessCommandRunner;

impl CommandRunner for ProcessCommandRunner {
    fn run(
        &self,
        program: &str,
        args: &[OsString],
        cwd: &Path,
    ) -> Result<ExitOutcome, InvokeError> {
        let status = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .status()
            .map_err(|err| InvokeError::Spawn {
                program: program.to_owned(),
                kind: err.kind(),
                message: err.to_string(),
            })?;

        Ok(ExitOutcome {
            code: status.code(),
        })
    }
}
