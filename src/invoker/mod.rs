//! Runs the plugin test suite in a headless editor and reports pass/fail.
//!
//! The invoker spawns the fixed [`Invocation`] in the caller's working
//! directory, waits for it, and collapses the child's exit status into a
//! boolean. Start-up failures are returned as errors rather than folded into
//! a `false` result.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::invocation::Invocation;
use crate::runner::{CommandRunner, InvokeError, ProcessCommandRunner};

/// Exit code used when the test suite passed.
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code used for any failing child status.
pub const EXIT_FAILURE: i32 = 1;

/// Spawns the editor test run through a [`CommandRunner`].
#[derive(Debug)]
pub struct TestInvoker<R: CommandRunner> {
    invocation: Invocation,
    runner: R,
}

impl TestInvoker<ProcessCommandRunner> {
    /// Convenience constructor that wires the real process runner.
    #[must_use]
    pub fn with_process_runner() -> Self {
        Self::new(ProcessCommandRunner)
    }
}

impl<R: CommandRunner> TestInvoker<R> {
    /// Creates an invoker for the fixed editor command line.
    #[must_use]
    pub fn new(runner: R) -> Self {
        Self {
            invocation: Invocation::default(),
            runner,
        }
    }

    /// Command line this invoker spawns.
    #[must_use]
    pub const fn invocation(&self) -> &Invocation {
        &self.invocation
    }

    /// Runs the suite in the current working directory.
    ///
    /// # Errors
    ///
    /// Returns [`InvokeError::WorkingDirectory`] when the working directory
    /// cannot be read, or [`InvokeError::Spawn`] when the editor fails to
    /// start.
    pub fn run_tests(&self) -> Result<bool, InvokeError> {
        let cwd = std::env::current_dir().map_err(|err| InvokeError::WorkingDirectory {
            message: err.to_string(),
        })?;
        self.run_tests_in(&cwd)
    }

    /// Runs the suite with `cwd` as the child's working directory.
    ///
    /// Returns `true` only when the child exited with code zero.
    ///
    /// # Errors
    ///
    /// Returns [`InvokeError::Spawn`] when the editor fails to start.
    pub fn run_tests_in(&self, cwd: &Path) -> Result<bool, InvokeError> {
        debug!(
            command = %self.invocation.render(),
            cwd = %cwd.display(),
            "spawning headless editor"
        );
        let outcome = self.runner.run(
            self.invocation.program(),
            &self.invocation.args(),
            cwd,
        )?;

        let passed = outcome.is_success();
        if passed {
            info!("test suite passed");
        } else {
            warn!(code = ?outcome.code, "test suite failed");
        }
        Ok(passed)
    }
}

/// Runs the plugin test suite with the real process runner.
///
/// # Errors
///
/// Propagates [`InvokeError`] when the editor cannot be started.
pub fn run_tests() -> Result<bool, InvokeError> {
    TestInvoker::with_process_runner().run_tests()
}

/// Collapses a pass/fail result into a process exit code.
#[must_use]
pub const fn exit_code_for(passed: bool) -> i32 {
    if passed { EXIT_SUCCESS } else { EXIT_FAILURE }
}
