//! Test support utilities shared across unit and integration tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::runner::{CommandRunner, ExitOutcome, InvokeError};

/// Scripted command runner that returns pre-seeded outcomes in FIFO order.
///
/// Used to drive deterministic exit codes without spawning processes.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRunner {
    responses: Rc<RefCell<VecDeque<Result<ExitOutcome, InvokeError>>>>,
    invocations: Rc<RefCell<Vec<CommandInvocation>>>,
}

/// Records a single invocation made through [`ScriptedRunner`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CommandInvocation {
    /// Program name as passed to the runner.
    pub program: String,
    /// Arguments passed to the program.
    pub args: Vec<OsString>,
    /// Working directory the child would have started in.
    pub cwd: PathBuf,
}

impl CommandInvocation {
    /// Returns the program followed by its arguments.
    #[must_use]
    pub fn argv(&self) -> Vec<OsString> {
        let mut argv = Vec::with_capacity(self.args.len() + 1);
        argv.push(OsString::from(&self.program));
        argv.extend(self.args.iter().cloned());
        argv
    }
}

impl ScriptedRunner {
    /// Creates a new runner with no queued responses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all invocations recorded so far.
    #[must_use]
    pub fn invocations(&self) -> Vec<CommandInvocation> {
        self.invocations.borrow().clone()
    }

    /// Pushes a specific exit code.
    pub fn push_exit_code(&self, code: i32) {
        self.responses
            .borrow_mut()
            .push_back(Ok(ExitOutcome::exited(code)));
    }

    /// Pushes a termination without an exit code.
    pub fn push_signalled(&self) {
        self.responses
            .borrow_mut()
            .push_back(Ok(ExitOutcome::signalled()));
    }

    /// Pushes a spawn failure of the given kind.
    pub fn push_spawn_failure(&self, kind: io::ErrorKind) {
        self.responses.borrow_mut().push_back(Err(InvokeError::Spawn {
            program: String::from("scripted"),
            kind,
            message: io::Error::from(kind).to_string(),
        }));
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(
        &self,
        program: &str,
        args: &[OsString],
        cwd: &Path,
    ) -> Result<ExitOutcome, InvokeError> {
        self.invocations.borrow_mut().push(CommandInvocation {
            program: program.to_owned(),
            args: args.to_vec(),
            cwd: cwd.to_path_buf(),
        });
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(ExitOutcome::exited(0)))
    }
}
