//! The fixed editor command line used to run the plugin test suite.
//!
//! The editor is started headless with no user configuration, sources the
//! Lua test runner, then quits. None of these values are read from the
//! environment.

use std::ffi::OsString;

use camino::{Utf8Path, Utf8PathBuf};
use shell_escape::unix::escape;

/// Editor executable resolved through `PATH`.
pub const EDITOR_PROGRAM: &str = "nvim";

/// Lua test runner sourced by the editor, relative to the working directory.
pub const RUNNER_SCRIPT: &str = "test/run_tests.lua";

/// Editor command line: program name plus its argument tail.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Invocation {
    program: String,
    script: Utf8PathBuf,
}

impl Default for Invocation {
    fn default() -> Self {
        Self {
            program: EDITOR_PROGRAM.to_owned(),
            script: Utf8PathBuf::from(RUNNER_SCRIPT),
        }
    }
}

impl Invocation {
    /// Program name handed to the process spawner.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Test runner script loaded by the bootstrap expression.
    #[must_use]
    pub fn script(&self) -> &Utf8Path {
        &self.script
    }

    /// Arguments following the program name, in order.
    #[must_use]
    pub fn args(&self) -> Vec<OsString> {
        vec![
            OsString::from("--headless"),
            OsString::from("-u"),
            OsString::from("NONE"),
            OsString::from(self.bootstrap_command()),
            OsString::from("+qa"),
        ]
    }

    /// Full argument vector including the program name.
    #[must_use]
    pub fn argv(&self) -> Vec<OsString> {
        let mut argv = Vec::with_capacity(6);
        argv.push(OsString::from(&self.program));
        argv.extend(self.args());
        argv
    }

    /// Renders the argument vector as a shell-quoted line for diagnostics.
    #[must_use]
    pub fn render(&self) -> String {
        self.argv()
            .iter()
            .map(|arg| {
                let lossy = arg.to_string_lossy();
                escape(lossy).into_owned()
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn bootstrap_command(&self) -> String {
        format!("+lua dofile('{}')", self.script)
    }
}
