//! Core library for the `nvtest` headless test invoker.
//!
//! The crate starts Neovim headless with no user configuration, has it source
//! the plugin's Lua test runner, and reduces the editor's exit status to a
//! pass/fail result that the binary turns into its own exit code.

pub mod invocation;
pub mod invoker;
pub mod runner;
pub mod test_support;

pub use invocation::{EDITOR_PROGRAM, Invocation, RUNNER_SCRIPT};
pub use invoker::{EXIT_FAILURE, EXIT_SUCCESS, TestInvoker, exit_code_for, run_tests};
pub use runner::{CommandRunner, ExitOutcome, InvokeError, ProcessCommandRunner};
