//! Command-line interface definitions for the `nvtest` binary.
//!
//! The binary takes no options of its own; the parser only supplies
//! `--help` and `--version`. The build script reuses this definition when
//! generating the manual page.

use clap::Parser;

/// Top-level CLI for the `nvtest` binary.
#[derive(Debug, Parser)]
#[command(
    name = "nvtest",
    version,
    about = "Run the plugin's Lua test suite in headless Neovim",
    long_about = "Run the plugin's Lua test suite in headless Neovim.\n\n\
        Starts `nvim --headless -u NONE` in the current directory, sources \
        test/run_tests.lua and quits. Exits 0 when the editor exits 0 and 1 \
        for any other status. Exits 127 when nvim cannot be found and 126 when \
        it cannot be started."
)]
pub(crate) struct Cli {}
