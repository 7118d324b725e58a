//! Stub `nvim` executable placed on `PATH` for end-to-end CLI tests.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

const ARGS_FILE: &str = "args.txt";
const CWD_FILE: &str = "cwd.txt";

/// Temporary `PATH` directory holding a scripted `nvim`, plus a separate
/// working directory to launch `nvtest` from.
pub struct StubEditor {
    bin_dir: TempDir,
    workdir: TempDir,
}

impl StubEditor {
    /// Stub that records its arguments and working directory, then runs
    /// `tail` as the rest of the shell script.
    pub fn with_script(tail: &str) -> Self {
        let stub = Self::without_editor();
        let log_dir = stub.bin_dir.path().display().to_string();
        let script = format!(
            "#!/bin/sh\n\
             printf '%s\\n' \"$@\" > '{log_dir}/{ARGS_FILE}'\n\
             pwd -P > '{log_dir}/{CWD_FILE}'\n\
             {tail}\n"
        );
        stub.install(&script, 0o755);
        stub
    }

    /// Stub that exits with `code`.
    pub fn exiting_with(code: i32) -> Self {
        Self::with_script(&format!("exit {code}"))
    }

    /// Empty `PATH` directory with no `nvim` at all.
    pub fn without_editor() -> Self {
        Self {
            bin_dir: TempDir::new().expect("create stub bin dir"),
            workdir: TempDir::new().expect("create stub workdir"),
        }
    }

    /// `nvim` file that exists but lacks execute permission.
    pub fn not_executable() -> Self {
        let stub = Self::without_editor();
        stub.install("#!/bin/sh\nexit 0\n", 0o644);
        stub
    }

    /// `nvtest` command wired to this stub's `PATH` and working directory.
    pub fn command(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("nvtest");
        cmd.env("PATH", self.bin_dir.path())
            .env_remove("RUST_LOG")
            .current_dir(self.workdir.path());
        cmd
    }

    /// Working directory the stub is launched from.
    pub fn workdir(&self) -> &Path {
        self.workdir.path()
    }

    /// Arguments the stub received, one per line.
    pub fn recorded_args(&self) -> Vec<String> {
        self.read_log(ARGS_FILE)
            .lines()
            .map(str::to_owned)
            .collect()
    }

    /// Physical working directory the stub ran in.
    pub fn recorded_cwd(&self) -> PathBuf {
        PathBuf::from(self.read_log(CWD_FILE).trim_end())
    }

    fn read_log(&self, name: &str) -> String {
        fs::read_to_string(self.bin_dir.path().join(name))
            .unwrap_or_else(|err| panic!("stub did not write {name}: {err}"))
    }

    fn install(&self, script: &str, mode: u32) {
        let path = self.bin_dir.path().join("nvim");
        fs::write(&path, script).expect("write stub nvim");
        fs::set_permissions(&path, fs::Permissions::from_mode(mode)).expect("chmod stub nvim");
    }
}
