//! Common test utilities for proteus-deploy CLI tests.
//!
//! Provides `TestEnv` - an isolated project directory plus helpers to run
//! the compiled binary and capture its output.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running a proteus-deploy CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment with a temp project directory.
pub struct TestEnv {
    /// Temporary directory standing in for a project checkout
    pub project_root: TempDir,
    /// Path to the proteus-deploy binary
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("create temp project dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_proteus-deploy")),
        }
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Drop a built artifact into `Build/<app>.s19`
    pub fn with_artifact(self, app: &str, bytes: &[u8]) -> Self {
        let build = self.project_path("Build");
        std::fs::create_dir_all(&build).expect("create Build dir");
        std::fs::write(build.join(format!("{}.s19", app)), bytes).expect("write artifact");
        self
    }

    /// Run proteus-deploy from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from(self.project_root.path(), args)
    }

    /// Run proteus-deploy from a specific directory
    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        let output = Command::new(&self.bin)
            .current_dir(cwd)
            .args(args)
            .output()
            .expect("Failed to execute proteus-deploy");

        output_to_result(output)
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
