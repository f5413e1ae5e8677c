//! Test environment for isolated treepick CLI runs.
//!
//! Each `TestEnv` owns a project directory (the working directory of every
//! run) and a config home, so neither the developer's user config nor their
//! `TREEPICK_*` variables leak into a test.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use serde_json::Value;
use tempfile::TempDir;

const INHERITED_VARS: &[&str] = &[
    "TREEPICK_NODE_KEY",
    "TREEPICK_BRANCH_KEY",
    "TREEPICK_LEAF_KEY",
    "TREEPICK_OPEN",
    "TREEPICK_CHECK",
    "TREEPICK_ID",
    "TREEPICK_FETCH_URL",
    "TREEPICK_VERBOSITY",
    "TREEPICK_LOG",
];

/// Result of running a treepick CLI command
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

    /// Parse stdout as NDJSON, one value per non-empty line
    pub fn events(&self) -> Vec<Value> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("stdout line is not JSON ({e}): {line}"))
            })
            .collect()
    }

    /// Events whose `event` field equals `kind`
    pub fn events_of(&self, kind: &str) -> Vec<Value> {
        self.events()
            .into_iter()
            .filter(|event| event["event"] == kind)
            .collect()
    }
}

pub struct TestEnv {
    pub project_root: TempDir,
    pub config_home: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("Failed to create project dir"),
            config_home: TempDir::new().expect("Failed to create config home"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_treepick")),
        }
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Write a file to the project directory, creating parents
    pub fn write_project_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&path, content).expect("Failed to write project file");
        path
    }

    /// Run treepick from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = self.command(args);
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        to_result(cmd.output().expect("Failed to execute treepick"))
    }

    /// Run treepick with `stdin` piped in
    pub fn run_with_stdin(&self, args: &[&str], stdin: &str) -> TestResult {
        let mut child = self
            .command(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn treepick");
        child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(stdin.as_bytes())
            .expect("Failed to write stdin");
        to_result(child.wait_with_output().expect("Failed to wait for treepick"))
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("HOME", self.config_home.path())
            .env("XDG_CONFIG_HOME", self.config_home.path())
            .env("LANG", "en_US.UTF-8");
        for var in INHERITED_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    pub fn root(&self) -> &Path {
        self.project_root.path()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
