//! Test environment builder for isolated deploywatch runs.
//!
//! Provides `TestEnv` - a temp project directory plus a temp home holding a
//! scripted stand-in for the platform CLI, and helpers to run the binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

use super::fixtures::FAKE_PLATFORM_CLI;

/// Environment variables that must not leak in from the developer's shell.
const SCRUBBED_ENV: &[&str] = &[
    "RUST_LOG",
    "CI",
    "GITHUB_ACTIONS",
    "VERCEL",
    "DEPLOYWATCH_COMMAND",
    "DEPLOYWATCH_MAX_WAIT",
    "DEPLOYWATCH_LOG_LIMIT",
    "DEPLOYWATCH_REPORT_PATH",
];

/// Result of running the deploywatch binary
#[derive(Debug)]
pub struct TestResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Parse stdout as NDJSON.
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("invalid JSON line {:?}: {}", line, e))
            })
            .collect()
    }

    /// Names of the NDJSON events, in order.
    pub fn event_names(&self) -> Vec<String> {
        self.json_lines()
            .iter()
            .filter_map(|v| v["event"].as_str().map(str::to_string))
            .collect()
    }
}

/// Isolated environment with a scripted platform CLI.
///
/// Provides:
/// - Isolated project directory (the working directory of every run)
/// - Isolated home directory holding the fake CLI and its state
/// - A `deploywatch.toml` pointing the provider at the fake CLI
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    fake_dir: PathBuf,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::default()
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Number of `ls` invocations the fake CLI has served.
    pub fn status_calls(&self) -> usize {
        fs::read_to_string(self.fake_dir.join("calls"))
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Arguments of the last `logs` invocation, if any.
    pub fn logs_args(&self) -> Option<String> {
        fs::read_to_string(self.fake_dir.join("logs_args"))
            .ok()
            .map(|s| s.trim().to_string())
    }

    /// Run deploywatch from the project root.
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run deploywatch from the project root with extra env vars.
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_deploywatch"));
        cmd.args(args)
            .current_dir(self.project_root.path())
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("NO_COLOR", "1")
            .env("DEPLOYWATCH_INTERVAL", "0");
        for key in SCRUBBED_ENV {
            cmd.env_remove(key);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("failed to run deploywatch binary");
        TestResult {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

/// Builder for `TestEnv`.
#[derive(Default)]
pub struct TestEnvBuilder {
    statuses: Vec<String>,
    logs: Option<String>,
    extra_config: String,
    write_config: bool,
}

impl TestEnvBuilder {
    /// One `ls --json` response per poll; the last one repeats.
    pub fn with_status_responses(mut self, responses: &[&str]) -> Self {
        self.statuses = responses.iter().map(|s| s.to_string()).collect();
        self.write_config = true;
        self
    }

    /// Shorthand: responses for a single deployment moving through `states`.
    pub fn with_states(self, url: &str, states: &[&str]) -> Self {
        let responses: Vec<String> = states
            .iter()
            .map(|state| super::fixtures::deployment_json(state, url))
            .collect();
        let refs: Vec<&str> = responses.iter().map(String::as_str).collect();
        self.with_status_responses(&refs)
    }

    /// Output of `logs`. Without this the fake CLI's `logs` exits non-zero.
    pub fn with_logs(mut self, logs: &str) -> Self {
        self.logs = Some(logs.to_string());
        self
    }

    /// Extra TOML appended to the generated `deploywatch.toml`.
    pub fn with_config(mut self, toml: &str) -> Self {
        self.extra_config = toml.to_string();
        self.write_config = true;
        self
    }

    pub fn build(self) -> TestEnv {
        let project_root = TempDir::new().expect("failed to create project dir");
        let home_dir = TempDir::new().expect("failed to create home dir");
        let fake_dir = home_dir.path().join("fake-platform");
        fs::create_dir_all(&fake_dir).expect("failed to create fake CLI dir");

        let script = fake_dir.join("platform.sh");
        fs::write(&script, FAKE_PLATFORM_CLI).expect("failed to write fake CLI");

        for (i, response) in self.statuses.iter().enumerate() {
            write(&fake_dir, &format!("status.{}", i + 1), response);
        }
        if let Some(last) = self.statuses.last() {
            write(&fake_dir, "status.last", last);
        }
        if let Some(logs) = &self.logs {
            write(&fake_dir, "logs.txt", logs);
        }

        if self.write_config {
            let config = format!(
                "[provider]\ncommand = \"sh\"\nargs = ['{}']\n\n{}",
                script.display(),
                self.extra_config
            );
            fs::write(project_root.path().join("deploywatch.toml"), config)
                .expect("failed to write deploywatch.toml");
        }

        TestEnv {
            project_root,
            home_dir,
            fake_dir,
        }
    }
}

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).expect("failed to write fake CLI state");
}
