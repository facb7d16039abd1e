//! uv tool discovery and invocation helpers
//!
//! All project tooling (pytest, ruff, python) is invoked through `uv run`
//! so the project virtualenv is always the one exercised.

use std::path::{Path, PathBuf};

use anyhow::Result;
use regex::Regex;

use crate::error::UvdevError;
use crate::exec::steps::Step;
use crate::exec::subprocess::{run_command, CommandResult};

/// Handle to a located uv binary
pub struct UvRunner {
    uv_path: PathBuf,
}

impl UvRunner {
    /// Locate uv on PATH
    pub fn locate() -> Result<Self, UvdevError> {
        let uv_path = which::which("uv").map_err(|_| {
            UvdevError::missing_tool(
                "uv",
                "all project operations",
                "Install uv: curl -LsSf https://astral.sh/uv/install.sh | sh",
            )
        })?;
        Ok(Self { uv_path })
    }

    /// Path to the uv binary
    pub fn path(&self) -> &Path {
        &self.uv_path
    }

    /// Runner over a fixed path, for step-construction tests
    #[cfg(test)]
    pub(crate) fn for_tests(path: impl Into<PathBuf>) -> Self {
        Self {
            uv_path: path.into(),
        }
    }

    /// Build a step invoking uv directly (`uv <args>`)
    pub fn step(
        &self,
        name: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<String>>,
    ) -> Step {
        Step::new(name, &self.uv_path, args)
    }

    /// Build a step invoking a tool inside the project env (`uv run <tool> ...`)
    pub fn run_step(
        &self,
        name: impl Into<String>,
        tool_args: impl IntoIterator<Item = impl Into<String>>,
    ) -> Step {
        let mut args = vec!["run".to_string()];
        args.extend(tool_args.into_iter().map(Into::into));
        Step::new(name, &self.uv_path, args)
    }

    /// Run uv with captured output (version queries, exports)
    pub fn run_captured(&self, args: &[String], cwd: &Path) -> Result<CommandResult> {
        run_command(&self.uv_path, args, cwd, false)
    }

    /// uv's own version, if it reports one
    pub fn version(&self, cwd: &Path) -> Option<String> {
        let result = self
            .run_captured(&["--version".to_string()], cwd)
            .ok()
            .filter(|r| r.success)?;
        extract_version(&result.stdout)
    }

    /// Version of the project interpreter, via `uv run python --version`
    pub fn python_version(&self, cwd: &Path) -> Option<String> {
        let args: Vec<String> = ["run", "python", "--version"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let result = self.run_captured(&args, cwd).ok().filter(|r| r.success)?;
        // some interpreters report the version on stderr
        extract_version(&result.stdout).or_else(|| extract_version(&result.stderr))
    }

    /// Version of a tool inside the project env, via `uv run <tool> --version`
    pub fn tool_version(&self, tool: &str, cwd: &Path) -> Option<String> {
        let args: Vec<String> = ["run", tool, "--version"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let result = self.run_captured(&args, cwd).ok().filter(|r| r.success)?;
        extract_version(&result.stdout)
    }
}

/// Pull the first dotted version number out of tool output
fn extract_version(output: &str) -> Option<String> {
    let re = Regex::new(r"(\d+\.\d+(?:\.\d+)?)").ok()?;
    re.captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
