//! Test command implementations
//!
//! `test` streams a plain pytest run; `test-cov` adds a coverage report and
//! optionally a fail-under gate. The gated step is also the one `check` and
//! `build` reuse.

use anyhow::Result;
use clap::Args;

use crate::config::ProjectContext;
use crate::exec::steps::{run_steps, ProcessExecutor, Step};
use crate::exec::uv::UvRunner;

/// Default coverage threshold for gated runs (percent)
pub const DEFAULT_COVERAGE_THRESHOLD: u8 = 80;

/// Run the pytest suite
#[derive(Args, Debug)]
pub struct TestCommand {
    /// Extra arguments passed straight to pytest
    #[arg(last = true)]
    pub pytest_args: Vec<String>,
}

impl TestCommand {
    /// Execute the test command
    pub fn execute(self, ctx: &ProjectContext, verbose: bool) -> Result<()> {
        let uv = UvRunner::locate()?;
        let steps = vec![suite_step(&uv, &self.pytest_args)];
        run_steps(&steps, ctx.root(), &mut ProcessExecutor, verbose)
    }
}

/// Run the pytest suite with a coverage report
#[derive(Args, Debug)]
pub struct TestCovCommand {
    /// Fail if total coverage drops below this percentage
    #[arg(long)]
    pub fail_under: Option<u8>,
}

impl TestCovCommand {
    /// Execute the test-cov command
    pub fn execute(self, ctx: &ProjectContext, verbose: bool) -> Result<()> {
        let uv = UvRunner::locate()?;
        let step = match self.fail_under {
            Some(threshold) => coverage_gate_step(&uv, threshold),
            None => coverage_step(&uv),
        };
        run_steps(&[step], ctx.root(), &mut ProcessExecutor, verbose)
    }
}

/// Plain pytest run with optional extra arguments
pub fn suite_step(uv: &UvRunner, extra_args: &[String]) -> Step {
    let mut args = vec!["pytest".to_string()];
    args.extend(extra_args.iter().cloned());
    uv.run_step("pytest", args)
}

/// pytest with a terminal coverage report, no threshold
pub fn coverage_step(uv: &UvRunner) -> Step {
    uv.run_step(
        "pytest --cov",
        ["pytest", "--cov=src", "--cov-report=term-missing"],
    )
}

/// Coverage-gated pytest run: fails when coverage drops below `threshold`
pub fn coverage_gate_step(uv: &UvRunner, threshold: u8) -> Step {
    uv.run_step(
        format!("pytest --cov (fail under {threshold}%)"),
        [
            "pytest".to_string(),
            "--cov=src".to_string(),
            "--cov-report=term-missing".to_string(),
            format!("--cov-fail-under={threshold}"),
        ],
    )
}
