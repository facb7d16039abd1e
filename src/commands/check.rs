//! Check command implementation - the full quality gate
//!
//! format → lint → coverage-gated tests, strictly in that order. The first
//! failing stage aborts the rest.

use anyhow::Result;
use clap::Args;

use crate::commands::{format, lint, test};
use crate::config::ProjectContext;
use crate::exec::steps::{run_steps, ProcessExecutor, Step};
use crate::exec::uv::UvRunner;
use crate::utils::terminal;

/// Full quality gate: format, lint, coverage-gated tests
#[derive(Args, Debug)]
pub struct CheckCommand {
    /// Coverage percentage the test stage must reach
    #[arg(long, default_value_t = test::DEFAULT_COVERAGE_THRESHOLD)]
    pub fail_under: u8,
}

impl CheckCommand {
    /// Execute the check command
    pub fn execute(self, ctx: &ProjectContext, verbose: bool) -> Result<()> {
        let uv = UvRunner::locate()?;
        let steps = quality_gate_steps(&uv, self.fail_under);
        run_steps(&steps, ctx.root(), &mut ProcessExecutor, verbose)?;
        terminal::print_success("All quality checks passed");
        Ok(())
    }
}

/// The ordered stages of the quality gate
pub fn quality_gate_steps(uv: &UvRunner, fail_under: u8) -> Vec<Step> {
    vec![
        format::step(uv, false),
        lint::step(uv, false),
        test::coverage_gate_step(uv, fail_under),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::steps::testing::FakeExecutor;
    use std::path::Path;

    fn gate_steps() -> Vec<Step> {
        // Steps are never spawned in these tests, any uv path works
        let uv = UvRunner::for_tests("uv");
        quality_gate_steps(&uv, 80)
    }

    #[test]
    fn test_gate_runs_format_then_lint_then_tests() {
        let steps = gate_steps();
        let names: Vec<&str> = steps.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["ruff format", "ruff lint", "pytest --cov (fail under 80%)"]
        );

        let mut exec = FakeExecutor::all_pass();
        run_steps(&steps, Path::new("."), &mut exec, false).unwrap();
        assert_eq!(exec.visited.len(), 3);
    }

    #[test]
    fn test_lint_failure_skips_the_test_stage() {
        let steps = gate_steps();
        let mut exec = FakeExecutor::failing_on(&["ruff lint"]);
        let result = run_steps(&steps, Path::new("."), &mut exec, false);

        assert!(result.is_err());
        assert_eq!(exec.visited, vec!["ruff format", "ruff lint"]);
    }

    #[test]
    fn test_coverage_gate_carries_the_threshold() {
        let steps = gate_steps();
        let gate = steps.last().unwrap();
        assert!(gate
            .args
            .iter()
            .any(|a| a == "--cov-fail-under=80"));
    }
}
