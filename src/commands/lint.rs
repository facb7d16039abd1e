//! Lint command implementation

use anyhow::Result;
use clap::Args;

use crate::config::ProjectContext;
use crate::exec::steps::{run_steps, ProcessExecutor, Step};
use crate::exec::uv::UvRunner;

/// Style-check source and test files with ruff
#[derive(Args, Debug)]
pub struct LintCommand {
    /// Apply automatic fixes for fixable violations
    #[arg(long)]
    pub fix: bool,
}

impl LintCommand {
    /// Execute the lint command
    pub fn execute(self, ctx: &ProjectContext, verbose: bool) -> Result<()> {
        let uv = UvRunner::locate()?;
        let steps = vec![step(&uv, self.fix)];
        run_steps(&steps, ctx.root(), &mut ProcessExecutor, verbose)
    }
}

/// The ruff check step, shared with the `check` quality gate
pub fn step(uv: &UvRunner, fix: bool) -> Step {
    let mut args = vec!["ruff".to_string(), "check".to_string()];
    if fix {
        args.push("--fix".to_string());
    }
    args.push(".".to_string());
    uv.run_step("ruff lint", args)
}
