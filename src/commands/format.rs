//! Format command implementation

use anyhow::Result;
use clap::Args;

use crate::config::ProjectContext;
use crate::exec::steps::{run_steps, ProcessExecutor, Step};
use crate::exec::uv::UvRunner;

/// Reformat source and test files with ruff
#[derive(Args, Debug)]
pub struct FormatCommand {
    /// Check formatting without writing changes
    #[arg(long)]
    pub check: bool,
}

impl FormatCommand {
    /// Execute the format command
    pub fn execute(self, ctx: &ProjectContext, verbose: bool) -> Result<()> {
        let uv = UvRunner::locate()?;
        let steps = vec![step(&uv, self.check)];
        run_steps(&steps, ctx.root(), &mut ProcessExecutor, verbose)
    }
}

/// The ruff format step, shared with the `check` quality gate
pub fn step(uv: &UvRunner, check_only: bool) -> Step {
    let mut args = vec!["ruff".to_string(), "format".to_string()];
    if check_only {
        args.push("--check".to_string());
    }
    args.push(".".to_string());
    uv.run_step("ruff format", args)
}
