//! Build command implementation
//!
//! Coverage-gated tests first; `uv build` only runs once the gate passes.

use anyhow::Result;
use clap::Args;

use crate::commands::test;
use crate::config::ProjectContext;
use crate::exec::steps::{run_steps, ProcessExecutor, Step};
use crate::exec::uv::UvRunner;
use crate::utils::terminal;

/// Run coverage-gated tests, then build distributable artifacts
#[derive(Args, Debug)]
pub struct BuildCommand {
    /// Coverage percentage the gate must reach before packaging
    #[arg(long, default_value_t = test::DEFAULT_COVERAGE_THRESHOLD)]
    pub fail_under: u8,
}

impl BuildCommand {
    /// Execute the build command
    pub fn execute(self, ctx: &ProjectContext, verbose: bool) -> Result<()> {
        let uv = UvRunner::locate()?;
        let steps = build_steps(&uv, self.fail_under);
        run_steps(&steps, ctx.root(), &mut ProcessExecutor, verbose)?;
        terminal::print_success("Artifacts written to dist/");
        Ok(())
    }
}

/// The gated build sequence
pub fn build_steps(uv: &UvRunner, fail_under: u8) -> Vec<Step> {
    vec![
        test::coverage_gate_step(uv, fail_under),
        uv.step("uv build", ["build"]),
    ]
}
