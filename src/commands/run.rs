//! Run command implementation
//!
//! Executes the project entry point inside the uv-managed environment.

use anyhow::{bail, Result};
use clap::Args;

use crate::config::ProjectContext;
use crate::exec::steps::{run_steps, ProcessExecutor};
use crate::exec::uv::UvRunner;

/// Entry-point script at the project root
const ENTRY_POINT: &str = "main.py";

/// Run the project entry point through uv
#[derive(Args, Debug)]
pub struct RunCommand {
    /// Arguments to pass to the application
    #[arg(last = true)]
    pub args: Vec<String>,
}

impl RunCommand {
    /// Execute the run command
    pub fn execute(self, ctx: &ProjectContext, verbose: bool) -> Result<()> {
        let entry = ctx.root().join(ENTRY_POINT);
        if !entry.is_file() {
            bail!(
                "No {} found in {}; nothing to run",
                ENTRY_POINT,
                ctx.root().display()
            );
        }

        let uv = UvRunner::locate()?;
        let mut tool_args = vec!["python".to_string(), ENTRY_POINT.to_string()];
        tool_args.extend(self.args);
        let step = uv.run_step(format!("python {ENTRY_POINT}"), tool_args);
        run_steps(&[step], ctx.root(), &mut ProcessExecutor, verbose)
    }
}
