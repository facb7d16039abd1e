//! Setup command implementation
//!
//! Syncs the dev environment and verifies the toolchain is usable. The sync
//! runs with captured output behind a spinner; its output is only shown on
//! failure.

use anyhow::Result;
use clap::Args;

use crate::config::ProjectContext;
use crate::error::UvdevError;
use crate::exec::uv::UvRunner;
use crate::utils::terminal;

/// Sync dependencies and verify the toolchain
#[derive(Args, Debug)]
pub struct SetupCommand {
    /// Sync only the locked versions, never update the lockfile
    #[arg(long)]
    pub frozen: bool,
}

impl SetupCommand {
    /// Execute the setup command
    pub fn execute(self, ctx: &ProjectContext, verbose: bool) -> Result<()> {
        let uv = UvRunner::locate()?;

        let mut sync_args = vec!["sync".to_string()];
        if self.frozen {
            sync_args.push("--frozen".to_string());
        }

        if verbose {
            eprintln!("Executing: {} {}", uv.path().display(), sync_args.join(" "));
        }

        let spinner = terminal::create_spinner("Syncing dependencies (uv sync)...");
        let result = uv.run_captured(&sync_args, ctx.root())?;
        spinner.finish_and_clear();

        if !result.success {
            if !result.stderr.is_empty() {
                eprint!("{}", result.stderr);
            }
            return Err(UvdevError::step_failed("uv sync", result.exit_code).into());
        }
        terminal::print_success(&format!(
            "Dependencies synced ({:.1}s)",
            result.duration.as_secs_f64()
        ));

        self.verify_toolchain(&uv, ctx);
        Ok(())
    }

    /// Report toolchain versions; missing dev tools are warnings, not errors
    fn verify_toolchain(&self, uv: &UvRunner, ctx: &ProjectContext) {
        terminal::print_section("Toolchain");

        match uv.version(ctx.root()) {
            Some(version) => terminal::print_info(&format!("uv {version}")),
            None => terminal::print_warning("uv did not report a version"),
        }

        match uv.python_version(ctx.root()) {
            Some(version) => terminal::print_info(&format!("Python {version}")),
            None => terminal::print_warning(
                "No Python interpreter available via 'uv run python'",
            ),
        }

        for tool in ["pytest", "ruff"] {
            match uv.tool_version(tool, ctx.root()) {
                Some(version) => terminal::print_info(&format!("{tool} {version}")),
                None => terminal::print_warning(&format!(
                    "{tool} not available; add it to the dev dependency group"
                )),
            }
        }
    }
}
