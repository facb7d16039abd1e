//! Deps command implementation
//!
//! Dependency management actions, either picked from an interactive menu or
//! selected directly with `--action` for scripted use.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use crate::config::ProjectContext;
use crate::exec::steps::{run_steps, ProcessExecutor, Step};
use crate::exec::uv::UvRunner;
use crate::utils::terminal;

/// Dependency management action
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DepsAction {
    /// Show the resolved dependency tree
    Tree,
    /// Upgrade all dependencies and re-sync
    Upgrade,
    /// Export the lockfile as requirements.txt
    Export,
}

/// Manage dependencies: tree, upgrade, lock export
#[derive(Args, Debug)]
pub struct DepsCommand {
    /// Run one action without the interactive menu
    #[arg(long, value_enum)]
    pub action: Option<DepsAction>,
}

impl DepsCommand {
    /// Execute the deps command
    pub fn execute(self, ctx: &ProjectContext, verbose: bool) -> Result<()> {
        let uv = UvRunner::locate()?;

        match self.action {
            Some(action) => run_action(action, &uv, ctx, verbose),
            None => menu_loop(&uv, ctx, verbose),
        }
    }
}

/// Prompt until the user picks an action or quits
fn menu_loop(uv: &UvRunner, ctx: &ProjectContext, verbose: bool) -> Result<()> {
    loop {
        println!("\nDependency management:");
        println!("  1) show dependency tree");
        println!("  2) upgrade all dependencies");
        println!("  3) export lockfile to requirements.txt");
        println!("  q) quit");
        print!("> ");
        io::stdout().flush().context("Failed to flush stdout")?;

        let mut input = String::new();
        io::stdin()
            .read_line(&mut input)
            .context("Failed to read menu selection")?;
        let choice = input.trim().to_lowercase();

        let action = match choice.as_str() {
            "1" | "tree" => DepsAction::Tree,
            "2" | "upgrade" => DepsAction::Upgrade,
            "3" | "export" => DepsAction::Export,
            "q" | "quit" | "" => return Ok(()),
            other => {
                terminal::print_warning(&format!("unrecognized choice '{other}'"));
                continue;
            }
        };
        run_action(action, uv, ctx, verbose)?;
    }
}

fn run_action(
    action: DepsAction,
    uv: &UvRunner,
    ctx: &ProjectContext,
    verbose: bool,
) -> Result<()> {
    let steps = action_steps(action, uv);
    run_steps(&steps, ctx.root(), &mut ProcessExecutor, verbose)?;
    if matches!(action, DepsAction::Export) {
        terminal::print_success("Lockfile exported to requirements.txt");
    }
    Ok(())
}

/// The tool sequence behind each action
pub fn action_steps(action: DepsAction, uv: &UvRunner) -> Vec<Step> {
    match action {
        DepsAction::Tree => vec![uv.step("uv tree", ["tree"])],
        DepsAction::Upgrade => vec![
            uv.step("uv lock --upgrade", ["lock", "--upgrade"]),
            uv.step("uv sync", ["sync"]),
        ],
        DepsAction::Export => vec![uv.step(
            "uv export",
            [
                "export",
                "--format",
                "requirements-txt",
                "--output-file",
                "requirements.txt",
            ],
        )],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::steps::testing::FakeExecutor;
    use std::path::Path;

    #[test]
    fn test_upgrade_locks_before_syncing() {
        let uv = UvRunner::for_tests("uv");
        let steps = action_steps(DepsAction::Upgrade, &uv);
        let names: Vec<&str> = steps.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["uv lock --upgrade", "uv sync"]);
    }

    #[test]
    fn test_failed_lock_upgrade_skips_sync() {
        let uv = UvRunner::for_tests("uv");
        let steps = action_steps(DepsAction::Upgrade, &uv);

        let mut exec = FakeExecutor::failing_on(&["uv lock --upgrade"]);
        assert!(run_steps(&steps, Path::new("."), &mut exec, false).is_err());
        assert_eq!(exec.visited, vec!["uv lock --upgrade"]);
    }

    #[test]
    fn test_export_writes_requirements_txt() {
        let uv = UvRunner::for_tests("uv");
        let steps = action_steps(DepsAction::Export, &uv);
        assert_eq!(steps.len(), 1);
        assert!(steps[0].args.contains(&"requirements.txt".to_string()));
    }
}
