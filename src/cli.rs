//! CLI argument parsing using clap derive macros

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};

use crate::commands::{
    build::BuildCommand, check::CheckCommand, clean::CleanCommand, deps::DepsCommand,
    format::FormatCommand, info::InfoCommand, lint::LintCommand, run::RunCommand,
    setup::SetupCommand, test::TestCommand, test::TestCovCommand,
};
use crate::config::ProjectContext;

/// uvdev - development workflow runner for uv-managed Python projects
///
/// Every command runs from the project root (the directory holding
/// pyproject.toml) and drives uv, pytest and ruff in a fixed order.
#[derive(Parser, Debug)]
#[command(name = "uvdev")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sync dependencies and verify the toolchain
    Setup(SetupCommand),

    /// Run the pytest suite
    Test(TestCommand),

    /// Run the pytest suite with a coverage report
    TestCov(TestCovCommand),

    /// Reformat source and test files with ruff
    Format(FormatCommand),

    /// Style-check source and test files with ruff
    Lint(LintCommand),

    /// Full quality gate: format, lint, coverage-gated tests
    Check(CheckCommand),

    /// Remove caches and build artifacts
    Clean(CleanCommand),

    /// Show project metadata and environment summary
    Info(InfoCommand),

    /// Manage dependencies: tree, upgrade, lock export
    Deps(DepsCommand),

    /// Run coverage-gated tests, then build distributable artifacts
    Build(BuildCommand),

    /// Run the project entry point through uv
    Run(RunCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        // Set up terminal colors
        if self.no_color {
            console::set_colors_enabled(false);
            console::set_colors_enabled_stderr(false);
        }

        // No subcommand: usage text, exit 0
        let Some(command) = self.command else {
            Cli::command().print_help()?;
            return Ok(());
        };

        // Every operation requires a valid project root; fail here, before
        // any tool is invoked.
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        let ctx = ProjectContext::discover(cwd)?;

        // Execute the subcommand
        match command {
            Commands::Setup(cmd) => cmd.execute(&ctx, self.verbose),
            Commands::Test(cmd) => cmd.execute(&ctx, self.verbose),
            Commands::TestCov(cmd) => cmd.execute(&ctx, self.verbose),
            Commands::Format(cmd) => cmd.execute(&ctx, self.verbose),
            Commands::Lint(cmd) => cmd.execute(&ctx, self.verbose),
            Commands::Check(cmd) => cmd.execute(&ctx, self.verbose),
            Commands::Clean(cmd) => cmd.execute(&ctx, self.verbose),
            Commands::Info(cmd) => cmd.execute(&ctx, self.verbose),
            Commands::Deps(cmd) => cmd.execute(&ctx, self.verbose),
            Commands::Build(cmd) => cmd.execute(&ctx, self.verbose),
            Commands::Run(cmd) => cmd.execute(&ctx, self.verbose),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_every_command_name() {
        for name in [
            "setup", "test", "test-cov", "format", "lint", "check", "clean", "info", "deps",
            "build",
        ] {
            let cli = Cli::try_parse_from(["uvdev", name]);
            assert!(cli.is_ok(), "command '{name}' failed to parse");
        }
    }

    #[test]
    fn test_unrecognized_command_is_rejected() {
        assert!(Cli::try_parse_from(["uvdev", "foobar"]).is_err());
    }

    #[test]
    fn test_no_arguments_parses_to_no_command() {
        let cli = Cli::try_parse_from(["uvdev"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_run_forwards_trailing_arguments() {
        let cli = Cli::try_parse_from(["uvdev", "run", "--", "Alice"]).unwrap();
        match cli.command {
            Some(Commands::Run(cmd)) => assert_eq!(cmd.args, vec!["Alice"]),
            other => panic!("unexpected parse: {other:?}"),
        }
    }
}
