//! Ordered fail-fast step sequences
//!
//! Every workflow command is a `Vec<Step>` executed in declaration order;
//! the first failing step aborts the rest of the sequence. The executor is
//! a trait so tests can script outcomes without spawning processes.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;

use crate::error::UvdevError;
use crate::exec::subprocess;
use crate::utils::terminal;

/// A named external tool invocation
#[derive(Debug, Clone)]
pub struct Step {
    /// Human-readable name used in progress and failure messages
    pub name: String,
    /// Program to invoke
    pub program: PathBuf,
    /// Program arguments
    pub args: Vec<String>,
}

impl Step {
    pub fn new(
        name: impl Into<String>,
        program: impl Into<PathBuf>,
        args: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

/// Outcome of a single step
#[derive(Debug, Clone)]
pub struct StepOutcome {
    pub success: bool,
    pub exit_code: i32,
    pub duration: Duration,
}

impl StepOutcome {
    pub fn ok(duration: Duration) -> Self {
        Self {
            success: true,
            exit_code: 0,
            duration,
        }
    }

    pub fn failed(exit_code: i32, duration: Duration) -> Self {
        Self {
            success: false,
            exit_code,
            duration,
        }
    }
}

/// Executes steps; the production impl spawns subprocesses
pub trait StepExecutor {
    fn run(&mut self, step: &Step, cwd: &Path) -> Result<StepOutcome>;
}

/// Real executor: blocking subprocess with inherited stdio
pub struct ProcessExecutor;

impl StepExecutor for ProcessExecutor {
    fn run(&mut self, step: &Step, cwd: &Path) -> Result<StepOutcome> {
        let result = subprocess::run_command(&step.program, &step.args, cwd, true)?;
        Ok(StepOutcome {
            success: result.success,
            exit_code: result.exit_code,
            duration: result.duration,
        })
    }
}

/// Run a sequence of steps in order, stopping at the first failure
///
/// Returns `UvdevError::StepFailed` naming the failing step; steps after it
/// are never invoked.
pub fn run_steps(
    steps: &[Step],
    root: &Path,
    executor: &mut dyn StepExecutor,
    verbose: bool,
) -> Result<()> {
    let total = steps.len();
    for (idx, step) in steps.iter().enumerate() {
        terminal::print_info(&format!("[{}/{}] {}", idx + 1, total, step.name));
        if verbose {
            eprintln!(
                "Executing: {} {}",
                step.program.display(),
                step.args.join(" ")
            );
        }
        let outcome = executor.run(step, root)?;
        if !outcome.success {
            terminal::print_error(&format!(
                "{} failed (exit code {})",
                step.name, outcome.exit_code
            ));
            return Err(UvdevError::step_failed(&step.name, outcome.exit_code).into());
        }
        terminal::print_success(&format!(
            "{} ({:.1}s)",
            step.name,
            outcome.duration.as_secs_f64()
        ));
    }
    Ok(())
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::collections::HashSet;

    /// Scripted executor: records visited step names, fails the named ones
    pub struct FakeExecutor {
        pub visited: Vec<String>,
        failing: HashSet<String>,
    }

    impl FakeExecutor {
        pub fn all_pass() -> Self {
            Self {
                visited: Vec::new(),
                failing: HashSet::new(),
            }
        }

        pub fn failing_on(names: &[&str]) -> Self {
            Self {
                visited: Vec::new(),
                failing: names.iter().map(|s| s.to_string()).collect(),
            }
        }
    }

    impl StepExecutor for FakeExecutor {
        fn run(&mut self, step: &Step, _cwd: &Path) -> Result<StepOutcome> {
            self.visited.push(step.name.clone());
            if self.failing.contains(&step.name) {
                Ok(StepOutcome::failed(1, Duration::ZERO))
            } else {
                Ok(StepOutcome::ok(Duration::ZERO))
            }
        }
    }
}
