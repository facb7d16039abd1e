//! Info command implementation
//!
//! Best-effort project summary: descriptor fields that are absent or
//! unparseable become warnings, never failures.

use anyhow::Result;
use clap::Args;

use crate::config::{ProjectContext, Pyproject};
use crate::exec::uv::UvRunner;
use crate::utils::terminal;

/// Show project metadata and environment summary
#[derive(Args, Debug)]
pub struct InfoCommand {}

impl InfoCommand {
    /// Execute the info command
    pub fn execute(self, ctx: &ProjectContext, _verbose: bool) -> Result<()> {
        let meta = match ctx.load_metadata() {
            Ok(meta) => meta,
            Err(e) => {
                terminal::print_warning(&format!("could not read project metadata: {e:#}"));
                Pyproject::default()
            }
        };

        terminal::print_section("Project");
        print_field("name", meta.name());
        print_field("version", meta.version());
        print_field("requires-python", meta.requires_python());
        terminal::print_info(&format!("path: {}", ctx.root().display()));

        terminal::print_section("Environment");
        match UvRunner::locate() {
            Ok(uv) => {
                match uv.version(ctx.root()) {
                    Some(version) => terminal::print_info(&format!("uv: {version}")),
                    None => terminal::print_warning("uv version unknown"),
                }
                match uv.python_version(ctx.root()) {
                    Some(version) => terminal::print_info(&format!("python: {version}")),
                    None => terminal::print_warning("no interpreter available via 'uv run python'"),
                }
            }
            Err(e) => terminal::print_warning(&e.to_string()),
        }

        terminal::print_section("Dependencies");
        terminal::print_info(&format!(
            "runtime dependencies: {}",
            meta.runtime_dependency_count()
        ));
        let groups = meta.group_summaries();
        if groups.is_empty() {
            terminal::print_info("dependency groups: none");
        } else {
            for (group, count) in groups {
                terminal::print_info(&format!("group '{group}': {count} entries"));
            }
        }

        Ok(())
    }
}

fn print_field(field: &str, value: Option<&str>) {
    match value {
        Some(value) => terminal::print_info(&format!("{field}: {value}")),
        None => terminal::print_warning(&format!("{field} not declared in pyproject.toml")),
    }
}
