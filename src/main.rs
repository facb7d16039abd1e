//! uvdev CLI - development workflow runner for uv-managed Python projects
//!
//! Wraps the external tools a uv project is developed with (uv, pytest,
//! ruff) behind a fixed set of workflow commands, each a fail-fast ordered
//! sequence of tool invocations.
//!
//! ## Architecture
//!
//! ```text
//! Rust CLI → commands/ modules → uv / pytest / ruff (subprocess)
//! ```

mod cli;
mod commands;
mod config;
mod error;
mod exec;
mod utils;

use clap::Parser;

use cli::Cli;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = cli.execute() {
        error::report(&err);
        std::process::exit(1);
    }
}
