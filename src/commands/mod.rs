//! Command implementations
//!
//! Each command module provides a clap-derived struct and execute method.

pub mod build;
pub mod check;
pub mod clean;
pub mod deps;
pub mod format;
pub mod info;
pub mod lint;
pub mod run;
pub mod setup;
pub mod test;
