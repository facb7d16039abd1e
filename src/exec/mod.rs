//! External tool execution

pub mod steps;
pub mod subprocess;
pub mod uv;
