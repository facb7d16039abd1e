//! Project descriptor handling
//!
//! The descriptor is `pyproject.toml`; its presence marks a valid project
//! root and its `[project]` table feeds the info/deps summaries.

pub mod pyproject;

pub use pyproject::{ProjectContext, Pyproject};
