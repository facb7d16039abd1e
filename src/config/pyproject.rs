//! pyproject.toml discovery and best-effort metadata extraction
//!
//! Parsing is deliberately loose: every `[project]` field is optional and an
//! absent field is reported as a warning by the caller, never an error. The
//! only hard requirement is that the file exists at the project root.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::UvdevError;

/// Name of the project descriptor file
pub const DESCRIPTOR_NAME: &str = "pyproject.toml";

/// Explicit project-root context passed into every command
///
/// Constructed once per invocation; commands never consult the ambient
/// working directory themselves.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    root: PathBuf,
}

impl ProjectContext {
    /// Validate `dir` as a project root
    ///
    /// Fails before any tool is invoked if the descriptor is absent.
    pub fn discover(dir: impl Into<PathBuf>) -> Result<Self, UvdevError> {
        let root = dir.into();
        if !root.join(DESCRIPTOR_NAME).is_file() {
            return Err(UvdevError::missing_descriptor(root));
        }
        Ok(Self { root })
    }

    /// The project root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path to the descriptor file
    pub fn descriptor_path(&self) -> PathBuf {
        self.root.join(DESCRIPTOR_NAME)
    }

    /// Parse the descriptor metadata
    pub fn load_metadata(&self) -> Result<Pyproject> {
        Pyproject::load(&self.descriptor_path())
    }
}

/// Root structure of pyproject.toml
///
/// Only the tables uvdev reads are modelled; unknown tables are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Pyproject {
    /// PEP 621 [project] table
    pub project: Option<ProjectTable>,

    /// PEP 735 [dependency-groups] table (uv stores dev deps here)
    #[serde(default, rename = "dependency-groups")]
    pub dependency_groups: BTreeMap<String, Vec<toml::Value>>,
}

/// The PEP 621 [project] table, every field optional
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectTable {
    pub name: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "requires-python")]
    pub requires_python: Option<String>,
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl Pyproject {
    /// Load and parse a pyproject.toml file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let parsed: Pyproject = toml::from_str(&content).map_err(|e| {
            UvdevError::metadata_error(
                format!("Failed to parse {}", path.display()),
                Some(e.into()),
                Some("Check the file for TOML syntax errors".to_string()),
            )
        })?;
        Ok(parsed)
    }

    /// Project name, if declared
    pub fn name(&self) -> Option<&str> {
        self.project.as_ref()?.name.as_deref()
    }

    /// Project version, if declared
    pub fn version(&self) -> Option<&str> {
        self.project.as_ref()?.version.as_deref()
    }

    /// Required Python range, if declared
    pub fn requires_python(&self) -> Option<&str> {
        self.project.as_ref()?.requires_python.as_deref()
    }

    /// Number of runtime dependencies
    pub fn runtime_dependency_count(&self) -> usize {
        self.project
            .as_ref()
            .map(|p| p.dependencies.len())
            .unwrap_or(0)
    }

    /// Dependency-group names with their entry counts
    pub fn group_summaries(&self) -> Vec<(String, usize)> {
        self.dependency_groups
            .iter()
            .map(|(name, entries)| (name.clone(), entries.len()))
            .collect()
    }
}
