//! Error types and helpers for user-friendly error messages
//!
//! Fatal errors carry an optional hint with the concrete action that
//! resolves them; the hint is rendered under the message at top level.

use std::path::PathBuf;

use thiserror::Error;

/// Custom error types with helpful context and suggestions
#[derive(Error, Debug)]
pub enum UvdevError {
    /// Project descriptor (pyproject.toml) not found
    #[error("No pyproject.toml found in {dir}")]
    MissingDescriptor { dir: PathBuf, hint: String },

    /// Tool/executable not found or misconfigured
    #[error("Missing tool: {tool} (required for {required_for})")]
    MissingTool {
        tool: String,
        required_for: String,
        hint: String,
    },

    /// An external tool invocation returned non-zero
    #[error("Step '{step}' failed with exit code {exit_code}")]
    StepFailed { step: String, exit_code: i32 },

    /// Descriptor metadata errors
    #[error("Metadata error: {message}")]
    Metadata {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
        hint: Option<String>,
    },
}

impl UvdevError {
    /// Create a missing-descriptor error for a directory
    pub fn missing_descriptor(dir: impl Into<PathBuf>) -> Self {
        Self::MissingDescriptor {
            dir: dir.into(),
            hint: "Run uvdev from the project root, or create a project with 'uv init'".to_string(),
        }
    }

    /// Create a missing-tool error
    pub fn missing_tool(
        tool: impl Into<String>,
        required_for: impl Into<String>,
        hint: impl Into<String>,
    ) -> Self {
        Self::MissingTool {
            tool: tool.into(),
            required_for: required_for.into(),
            hint: hint.into(),
        }
    }

    /// Create a step-failure error
    pub fn step_failed(step: impl Into<String>, exit_code: i32) -> Self {
        Self::StepFailed {
            step: step.into(),
            exit_code,
        }
    }

    /// Create a metadata error with source and hint
    pub fn metadata_error(
        message: impl Into<String>,
        source: Option<anyhow::Error>,
        hint: Option<String>,
    ) -> Self {
        Self::Metadata {
            message: message.into(),
            source,
            hint,
        }
    }

    /// The hint associated with this error, if any
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::MissingDescriptor { hint, .. } => Some(hint),
            Self::MissingTool { hint, .. } => Some(hint),
            Self::StepFailed { .. } => None,
            Self::Metadata { hint, .. } => hint.as_deref(),
        }
    }
}

/// Render an error (with hint, when present) to stderr
pub fn report(err: &anyhow::Error) {
    crate::utils::terminal::print_error(&format!("{err:#}"));
    if let Some(uvdev_err) = err.downcast_ref::<UvdevError>() {
        if let Some(hint) = uvdev_err.hint() {
            eprintln!("  hint: {hint}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_descriptor_has_hint() {
        let err = UvdevError::missing_descriptor("/tmp/nowhere");
        assert!(err.hint().is_some());
        assert!(err.to_string().contains("pyproject.toml"));
    }

    #[test]
    fn test_step_failed_message_names_step_and_code() {
        let err = UvdevError::step_failed("ruff lint", 1);
        assert_eq!(err.to_string(), "Step 'ruff lint' failed with exit code 1");
        assert!(err.hint().is_none());
    }
}
