//! Tool spec: which toolchain role this wrapper stands in for.
//!
//! The role and default tool are fixed at compile time by `build.rs`
//! (`CONDA_OCAML_WRAPPER_ROLE`, `CONDA_OCAML_WRAPPER_DEFAULT_TOOL`).

use crate::error::{Result, WrapperError};

/// Prefix of the runtime override variable; the role is appended.
pub const ENV_PREFIX: &str = "CONDA_OCAML_";

/// Role compiled into this build.
pub const COMPILED_ROLE: &str = env!("CONDA_OCAML_WRAPPER_ROLE");

/// Default tool compiled into this build.
pub const COMPILED_DEFAULT_TOOL: &str = env!("CONDA_OCAML_WRAPPER_DEFAULT_TOOL");

/// A toolchain role paired with its fallback executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSpec {
    role: String,
    default_tool: String,
}

impl ToolSpec {
    /// Create a spec, rejecting an empty or malformed role and an empty default.
    pub fn new(role: impl Into<String>, default_tool: impl Into<String>) -> Result<Self> {
        let role = role.into();
        let default_tool = default_tool.into();

        if role.is_empty() {
            return Err(WrapperError::InvalidSpec("role must not be empty".to_string()));
        }
        if !role.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(WrapperError::InvalidSpec(format!(
                "role '{}' may only contain ASCII letters, digits and '_'",
                role
            )));
        }
        if default_tool.is_empty() {
            return Err(WrapperError::InvalidSpec(format!(
                "default tool for role '{}' must not be empty",
                role
            )));
        }

        Ok(Self { role, default_tool })
    }

    /// The spec baked in at build time.
    pub fn compiled() -> Result<Self> {
        Self::new(COMPILED_ROLE, COMPILED_DEFAULT_TOOL)
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn default_tool(&self) -> &str {
        &self.default_tool
    }

    /// Name of the override variable, e.g. `CONDA_OCAML_CC`.
    pub fn env_var_name(&self) -> String {
        format!("{}{}", ENV_PREFIX, self.role)
    }
}
