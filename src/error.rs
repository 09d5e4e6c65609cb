//! Error types for the wrapper
//!
//! Centralized error handling using thiserror.

use std::ffi::OsString;
use std::io;
use thiserror::Error;

/// Program name used as the prefix of every diagnostic line.
pub const PROGRAM_NAME: &str = "conda-ocaml-wrapper";

/// Exit code used when the resolved tool cannot be launched ("command not found").
pub const SPAWN_FAILURE_EXIT_CODE: i32 = 127;

/// All error types that can occur in the wrapper
#[derive(Debug, Error)]
pub enum WrapperError {
    /// The resolved tool could not be launched
    #[error("failed to execute '{}': {source}", .tool.to_string_lossy())]
    Spawn {
        tool: OsString,
        env_var: String,
        env_value: Option<OsString>,
        #[source]
        source: io::Error,
    },

    /// Role or default tool rejected when building a ToolSpec
    #[error("Invalid tool spec: {0}")]
    InvalidSpec(String),
}

impl WrapperError {
    /// Exit code the wrapper terminates with for this error.
    pub fn exit_code(&self) -> i32 {
        SPAWN_FAILURE_EXIT_CODE
    }

    /// Render the stderr diagnostic, one line per fact, newline-terminated.
    pub fn diagnostic(&self) -> String {
        match self {
            WrapperError::Spawn { env_var, env_value, .. } => {
                let value = match env_value {
                    Some(v) => format!("'{}'", v.to_string_lossy()),
                    None => "'(not set)'".to_string(),
                };
                format!("{PROGRAM_NAME}: {self}\n  Environment variable {env_var} = {value}\n")
            }
            WrapperError::InvalidSpec(_) => format!("{PROGRAM_NAME}: {self}\n"),
        }
    }
}

/// Result type alias for wrapper operations
pub type Result<T> = std::result::Result<T, WrapperError>;
