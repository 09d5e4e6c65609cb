//! Spawn-and-wait of the resolved tool with verbatim argument passthrough.

use crate::error::{Result, WrapperError};
use crate::resolve::Resolution;
use log::{debug, info};
use std::ffi::OsString;
use std::process::{Command, ExitStatus};

/// Runs the resolved tool in place of the wrapper.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    resolution: Resolution,
}

impl Dispatcher {
    pub fn new(resolution: Resolution) -> Self {
        Self { resolution }
    }

    /// Build the child command from the wrapper's full argv.
    ///
    /// argv[0] is dropped and replaced by the resolved tool; the rest is
    /// forwarded untouched. stdio is inherited.
    pub fn command<I>(&self, argv: I) -> Command
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut cmd = Command::new(&self.resolution.tool);
        cmd.args(argv.into_iter().skip(1));
        cmd
    }

    /// Spawn the tool, block until it exits and return its exit code.
    pub fn run<I>(&self, argv: I) -> Result<i32>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut cmd = self.command(argv);
        debug!("Spawning {:?}", cmd);

        let status = cmd.status().map_err(|source| WrapperError::Spawn {
            tool: self.resolution.tool.clone(),
            env_var: self.resolution.env_var.clone(),
            env_value: self.resolution.env_value.clone(),
            source,
        })?;

        let code = exit_code(status);
        info!(
            "'{}' exited with {} (exit code {})",
            self.resolution.tool.to_string_lossy(),
            status,
            code
        );
        Ok(code)
    }
}

/// Map a child's exit status to the code the wrapper exits with.
///
/// A Unix child killed by a signal has no code and maps to `128 + signal`.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
