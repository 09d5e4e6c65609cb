//! conda-ocaml-wrapper - toolchain role dispatcher
//!
//! Each build of the wrapper stands in for one toolchain role (CC, AS, AR, ...).
//! At run time it executes the tool named by `CONDA_OCAML_<ROLE>`, or the
//! compiled-in default when that variable is absent or empty, forwarding
//! argv verbatim and exiting with the child's exit code.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod resolve;

pub use config::ToolSpec;
pub use dispatch::Dispatcher;
pub use error::{Result, WrapperError};
pub use resolve::{Resolution, ToolSource, resolve, resolve_from_env};
