use conda_ocaml_wrapper::error::{PROGRAM_NAME, SPAWN_FAILURE_EXIT_CODE};
use conda_ocaml_wrapper::{Dispatcher, ToolSpec, WrapperError, resolve_from_env};
use eyre::{Context, Result};
use log::debug;
use std::env;
use std::process;

/// Filter for the wrapper's own logging; unset means silent.
const LOG_ENV: &str = "CONDA_OCAML_WRAPPER_LOG";
const LOG_STYLE_ENV: &str = "CONDA_OCAML_WRAPPER_LOG_STYLE";

fn setup_logging() -> Result<()> {
    // stderr only; a build wrapper must not create files
    let env = env_logger::Env::new()
        .filter_or(LOG_ENV, "off")
        .write_style(LOG_STYLE_ENV);

    env_logger::Builder::from_env(env)
        .target(env_logger::Target::Stderr)
        .try_init()
        .context("Failed to initialize logger")?;
    Ok(())
}

fn run_application() -> Result<i32> {
    let spec = ToolSpec::compiled().context("Invalid compiled-in tool spec")?;
    debug!("Role {} with default tool '{}'", spec.role(), spec.default_tool());

    let dispatcher = Dispatcher::new(resolve_from_env(&spec));
    let code = dispatcher.run(env::args_os())?;
    Ok(code)
}

fn report(err: &eyre::Report) {
    match err.downcast_ref::<WrapperError>() {
        Some(spawn_err @ WrapperError::Spawn { .. }) => eprint!("{}", spawn_err.diagnostic()),
        _ => eprintln!("{}: {:#}", PROGRAM_NAME, err),
    }
}

fn main() {
    if let Err(e) = setup_logging() {
        eprintln!("{}: {:#}", PROGRAM_NAME, e);
    }

    let code = match run_application() {
        Ok(code) => code,
        Err(e) => {
            report(&e);
            SPAWN_FAILURE_EXIT_CODE
        }
    };

    process::exit(code);
}
