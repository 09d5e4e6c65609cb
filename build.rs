use std::env;

const ROLE_ENV: &str = "CONDA_OCAML_WRAPPER_ROLE";
const DEFAULT_TOOL_ENV: &str = "CONDA_OCAML_WRAPPER_DEFAULT_TOOL";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed={ROLE_ENV}");
    println!("cargo:rerun-if-env-changed={DEFAULT_TOOL_ENV}");

    let role = env::var(ROLE_ENV).unwrap_or_else(|_| "CC".to_string());
    if role.is_empty() || !role.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        panic!("{ROLE_ENV} must be a non-empty token of ASCII letters, digits or '_', got {role:?}");
    }

    let default_tool = env::var(DEFAULT_TOOL_ENV).unwrap_or_else(|_| {
        match env::var("CARGO_CFG_TARGET_OS").as_deref() {
            Ok("windows") => "gcc.exe".to_string(),
            _ => "gcc".to_string(),
        }
    });
    if default_tool.is_empty() {
        panic!("{DEFAULT_TOOL_ENV} must not be empty");
    }

    println!("cargo:rustc-env={ROLE_ENV}={role}");
    println!("cargo:rustc-env={DEFAULT_TOOL_ENV}={default_tool}");
}
