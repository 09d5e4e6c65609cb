//! Resolution of the tool to run: override variable or compiled-in default.

use crate::config::ToolSpec;
use log::debug;
use std::ffi::OsString;

/// Where the resolved tool came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolSource {
    /// `CONDA_OCAML_<ROLE>` was set and non-empty
    Override,
    /// Variable absent or empty
    Default,
}

/// Outcome of resolving a [`ToolSpec`] against an environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub tool: OsString,
    pub source: ToolSource,
    pub env_var: String,
    /// Value observed for `env_var`, kept for diagnostics even when empty.
    pub env_value: Option<OsString>,
}

/// Resolve `spec` using `lookup` to read environment variables.
///
/// An empty value is treated exactly like an absent one.
pub fn resolve<F>(spec: &ToolSpec, lookup: F) -> Resolution
where
    F: FnOnce(&str) -> Option<OsString>,
{
    let env_var = spec.env_var_name();
    let env_value = lookup(&env_var);

    let (tool, source) = match &env_value {
        Some(value) if !value.is_empty() => (value.clone(), ToolSource::Override),
        _ => (OsString::from(spec.default_tool()), ToolSource::Default),
    };

    debug!(
        "Resolved role {} to '{}' ({:?}, {} = {:?})",
        spec.role(),
        tool.to_string_lossy(),
        source,
        env_var,
        env_value
    );

    Resolution {
        tool,
        source,
        env_var,
        env_value,
    }
}

/// Resolve `spec` against the process environment.
pub fn resolve_from_env(spec: &ToolSpec) -> Resolution {
    resolve(spec, |key| std::env::var_os(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::ffi::OsStr;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, OsString> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), OsString::from(v)))
            .collect()
    }

    fn resolve_with(spec: &ToolSpec, vars: &HashMap<String, OsString>) -> Resolution {
        resolve(spec, |key| vars.get(key).cloned())
    }

    #[test]
    fn test_unset_uses_default() {
        let spec = ToolSpec::new("CC", "gcc.exe").unwrap();
        let res = resolve_with(&spec, &env(&[]));
        assert_eq!(res.tool, OsString::from("gcc.exe"));
        assert_eq!(res.source, ToolSource::Default);
        assert_eq!(res.env_var, "CONDA_OCAML_CC");
        assert!(res.env_value.is_none());
    }

    #[test]
    fn test_override_wins_over_default() {
        let spec = ToolSpec::new("AS", "as.exe").unwrap();
        let res = resolve_with(&spec, &env(&[("CONDA_OCAML_AS", "myas.exe")]));
        assert_eq!(res.tool.as_os_str(), OsStr::new("myas.exe"));
        assert_eq!(res.source, ToolSource::Override);
        assert_eq!(res.env_value, Some(OsString::from("myas.exe")));
    }

    #[test]
    fn test_empty_value_falls_back_to_default() {
        let spec = ToolSpec::new("CC", "gcc.exe").unwrap();
        let res = resolve_with(&spec, &env(&[("CONDA_OCAML_CC", "")]));
        assert_eq!(res.tool.as_os_str(), OsStr::new("gcc.exe"));
        assert_eq!(res.source, ToolSource::Default);
        // Observed value is still reported
        assert_eq!(res.env_value, Some(OsString::new()));
    }

    #[test]
    fn test_other_roles_do_not_leak() {
        let spec = ToolSpec::new("CC", "gcc").unwrap();
        let res = resolve_with(&spec, &env(&[("CONDA_OCAML_AS", "clang"), ("CC", "clang")]));
        assert_eq!(res.tool.as_os_str(), OsStr::new("gcc"));
    }

    #[test]
    fn test_override_value_kept_verbatim() {
        let spec = ToolSpec::new("LD", "ld").unwrap();
        let value = "/opt/tool chain/bin/x86_64-w64-mingw32-ld ";
        let res = resolve_with(&spec, &env(&[("CONDA_OCAML_LD", value)]));
        assert_eq!(res.tool.as_os_str(), OsStr::new(value));
    }

    #[test]
    fn test_lookup_queries_composed_key_only() {
        let spec = ToolSpec::new("MKDLL", "flexlink").unwrap();
        let mut seen = Vec::new();
        resolve(&spec, |key| {
            seen.push(key.to_string());
            None
        });
        assert_eq!(seen, vec!["CONDA_OCAML_MKDLL".to_string()]);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_override_preserved() {
        use std::os::unix::ffi::OsStringExt;

        let spec = ToolSpec::new("CC", "gcc").unwrap();
        let raw = OsString::from_vec(vec![b'c', b'c', 0xff]);
        let expected = raw.clone();
        let res = resolve(&spec, move |_| Some(raw));
        assert_eq!(res.tool, expected);
        assert_eq!(res.source, ToolSource::Override);
    }
}
