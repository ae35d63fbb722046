//! Where variable values come from.
//!
//! The binder never reads `std::env` directly; it asks an [`EnvSource`]. The
//! process environment is one implementation, maps and closures are others, so
//! tests can pass synthetic data instead of mutating global state.

use std::collections::{BTreeMap, HashMap};

/// A key → value lookup for environment variables.
///
/// Returning `None` and returning `Some("")` are treated the same by the binder.
pub trait EnvSource {
    fn get(&self, key: &str) -> Option<String>;
}

/// The real process environment. Keys match exactly (case-sensitive on Unix).
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        // Empty keys and keys containing '=' or NUL make the OS lookup panic.
        if key.is_empty() || key.contains(['=', '\0']) {
            return None;
        }
        std::env::var_os(key).map(|v| v.to_string_lossy().into_owned())
    }
}

impl EnvSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).cloned()
    }
}

impl<F> EnvSource for F
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, key: &str) -> Option<String> {
        self(key)
    }
}

/// Build an in-memory source from `(key, value)` pairs. Later pairs win.
pub fn vars_from<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> BTreeMap<String, String>
where
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// Fetch `key`, collapsing "unset" into the empty string.
pub(crate) fn lookup(source: &dyn EnvSource, key: &str) -> String {
    source.get(key).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vars_from_collects_pairs() {
        let vars = vars_from([("A", "1"), ("B", "2")]);
        assert_eq!(EnvSource::get(&vars, "A").as_deref(), Some("1"));
        assert_eq!(EnvSource::get(&vars, "B").as_deref(), Some("2"));
    }

    #[test]
    fn vars_from_last_wins() {
        let vars = vars_from([("A", "1"), ("A", "2")]);
        assert_eq!(EnvSource::get(&vars, "A").as_deref(), Some("2"));
    }

    #[test]
    fn lookup_missing_is_empty() {
        let vars = vars_from([("A", "1")]);
        assert_eq!(lookup(&vars, "MISSING"), "");
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let vars = vars_from([("HOST", "x")]);
        assert_eq!(lookup(&vars, "host"), "");
        assert_eq!(lookup(&vars, "HOST"), "x");
    }

    #[test]
    fn hash_map_source() {
        let mut vars = HashMap::new();
        vars.insert("PORT".to_string(), "80".to_string());
        assert_eq!(lookup(&vars, "PORT"), "80");
    }

    #[test]
    fn closure_source() {
        let source = |key: &str| (key == "NAME").then(|| "closure".to_string());
        assert_eq!(lookup(&source, "NAME"), "closure");
        assert_eq!(lookup(&source, "OTHER"), "");
    }

    #[test]
    fn process_env_rejects_invalid_keys() {
        assert_eq!(ProcessEnv.get(""), None);
        assert_eq!(ProcessEnv.get("A=B"), None);
    }
}
