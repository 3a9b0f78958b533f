//! Environment variable access.
//!
//! Resolution code reads through [`EnvSource`] so it can run against the real
//! process environment or an in-memory map in tests.

use std::collections::HashMap;

/// Source of environment variables.
pub trait EnvSource: Send + Sync {
    /// Get a variable value. Returns `None` if the variable is not set.
    fn get_var(&self, key: &str) -> Option<String>;
}

/// Process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl EnvSource for SystemEnv {
    fn get_var(&self, key: &str) -> Option<String> {
        // Non-unicode values are treated as unset
        std::env::var(key).ok()
    }
}

/// In-memory environment.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl EnvSource for MapEnv {
    fn get_var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_env_lookup() {
        let env = MapEnv::new().with("SERVICE", "chattingo");
        assert_eq!(env.get_var("SERVICE").as_deref(), Some("chattingo"));
        assert_eq!(env.get_var("MISSING"), None);
    }

    #[test]
    fn test_empty_value_is_set() {
        // Set-but-empty is still "set" at this layer
        let env = MapEnv::new().with("PRESENT", "");
        assert_eq!(env.get_var("PRESENT").as_deref(), Some(""));
    }

    #[test]
    fn test_system_env_missing_var() {
        assert_eq!(
            SystemEnv.get_var("CHATTINGO_TEST_VARIABLE_THAT_IS_NEVER_SET"),
            None
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_system_env_non_unicode_is_unset() {
        use crate::endpoint::{resolve_base_api_url, API_URL_ENV, DEFAULT_BASE_API_URL};
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        const KEY: &str = "CHATTINGO_TEST_NON_UNICODE_API_URL";

        /// Reads the resolver's variable from a test-only process variable.
        struct Redirected;

        impl EnvSource for Redirected {
            fn get_var(&self, key: &str) -> Option<String> {
                assert_eq!(key, API_URL_ENV);
                SystemEnv.get_var(KEY)
            }
        }

        std::env::set_var(KEY, OsStr::from_bytes(&[0xff, 0xfe]));
        assert!(std::env::var_os(KEY).is_some());
        assert_eq!(SystemEnv.get_var(KEY), None);
        assert_eq!(resolve_base_api_url(&Redirected), DEFAULT_BASE_API_URL);
        std::env::remove_var(KEY);
    }
}
