//! Environment variable loading utilities
//!
//! Common patterns for loading environment variables with type conversion
//! and fallback defaults.

use std::env;
use std::str::FromStr;

/// Load an environment variable with a string default
pub fn load_env_string(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Load an environment variable with type conversion and default
pub fn load_env_parsed<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Load an environment variable as an `Option<String>`, treating an empty
/// value the same as an unset one
pub fn load_env_optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

/// Builder for loading multiple environment variables with a consistent prefix
#[derive(Debug)]
pub struct EnvLoader {
    prefix: String,
}

impl EnvLoader {
    /// Create a new environment loader with the given prefix
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
        }
    }

    /// Load a string value with default
    pub fn load_string(&self, suffix: &str, default: &str) -> String {
        let key = format!("{}_{}", self.prefix, suffix);
        load_env_string(&key, default)
    }

    /// Load a parsed value with default
    pub fn load_parsed<T>(&self, suffix: &str, default: T) -> T
    where
        T: FromStr,
    {
        let key = format!("{}_{}", self.prefix, suffix);
        load_env_parsed(&key, default)
    }

    /// Load an optional string value
    pub fn load_optional(&self, suffix: &str) -> Option<String> {
        let key = format!("{}_{}", self.prefix, suffix);
        load_env_optional(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_load_env_string_default() {
        std::env::remove_var("GH_PROJECTS_TEST_MISSING");
        assert_eq!(
            load_env_string("GH_PROJECTS_TEST_MISSING", "fallback"),
            "fallback"
        );
    }

    #[test]
    #[serial]
    fn test_load_env_parsed() {
        std::env::set_var("GH_PROJECTS_TEST_NUMBER", "42");
        let value: u64 = load_env_parsed("GH_PROJECTS_TEST_NUMBER", 7);
        assert_eq!(value, 42);
        std::env::remove_var("GH_PROJECTS_TEST_NUMBER");
    }

    #[test]
    #[serial]
    fn test_load_env_parsed_invalid_falls_back() {
        std::env::set_var("GH_PROJECTS_TEST_BAD", "not-a-number");
        let value: u64 = load_env_parsed("GH_PROJECTS_TEST_BAD", 7);
        assert_eq!(value, 7);
        std::env::remove_var("GH_PROJECTS_TEST_BAD");
    }

    #[test]
    #[serial]
    fn test_env_loader_prefix() {
        std::env::set_var("GH_PROJECTS_TEST_VALUE", "hello");
        let loader = EnvLoader::new("GH_PROJECTS_TEST");
        assert_eq!(loader.load_string("VALUE", "default"), "hello");
        assert_eq!(loader.load_string("OTHER", "default"), "default");
        std::env::remove_var("GH_PROJECTS_TEST_VALUE");
    }

    #[test]
    #[serial]
    fn test_load_env_optional_empty_is_none() {
        std::env::set_var("GH_PROJECTS_TEST_EMPTY", "");
        assert_eq!(load_env_optional("GH_PROJECTS_TEST_EMPTY"), None);
        std::env::remove_var("GH_PROJECTS_TEST_EMPTY");
    }
}
