//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Site address and output paths are not here; they come from
//! `[package.metadata.leptos]` and the `LEPTOS_*` variables.

use std::time::Duration;

pub const COMPRESSION_VAR: &str = "NYAYA_COMPRESSION";
pub const PRECOMPRESSED_VAR: &str = "NYAYA_PRECOMPRESSED";
pub const ASSET_MAX_AGE_VAR: &str = "NYAYA_ASSET_MAX_AGE";

/// Invalid configuration values
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a boolean (true/false/1/0/yes/no/on/off), got `{value}`")]
    InvalidBool { var: &'static str, value: String },

    #[error("{var} must be a whole number of seconds, got `{value}`")]
    InvalidSeconds { var: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Compress responses (Brotli, gzip) on the fly
    pub compression: bool,

    /// Serve `.br` / `.gz` siblings of `/pkg` assets when the client accepts them
    pub precompressed: bool,

    /// `Cache-Control: max-age` for `/pkg` assets. No header when unset.
    pub asset_max_age: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            compression: true,
            precompressed: true,
            asset_max_age: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup. Unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let compression = match lookup(COMPRESSION_VAR) {
            Some(value) => parse_bool(COMPRESSION_VAR, &value)?,
            None => defaults.compression,
        };
        let precompressed = match lookup(PRECOMPRESSED_VAR) {
            Some(value) => parse_bool(PRECOMPRESSED_VAR, &value)?,
            None => defaults.precompressed,
        };
        let asset_max_age = lookup(ASSET_MAX_AGE_VAR)
            .map(|value| parse_seconds(ASSET_MAX_AGE_VAR, &value))
            .transpose()?;

        Ok(Self {
            compression,
            precompressed,
            asset_max_age,
        })
    }

    /// Value for the `Cache-Control` header on static assets, if any
    pub fn cache_control(&self) -> Option<String> {
        self.asset_max_age
            .map(|age| format!("public, max-age={}", age.as_secs()))
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: value.to_string(),
        }),
    }
}

fn parse_seconds(var: &'static str, value: &str) -> Result<Duration, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| ConfigError::InvalidSeconds {
            var,
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    // ========================================================================
    // Lookup-based tests (no env var mutation - thread safe)
    // ========================================================================

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = Config::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config, Config::default());
        assert!(config.compression);
        assert!(config.precompressed);
        assert!(config.asset_max_age.is_none());
        assert!(config.cache_control().is_none());
    }

    #[test]
    fn test_bool_spellings() {
        for (raw, expected) in [
            ("true", true),
            ("TRUE", true),
            ("1", true),
            ("yes", true),
            (" on ", true),
            ("false", false),
            ("0", false),
            ("No", false),
            ("off", false),
        ] {
            let config = Config::from_lookup(lookup(&[(COMPRESSION_VAR, raw)])).unwrap();
            assert_eq!(config.compression, expected, "value {raw:?}");
        }
    }

    #[test]
    fn test_disable_both_compression_paths() {
        let config = Config::from_lookup(lookup(&[
            (COMPRESSION_VAR, "false"),
            (PRECOMPRESSED_VAR, "0"),
        ]))
        .unwrap();

        assert!(!config.compression);
        assert!(!config.precompressed);
    }

    #[test]
    fn test_invalid_bool_is_an_error() {
        let err = Config::from_lookup(lookup(&[(PRECOMPRESSED_VAR, "maybe")])).unwrap_err();

        assert_eq!(
            err,
            ConfigError::InvalidBool {
                var: PRECOMPRESSED_VAR,
                value: "maybe".to_string()
            }
        );
        assert!(err.to_string().contains("NYAYA_PRECOMPRESSED"));
    }

    #[test]
    fn test_asset_max_age() {
        let config = Config::from_lookup(lookup(&[(ASSET_MAX_AGE_VAR, "86400")])).unwrap();

        assert_eq!(config.asset_max_age, Some(Duration::from_secs(86400)));
        assert_eq!(
            config.cache_control().as_deref(),
            Some("public, max-age=86400")
        );
    }

    #[test]
    fn test_invalid_max_age_is_an_error() {
        for raw in ["-1", "1h", ""] {
            let result = Config::from_lookup(lookup(&[(ASSET_MAX_AGE_VAR, raw)]));
            assert!(
                matches!(result, Err(ConfigError::InvalidSeconds { .. })),
                "value {raw:?}"
            );
        }
    }

    #[test]
    fn test_config_from_env_does_not_panic() {
        // Actual values depend on environment, so we don't assert specific values
        let _ = Config::from_env();
    }

    #[test]
    fn test_config_clone() {
        let config = Config {
            compression: false,
            precompressed: true,
            asset_max_age: Some(Duration::from_secs(60)),
        };

        assert_eq!(config.clone(), config);
    }

    #[test]
    fn test_config_debug() {
        let debug_str = format!("{:?}", Config::default());

        assert!(debug_str.contains("Config"));
        assert!(debug_str.contains("compression"));
    }
}
