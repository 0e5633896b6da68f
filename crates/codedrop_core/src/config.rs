//! Configuration loading from environment variables.

use crate::constants::{DEFAULT_API_HOST, DEFAULT_SCHEME, DEFAULT_TIMEOUT_SECS};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable naming the backend host or base URL.
pub const API_HOST_ENV: &str = "CODEDROP_API_HOST";
/// Environment variable overriding the HTTP timeout (seconds).
pub const TIMEOUT_ENV: &str = "CODEDROP_TIMEOUT_SECS";
/// Environment variable overriding the preference file location.
pub const PREFS_PATH_ENV: &str = "CODEDROP_PREFS_PATH";

/// Runtime configuration for CodeDrop clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Backend base URL, always carrying a scheme and no trailing slash.
    pub api_base: String,
    pub timeout: Duration,
    pub preferences_path: PathBuf,
}

/// Normalize a configured host into a base URL.
///
/// Blank input falls back to [`DEFAULT_API_HOST`]. A value without `://`
/// gets [`DEFAULT_SCHEME`] prepended. Trailing slashes are removed so callers
/// can append path segments directly.
///
/// # Returns
/// The normalized base URL.
pub fn resolve_base_url(raw: &str) -> String {
    let trimmed = raw.trim();
    let host = if trimmed.is_empty() {
        DEFAULT_API_HOST
    } else {
        trimmed
    };
    let with_scheme = if host.contains("://") {
        host.to_string()
    } else {
        format!("{}{}", DEFAULT_SCHEME, host)
    };
    with_scheme.trim_end_matches('/').to_string()
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = resolve_home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

fn resolve_home_dir() -> Option<PathBuf> {
    for key in ["HOME", "USERPROFILE"] {
        if let Ok(value) = env::var(key) {
            if !value.trim().is_empty() {
                return Some(PathBuf::from(value));
            }
        }
    }

    // Windows legacy HOMEDRIVE + HOMEPATH
    if let (Ok(drive), Ok(path)) = (env::var("HOMEDRIVE"), env::var("HOMEPATH")) {
        if !drive.trim().is_empty() && !path.trim().is_empty() {
            return Some(PathBuf::from(format!("{}{}", drive, path)));
        }
    }

    env::current_dir().ok()
}

/// Parse a boolean environment flag value.
///
/// Truthy: `1`, `true`, `yes`, `on`. Falsy: `0`, `false`, `no`, `off`, and
/// the empty string. Matching is case-insensitive and ignores surrounding
/// whitespace.
///
/// # Returns
/// `Some(bool)` when the value is recognized, otherwise `None`.
pub fn parse_env_flag(value: &str) -> Option<bool> {
    let normalized = value.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Read a boolean flag from the environment.
///
/// Missing or unrecognized values are treated as `false`.
pub fn env_flag_enabled(name: &str) -> bool {
    env::var(name)
        .ok()
        .and_then(|value| parse_env_flag(&value))
        .unwrap_or(false)
}

/// Default preference file: `~/.config/codedrop/preferences.json`.
pub fn default_preferences_path() -> PathBuf {
    resolve_home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("codedrop")
        .join("preferences.json")
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Returns
    /// A populated [`Config`] with defaults applied when env vars are missing
    /// or unparsable.
    pub fn from_env() -> Self {
        let api_base = env::var(API_HOST_ENV)
            .map(|raw| resolve_base_url(&raw))
            .unwrap_or_else(|_| resolve_base_url(DEFAULT_API_HOST));
        let timeout_secs = env::var(TIMEOUT_ENV)
            .ok()
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        let preferences_path = env::var(PREFS_PATH_ENV)
            .ok()
            .filter(|raw| !raw.trim().is_empty())
            .map(|raw| expand_tilde(raw.trim()))
            .unwrap_or_else(default_preferences_path);

        Self {
            api_base,
            timeout: Duration::from_secs(timeout_secs),
            preferences_path,
        }
    }

    /// Same as [`Config::from_env`] but with an explicit base URL override.
    pub fn with_api_base(mut self, raw: &str) -> Self {
        self.api_base = resolve_base_url(raw);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{lock_env, EnvGuard};

    #[test]
    fn resolve_base_url_keeps_explicit_scheme() {
        assert_eq!(
            resolve_base_url("http://localhost:8080"),
            "http://localhost:8080"
        );
        assert_eq!(
            resolve_base_url("https://paste.example/"),
            "https://paste.example"
        );
    }

    #[test]
    fn resolve_base_url_prefixes_https_when_scheme_missing() {
        assert_eq!(
            resolve_base_url("paste.example.com"),
            "https://paste.example.com"
        );
        assert_eq!(resolve_base_url("  api.host:9000/ "), "https://api.host:9000");
    }

    #[test]
    fn resolve_base_url_blank_uses_default_host() {
        assert_eq!(resolve_base_url(""), DEFAULT_API_HOST);
        assert_eq!(resolve_base_url("   "), DEFAULT_API_HOST);
    }

    #[test]
    fn parse_env_flag_recognizes_truthy_and_falsy_values() {
        for value in ["1", "true", " YES ", "On"] {
            assert_eq!(parse_env_flag(value), Some(true), "{value}");
        }
        for value in ["", "0", "false", "No", " off "] {
            assert_eq!(parse_env_flag(value), Some(false), "{value}");
        }
        assert_eq!(parse_env_flag("maybe"), None);
    }

    #[test]
    fn env_flag_enabled_treats_unset_and_unknown_as_disabled() {
        let _lock = lock_env();
        let _flag = EnvGuard::remove("CODEDROP_TEST_FLAG");
        assert!(!env_flag_enabled("CODEDROP_TEST_FLAG"));

        let _flag = EnvGuard::set("CODEDROP_TEST_FLAG", "sometimes");
        assert!(!env_flag_enabled("CODEDROP_TEST_FLAG"));

        let _flag = EnvGuard::set("CODEDROP_TEST_FLAG", "true");
        assert!(env_flag_enabled("CODEDROP_TEST_FLAG"));
    }

    #[test]
    fn from_env_applies_defaults() {
        let _lock = lock_env();
        let _host = EnvGuard::remove(API_HOST_ENV);
        let _timeout = EnvGuard::remove(TIMEOUT_ENV);
        let _prefs = EnvGuard::remove(PREFS_PATH_ENV);

        let config = Config::from_env();
        assert_eq!(config.api_base, "http://localhost:8080");
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert!(config.preferences_path.ends_with("codedrop/preferences.json"));
    }

    #[test]
    fn from_env_reads_overrides() {
        let _lock = lock_env();
        let _host = EnvGuard::set(API_HOST_ENV, "drop.example.org");
        let _timeout = EnvGuard::set(TIMEOUT_ENV, "5");
        let _prefs = EnvGuard::set(PREFS_PATH_ENV, "/tmp/codedrop-prefs.json");

        let config = Config::from_env();
        assert_eq!(config.api_base, "https://drop.example.org");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(
            config.preferences_path,
            PathBuf::from("/tmp/codedrop-prefs.json")
        );
    }

    #[test]
    fn from_env_ignores_invalid_timeout() {
        let _lock = lock_env();
        let _timeout = EnvGuard::set(TIMEOUT_ENV, "soon");
        assert_eq!(
            Config::from_env().timeout,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        );

        let _zero = EnvGuard::set(TIMEOUT_ENV, "0");
        assert_eq!(
            Config::from_env().timeout,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        );
    }

    #[test]
    fn with_api_base_normalizes_override() {
        let _lock = lock_env();
        let _host = EnvGuard::remove(API_HOST_ENV);
        let config = Config::from_env().with_api_base("127.0.0.1:9/");
        assert_eq!(config.api_base, "https://127.0.0.1:9");
    }
}
