//! Development backend configuration.

use codedrop_core::config::env_flag_enabled;
use codedrop_core::constants::MAX_CONTENT_BYTES;
use std::env;
use std::net::SocketAddr;
use std::time::Duration;

/// Default listen port, matching the client's default base URL.
pub const DEFAULT_PORT: u16 = 8080;
/// Environment flag that permits non-loopback binds and any CORS origin.
pub const ALLOW_PUBLIC_ACCESS_ENV: &str = "ALLOW_PUBLIC_ACCESS";

/// Runtime configuration for the development backend.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub max_content_bytes: usize,
    pub purge_interval: Duration,
    pub allow_public_access: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            max_content_bytes: MAX_CONTENT_BYTES,
            purge_interval: Duration::from_secs(3600),
            allow_public_access: false,
        }
    }
}

impl ServerConfig {
    /// Load configuration from `PORT`, `PURGE_INTERVAL_SECS`, and
    /// `ALLOW_PUBLIC_ACCESS`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(defaults.port),
            purge_interval: env::var("PURGE_INTERVAL_SECS")
                .ok()
                .and_then(|s| s.trim().parse::<u64>().ok())
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .unwrap_or(defaults.purge_interval),
            allow_public_access: env_flag_enabled(ALLOW_PUBLIC_ACCESS_ENV),
            ..defaults
        }
    }
}

/// Resolve the listener address from `BIND` and the public-access policy.
///
/// Non-loopback addresses are forced back to `127.0.0.1` unless
/// `allow_public_access` is set.
pub fn resolve_bind_address(port: u16, allow_public_access: bool) -> SocketAddr {
    let default_bind = SocketAddr::from(([127, 0, 0, 1], port));
    let requested = match env::var("BIND") {
        Ok(value) => match value.trim().parse::<SocketAddr>() {
            Ok(addr) => addr,
            Err(err) => {
                tracing::warn!(
                    "Invalid BIND='{}': {}. Falling back to {}",
                    value,
                    err,
                    default_bind
                );
                default_bind
            }
        },
        Err(_) => default_bind,
    };

    if allow_public_access || requested.ip().is_loopback() {
        return requested;
    }

    tracing::warn!(
        "Non-loopback bind {} requested without ALLOW_PUBLIC_ACCESS; forcing 127.0.0.1",
        requested
    );
    SocketAddr::from(([127, 0, 0, 1], requested.port()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use codedrop_core::env::{lock_env, EnvGuard};

    #[test]
    fn bind_address_forced_to_loopback_without_public_access() {
        let _lock = lock_env();
        let _bind = EnvGuard::set("BIND", "0.0.0.0:4040");
        let resolved = resolve_bind_address(4040, false);
        assert_eq!(resolved, SocketAddr::from(([127, 0, 0, 1], 4040)));

        let public = resolve_bind_address(4040, true);
        assert_eq!(public.ip().to_string(), "0.0.0.0");
    }

    #[test]
    fn invalid_bind_falls_back_to_port() {
        let _lock = lock_env();
        let _bind = EnvGuard::set("BIND", "bad:host");
        assert_eq!(
            resolve_bind_address(4041, false),
            SocketAddr::from(([127, 0, 0, 1], 4041))
        );
    }

    #[test]
    fn from_env_reads_port_and_keeps_content_limit() {
        let _lock = lock_env();
        let _port = EnvGuard::set("PORT", "9191");
        let _purge = EnvGuard::set("PURGE_INTERVAL_SECS", "nope");
        let config = ServerConfig::from_env();
        assert_eq!(config.port, 9191);
        assert_eq!(config.purge_interval, Duration::from_secs(3600));
        assert_eq!(config.max_content_bytes, MAX_CONTENT_BYTES);
    }

    #[test]
    fn falsy_public_access_flag_keeps_loopback_bind() {
        let _lock = lock_env();
        let _bind = EnvGuard::set("BIND", "0.0.0.0:4042");
        for value in ["0", "false", "off", ""] {
            let _flag = EnvGuard::set(ALLOW_PUBLIC_ACCESS_ENV, value);
            let config = ServerConfig::from_env();
            assert!(!config.allow_public_access, "{value:?}");
            assert_eq!(
                resolve_bind_address(4042, config.allow_public_access),
                SocketAddr::from(([127, 0, 0, 1], 4042))
            );
        }

        let _flag = EnvGuard::set(ALLOW_PUBLIC_ACCESS_ENV, "true");
        let config = ServerConfig::from_env();
        assert!(config.allow_public_access);
        assert_eq!(
            resolve_bind_address(4042, config.allow_public_access)
                .ip()
                .to_string(),
            "0.0.0.0"
        );
    }
}
