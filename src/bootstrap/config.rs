//! Config resolution: file (or nothing), then defaults for empty values,
//! then environment overrides.

use std::path::{Path, PathBuf};

use anyhow::Context;
use nf_core::config::{AppConfig, ReconnectConfig};
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "newsfeed.toml";

pub const ENV_PORT: &str = "PORT";
pub const ENV_DATABASE_URL: &str = "DATABASE_URL";
pub const ENV_BACKEND_URL: &str = "NEWSFEED_BACKEND_URL";

/// Load `explicit` (must exist) or `newsfeed.toml` in the working directory
/// (may be absent), then fill in defaults and environment overrides.
pub fn resolve_config(explicit: Option<&Path>) -> anyhow::Result<AppConfig> {
    let loaded = match explicit {
        Some(path) => nf_infra::load_config(path)?,
        None => {
            let path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if path.exists() {
                nf_infra::load_config(&path)?
            } else {
                debug!("No {DEFAULT_CONFIG_FILE} found, using defaults");
                AppConfig::empty()
            }
        }
    };

    let data_dir = if loaded.client.data_dir.as_os_str().is_empty() {
        nf_infra::fs::app_data_dir().context("Failed to resolve data directory")?
    } else {
        loaded.client.data_dir.clone()
    };
    let defaults = AppConfig::with_system_defaults(data_dir);

    Ok(apply_env_overrides(fill_defaults(loaded, &defaults), |key| {
        std::env::var(key).ok()
    }))
}

fn or_default(value: String, default: &str) -> String {
    if value.trim().is_empty() {
        default.to_string()
    } else {
        value
    }
}

fn or_default_path(value: PathBuf, default: &Path) -> PathBuf {
    if value.as_os_str().is_empty() {
        default.to_path_buf()
    } else {
        value
    }
}

/// Replace empty strings and paths with `defaults`. Zero reconnect delays
/// take the default delays; `max_attempts` is kept as read (0 = disabled).
pub fn fill_defaults(config: AppConfig, defaults: &AppConfig) -> AppConfig {
    let AppConfig { server, client } = config;
    let default_reconnect = ReconnectConfig::disabled();
    AppConfig {
        server: nf_core::config::ServerConfig {
            listen: or_default(server.listen, &defaults.server.listen),
            database_path: or_default_path(server.database_path, &defaults.server.database_path),
            expo_push_url: or_default(server.expo_push_url, &defaults.server.expo_push_url),
        },
        client: nf_core::config::ClientConfig {
            backend_url: or_default(client.backend_url, &defaults.client.backend_url),
            data_dir: or_default_path(client.data_dir, &defaults.client.data_dir),
            http_timeout_secs: client.http_timeout_secs,
            reconnect: ReconnectConfig {
                max_attempts: client.reconnect.max_attempts,
                base_delay_ms: match client.reconnect.base_delay_ms {
                    0 => default_reconnect.base_delay_ms,
                    ms => ms,
                },
                max_delay_ms: match client.reconnect.max_delay_ms {
                    0 => default_reconnect.max_delay_ms,
                    ms => ms,
                },
            },
        },
    }
}

/// `PORT` keeps the configured host and swaps the port.
pub fn apply_env_overrides<F>(mut config: AppConfig, env: F) -> AppConfig
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(port) = env(ENV_PORT).filter(|p| !p.trim().is_empty()) {
        let host = config
            .server
            .listen
            .rsplit_once(':')
            .map(|(host, _)| host.to_string())
            .unwrap_or_else(|| "0.0.0.0".to_string());
        config.server.listen = format!("{host}:{}", port.trim());
    }
    if let Some(url) = env(ENV_DATABASE_URL).filter(|u| !u.trim().is_empty()) {
        config.server.database_path = PathBuf::from(url.trim());
    }
    if let Some(url) = env(ENV_BACKEND_URL).filter(|u| !u.trim().is_empty()) {
        config.client.backend_url = url.trim().to_string();
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn defaults() -> AppConfig {
        AppConfig::with_system_defaults(PathBuf::from("/data/newsfeed"))
    }

    #[test]
    fn test_empty_config_takes_every_default() {
        let config = fill_defaults(AppConfig::empty(), &defaults());

        assert_eq!(config, defaults());
    }

    #[test]
    fn test_configured_values_are_kept() {
        let mut loaded = AppConfig::empty();
        loaded.server.listen = "127.0.0.1:9000".into();
        loaded.client.backend_url = "http://news.local".into();
        loaded.client.reconnect.max_attempts = 4;
        loaded.client.reconnect.base_delay_ms = 200;

        let config = fill_defaults(loaded, &defaults());

        assert_eq!(config.server.listen, "127.0.0.1:9000");
        assert_eq!(config.server.database_path, PathBuf::from("/data/newsfeed/newsfeed.db"));
        assert_eq!(config.client.backend_url, "http://news.local");
        assert_eq!(config.client.reconnect.max_attempts, 4);
        assert_eq!(config.client.reconnect.base_delay_ms, 200);
        assert_eq!(config.client.reconnect.max_delay_ms, 30_000);
    }

    #[test]
    fn test_env_overrides_win() {
        let env: HashMap<&str, &str> = HashMap::from([
            (ENV_PORT, "8080"),
            (ENV_DATABASE_URL, "/tmp/other.db"),
            (ENV_BACKEND_URL, "https://news.example.com"),
        ]);

        let config = apply_env_overrides(defaults(), |key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.server.listen, "0.0.0.0:8080");
        assert_eq!(config.server.database_path, PathBuf::from("/tmp/other.db"));
        assert_eq!(config.client.backend_url, "https://news.example.com");
    }

    #[test]
    fn test_blank_env_values_are_ignored() {
        let config = apply_env_overrides(defaults(), |_| Some("  ".to_string()));

        assert_eq!(config, defaults());
    }
}
