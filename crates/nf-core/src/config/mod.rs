//! # Configuration DTO
//!
//! Pure data: TOML → [`AppConfig`] mapping with no validation. Empty strings
//! and zero values are facts; filling them in is the bootstrap's job.

use std::path::PathBuf;

pub const DEFAULT_LISTEN: &str = "0.0.0.0:3000";
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:3000";
pub const DEFAULT_EXPO_PUSH_URL: &str = "https://exp.host/--/api/v2/push/send";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub client: ClientConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Socket address the article service binds to.
    pub listen: String,
    pub database_path: PathBuf,
    pub expo_push_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub backend_url: String,
    /// Directory holding the local key-value records and logs.
    pub data_dir: PathBuf,
    /// 0 keeps the transport default (no timeout).
    pub http_timeout_secs: u64,
    pub reconnect: ReconnectConfig,
}

/// Realtime reconnection policy. `max_attempts == 0` disables reconnection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconnectConfig {
    pub max_attempts: u32,
    pub base_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl ReconnectConfig {
    pub fn disabled() -> Self {
        Self {
            max_attempts: 0,
            base_delay_ms: 1_000,
            max_delay_ms: 30_000,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.max_attempts > 0
    }
}

fn str_at<'a>(value: &'a toml::Value, section: &[&str], key: &str) -> Option<&'a str> {
    table_at(value, section)
        .and_then(|t| t.get(key))
        .and_then(|v| v.as_str())
}

fn int_at(value: &toml::Value, section: &[&str], key: &str) -> Option<i64> {
    table_at(value, section)
        .and_then(|t| t.get(key))
        .and_then(|v| v.as_integer())
}

fn table_at<'a>(value: &'a toml::Value, section: &[&str]) -> Option<&'a toml::Value> {
    section.iter().try_fold(value, |v, name| v.get(name))
}

impl AppConfig {
    /// Map a parsed TOML document onto the DTO.
    ///
    /// Missing sections and keys become empty values; negative integers
    /// become 0.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let server = ["server"];
        let client = ["client"];
        let reconnect = ["client", "reconnect"];

        Ok(Self {
            server: ServerConfig {
                listen: str_at(toml_value, &server, "listen")
                    .unwrap_or("")
                    .to_string(),
                database_path: PathBuf::from(
                    str_at(toml_value, &server, "database_path").unwrap_or(""),
                ),
                expo_push_url: str_at(toml_value, &server, "expo_push_url")
                    .unwrap_or("")
                    .to_string(),
            },
            client: ClientConfig {
                backend_url: str_at(toml_value, &client, "backend_url")
                    .unwrap_or("")
                    .to_string(),
                data_dir: PathBuf::from(str_at(toml_value, &client, "data_dir").unwrap_or("")),
                http_timeout_secs: int_at(toml_value, &client, "http_timeout_secs")
                    .unwrap_or(0)
                    .max(0) as u64,
                reconnect: ReconnectConfig {
                    max_attempts: int_at(toml_value, &reconnect, "max_attempts")
                        .unwrap_or(0)
                        .clamp(0, u32::MAX as i64) as u32,
                    base_delay_ms: int_at(toml_value, &reconnect, "base_delay_ms")
                        .unwrap_or(0)
                        .max(0) as u64,
                    max_delay_ms: int_at(toml_value, &reconnect, "max_delay_ms")
                        .unwrap_or(0)
                        .max(0) as u64,
                },
            },
        })
    }

    pub fn empty() -> Self {
        Self {
            server: ServerConfig {
                listen: String::new(),
                database_path: PathBuf::new(),
                expo_push_url: String::new(),
            },
            client: ClientConfig {
                backend_url: String::new(),
                data_dir: PathBuf::new(),
                http_timeout_secs: 0,
                reconnect: ReconnectConfig {
                    max_attempts: 0,
                    base_delay_ms: 0,
                    max_delay_ms: 0,
                },
            },
        }
    }

    /// Production defaults rooted at `data_dir` (computed by the caller,
    /// usually through `dirs`).
    pub fn with_system_defaults(data_dir: PathBuf) -> Self {
        Self {
            server: ServerConfig {
                listen: DEFAULT_LISTEN.to_string(),
                database_path: data_dir.join("newsfeed.db"),
                expo_push_url: DEFAULT_EXPO_PUSH_URL.to_string(),
            },
            client: ClientConfig {
                backend_url: DEFAULT_BACKEND_URL.to_string(),
                data_dir,
                http_timeout_secs: 0,
                reconnect: ReconnectConfig::disabled(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toml::Value;

    #[test]
    fn test_from_toml_reads_all_sections() {
        let toml_str = r#"
            [server]
            listen = "127.0.0.1:4000"
            database_path = "/var/lib/newsfeed/articles.db"
            expo_push_url = "http://push.local/send"

            [client]
            backend_url = "http://api.local"
            data_dir = "/home/u/.newsfeed"
            http_timeout_secs = 15

            [client.reconnect]
            max_attempts = 5
            base_delay_ms = 250
            max_delay_ms = 8000
        "#;
        let value: Value = toml::from_str(toml_str).unwrap();

        let config = AppConfig::from_toml(&value).unwrap();

        assert_eq!(config.server.listen, "127.0.0.1:4000");
        assert_eq!(
            config.server.database_path,
            PathBuf::from("/var/lib/newsfeed/articles.db")
        );
        assert_eq!(config.server.expo_push_url, "http://push.local/send");
        assert_eq!(config.client.backend_url, "http://api.local");
        assert_eq!(config.client.data_dir, PathBuf::from("/home/u/.newsfeed"));
        assert_eq!(config.client.http_timeout_secs, 15);
        assert_eq!(
            config.client.reconnect,
            ReconnectConfig {
                max_attempts: 5,
                base_delay_ms: 250,
                max_delay_ms: 8000,
            }
        );
    }

    #[test]
    fn test_from_toml_missing_sections_are_empty() {
        let value: Value = toml::from_str("").unwrap();

        let config = AppConfig::from_toml(&value).unwrap();

        assert_eq!(config, AppConfig::empty());
    }

    #[test]
    fn test_from_toml_negative_numbers_become_zero() {
        let value: Value = toml::from_str(
            r#"
            [client]
            http_timeout_secs = -3
            [client.reconnect]
            max_attempts = -1
            "#,
        )
        .unwrap();

        let config = AppConfig::from_toml(&value).unwrap();

        assert_eq!(config.client.http_timeout_secs, 0);
        assert!(!config.client.reconnect.is_enabled());
    }

    #[test]
    fn test_with_system_defaults() {
        let config = AppConfig::with_system_defaults(PathBuf::from("/tmp/nf"));

        assert_eq!(config.server.listen, DEFAULT_LISTEN);
        assert_eq!(config.server.database_path, PathBuf::from("/tmp/nf/newsfeed.db"));
        assert_eq!(config.client.data_dir, PathBuf::from("/tmp/nf"));
        assert_eq!(config.client.backend_url, DEFAULT_BACKEND_URL);
        assert!(!config.client.reconnect.is_enabled());
    }
}
