use crate::application::services::CursorPolicy;
use std::env;
use std::time::Duration;

pub const DEFAULT_PRACTICUM_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";
pub const DEFAULT_RETRY_TIME_SECS: u64 = 600;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_ERROR_CACHE_CAPACITY: usize = 100;

#[derive(Clone, Debug)]
pub struct Config {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
    pub practicum_endpoint: String,
    pub telegram_api_url: String,
    pub retry_interval: Duration,
    pub http_timeout: Duration,
    pub error_cache_capacity: usize,
    pub cursor_policy: CursorPolicy,
    /// Initial fetch window start; `None` means process start time
    pub from_date: Option<i64>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let practicum_token = require("PRACTICUM_TOKEN")?;
        let telegram_token = require("TELEGRAM_TOKEN")?;
        let telegram_chat_id = require("TELEGRAM_CHAT_ID")?;

        let practicum_endpoint =
            get("PRACTICUM_ENDPOINT").unwrap_or_else(|| DEFAULT_PRACTICUM_ENDPOINT.to_string());

        let telegram_api_url =
            get("TELEGRAM_API_URL").unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string());

        let retry_secs = parse_or("RETRY_TIME_SECS", get("RETRY_TIME_SECS"), DEFAULT_RETRY_TIME_SECS)?;

        let timeout_secs = parse_or(
            "HTTP_TIMEOUT_SECS",
            get("HTTP_TIMEOUT_SECS"),
            DEFAULT_HTTP_TIMEOUT_SECS,
        )?;

        let error_cache_capacity = parse_or(
            "ERROR_CACHE_CAPACITY",
            get("ERROR_CACHE_CAPACITY"),
            DEFAULT_ERROR_CACHE_CAPACITY,
        )?;

        let cursor_policy = match get("CURSOR_ADVANCE") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                key: "CURSOR_ADVANCE",
                value: raw,
            })?,
            None => CursorPolicy::default(),
        };

        let from_date = match get("POLL_FROM_DATE") {
            Some(raw) => Some(raw.trim().parse().map_err(|_| ConfigError::Invalid {
                key: "POLL_FROM_DATE",
                value: raw,
            })?),
            None => None,
        };

        if retry_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "RETRY_TIME_SECS",
                value: "0".to_string(),
            });
        }

        Ok(Config {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            practicum_endpoint,
            telegram_api_url,
            retry_interval: Duration::from_secs(retry_secs),
            http_timeout: Duration::from_secs(timeout_secs),
            error_cache_capacity,
            cursor_policy,
            from_date,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    key: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}

/// Observability settings. Never fatal: every field has a fallback.
#[derive(Clone, Debug)]
pub struct TelemetryConfig {
    pub otel_exporter_endpoint: Option<String>,
    pub service_name: String,
    pub metrics_port: Option<u16>,
}

impl TelemetryConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let otel_exporter_endpoint = env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
            .ok()
            .filter(|v| !v.is_empty());

        let service_name =
            env::var("SERVICE_NAME").unwrap_or_else(|_| "homework-notifier".to_string());

        let metrics_port = env::var("METRICS_PORT").ok().and_then(|p| p.parse().ok());

        TelemetryConfig {
            otel_exporter_endpoint,
            service_name,
            metrics_port,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} environment variable not set")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    const REQUIRED: [(&str, &str); 3] = [
        ("PRACTICUM_TOKEN", "p-token"),
        ("TELEGRAM_TOKEN", "t-token"),
        ("TELEGRAM_CHAT_ID", "12345"),
    ];

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&REQUIRED)).unwrap();
        assert_eq!(config.practicum_token, "p-token");
        assert_eq!(config.telegram_chat_id, "12345");
        assert_eq!(config.practicum_endpoint, DEFAULT_PRACTICUM_ENDPOINT);
        assert_eq!(config.retry_interval, Duration::from_secs(600));
        assert_eq!(config.http_timeout, Duration::from_secs(30));
        assert_eq!(config.error_cache_capacity, 100);
        assert_eq!(config.cursor_policy, CursorPolicy::OnSuccess);
        assert_eq!(config.from_date, None);
    }

    #[test]
    fn test_each_credential_is_required() {
        for (missing, _) in REQUIRED {
            let vars: Vec<_> = REQUIRED.iter().filter(|(k, _)| *k != missing).copied().collect();
            assert_eq!(
                Config::from_lookup(lookup(&vars)).unwrap_err(),
                ConfigError::Missing(missing)
            );
        }
    }

    #[test]
    fn test_empty_credential_counts_as_missing() {
        let vars = [
            ("PRACTICUM_TOKEN", "p-token"),
            ("TELEGRAM_TOKEN", "  "),
            ("TELEGRAM_CHAT_ID", "12345"),
        ];
        assert_eq!(
            Config::from_lookup(lookup(&vars)).unwrap_err(),
            ConfigError::Missing("TELEGRAM_TOKEN")
        );
    }

    #[test]
    fn test_overrides() {
        let mut vars = REQUIRED.to_vec();
        vars.extend([
            ("RETRY_TIME_SECS", "10"),
            ("CURSOR_ADVANCE", "always"),
            ("POLL_FROM_DATE", "0"),
            ("ERROR_CACHE_CAPACITY", "0"),
            ("TELEGRAM_API_URL", "http://localhost:8081"),
        ]);
        let config = Config::from_lookup(lookup(&vars)).unwrap();
        assert_eq!(config.retry_interval, Duration::from_secs(10));
        assert_eq!(config.cursor_policy, CursorPolicy::Always);
        assert_eq!(config.from_date, Some(0));
        assert_eq!(config.error_cache_capacity, 0);
        assert_eq!(config.telegram_api_url, "http://localhost:8081");
    }

    #[test]
    fn test_invalid_values() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("RETRY_TIME_SECS", "ten"));
        assert_eq!(
            Config::from_lookup(lookup(&vars)).unwrap_err(),
            ConfigError::Invalid {
                key: "RETRY_TIME_SECS",
                value: "ten".to_string()
            }
        );

        let mut vars = REQUIRED.to_vec();
        vars.push(("CURSOR_ADVANCE", "sometimes"));
        assert!(matches!(
            Config::from_lookup(lookup(&vars)),
            Err(ConfigError::Invalid { key: "CURSOR_ADVANCE", .. })
        ));

        let mut vars = REQUIRED.to_vec();
        vars.push(("RETRY_TIME_SECS", "0"));
        assert!(Config::from_lookup(lookup(&vars)).is_err());
    }
}
