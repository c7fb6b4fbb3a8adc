use std::env;
use std::time::Duration;

use crate::domain::DEFAULT_WINDOW_SIZE;

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_UPSTREAM_URL: &str = "http://localhost:9876/numbers/";
pub const DEFAULT_UPSTREAM_TIMEOUT_MS: u64 = 500;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub window_size: usize,
    pub upstream_url: String,
    pub upstream_timeout: Duration,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            port: lookup("PORT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            window_size: lookup("AVGCALC_WINDOW_SIZE")
                .and_then(|s| s.parse().ok())
                .filter(|&n: &usize| n > 0)
                .unwrap_or(DEFAULT_WINDOW_SIZE),
            upstream_url: lookup("AVGCALC_UPSTREAM_URL")
                .unwrap_or_else(|| DEFAULT_UPSTREAM_URL.to_string()),
            upstream_timeout: Duration::from_millis(
                lookup("AVGCALC_UPSTREAM_TIMEOUT_MS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_UPSTREAM_TIMEOUT_MS),
            ),
            log_level: lookup("AVGCALC_LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
