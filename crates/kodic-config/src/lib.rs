use std::env;

use serde::{Deserialize, Serialize};

const DEFAULT_API_URL: &str = "https://en.dict.naver.com/api3/enko";

#[derive(Serialize, Deserialize)]
pub struct Config {
    /// Clipboard poll interval in milliseconds, counted from the end of each
    /// pipeline pass.
    pub poll_ms: u64,
    /// Dictionary API base URL.
    pub api_url: String,
    /// Timeout for a single dictionary request.
    pub http_timeout_secs: u64,
    /// SQLite cache file.
    pub db_path: String,
    /// Log file, appended to.
    pub log_path: String,
    /// Remember lookups in the local store; if false every lookup hits the
    /// network.
    pub cache_enabled: bool,
}

impl Config {
    pub fn new() -> Self {
        let poll_ms = env::var("KODIC_POLL_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(500);

        let http_timeout_secs = env::var("KODIC_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let cache_enabled = env::var("KODIC_CACHE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(true);

        let api_url = env::var("KODIC_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let db_path = env::var("KODIC_DB_PATH").unwrap_or_else(|_| "kodic.db".to_string());
        let log_path = env::var("KODIC_LOG_PATH").unwrap_or_else(|_| "kodic.log".to_string());

        Config {
            poll_ms,
            api_url,
            http_timeout_secs,
            db_path,
            log_path,
            cache_enabled,
        }
    }

    pub fn db_url(&self) -> String {
        format!("sqlite://{}", self.db_path)
    }
}
