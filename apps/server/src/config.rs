use std::{net::SocketAddr, time::Duration};

use salti_core::errors::{Error, Result};
use salti_core::settings::{FeatureFlags, Platform};
use salti_core::sync::RetryPolicy;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub platform: Platform,
    pub flags: FeatureFlags,
    pub sync_policy: RetryPolicy,
}

fn parse_flag(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(Error::InvalidConfigValue(format!("{}={}", key, other))),
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| Error::InvalidConfigValue(format!("{}={}", key, raw)))
}

impl Config {
    /// Loads `.env` (if present) and reads the `SALTI_*` variables.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, using defaults for
    /// missing keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let listen_addr = lookup("SALTI_LISTEN_ADDR").unwrap_or_else(|| "0.0.0.0:8080".into());
        let listen_addr: SocketAddr = parse_value("SALTI_LISTEN_ADDR", &listen_addr)?;
        let db_path = lookup("SALTI_DB_PATH").unwrap_or_else(|| "./db/salti.db".into());
        let cors_allow = lookup("SALTI_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = match lookup("SALTI_REQUEST_TIMEOUT_MS") {
            Some(raw) => parse_value("SALTI_REQUEST_TIMEOUT_MS", &raw)?,
            None => 30_000,
        };
        let platform = lookup("SALTI_PLATFORM")
            .map(|hint| Platform::detect(&hint))
            .unwrap_or_default();

        let defaults = FeatureFlags::default();
        let flag = |key: &str, default: bool| -> Result<bool> {
            lookup(key).map_or(Ok(default), |raw| parse_flag(key, &raw))
        };
        let flags = FeatureFlags {
            analytics: flag("SALTI_FLAG_ANALYTICS", defaults.analytics)?,
            streak_protection: flag("SALTI_FLAG_STREAK_PROTECTION", defaults.streak_protection)?,
            projections: flag("SALTI_FLAG_PROJECTIONS", defaults.projections)?,
        };

        let mut sync_policy = RetryPolicy::default();
        if let Some(raw) = lookup("SALTI_SYNC_MAX_ATTEMPTS") {
            sync_policy.max_attempts = parse_value("SALTI_SYNC_MAX_ATTEMPTS", &raw)?;
        }
        if let Some(raw) = lookup("SALTI_SYNC_INITIAL_DELAY_MS") {
            sync_policy.initial_delay_ms = parse_value("SALTI_SYNC_INITIAL_DELAY_MS", &raw)?;
        }

        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            platform,
            flags,
            sync_policy,
        })
    }
}
