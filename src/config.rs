//! Server configuration parsed from environment variables.
//!
//! Unset or unparseable values fall back to the defaults below.

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
pub const DEFAULT_SESSION_IDLE_SECS: u64 = 86_400;
pub const DEFAULT_SESSION_SWEEP_SECS: u64 = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: String,
    pub port: u16,
    /// Sessions untouched for longer than this are evicted.
    pub session_idle: Duration,
    pub session_sweep: Duration,
    pub cookie_secure: bool,
}

impl AppConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `PORT`: default 3000
    /// - `SESSION_IDLE_SECS`: default 86400
    /// - `SESSION_SWEEP_SECS`: default 60
    /// - `COOKIE_SECURE`: `1|true|yes|on` or `0|false|no|off`, default false
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_owned()),
            port: env_parse("PORT", DEFAULT_PORT),
            session_idle: Duration::from_secs(env_parse("SESSION_IDLE_SECS", DEFAULT_SESSION_IDLE_SECS)),
            session_sweep: Duration::from_secs(env_parse("SESSION_SWEEP_SECS", DEFAULT_SESSION_SWEEP_SECS).max(1)),
            cookie_secure: env_bool("COOKIE_SECURE").unwrap_or(false),
        }
    }

    #[must_use]
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_owned(),
            port: DEFAULT_PORT,
            session_idle: Duration::from_secs(DEFAULT_SESSION_IDLE_SECS),
            session_sweep: Duration::from_secs(DEFAULT_SESSION_SWEEP_SECS),
            cookie_secure: false,
        }
    }
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
