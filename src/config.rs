use std::env;

use anyhow::Context;
use chrono::Duration;

pub const DEFAULT_LOG_FILTER: &str = "caresync=info,actix_web=info";
const DEFAULT_SESSION_IDLE_SECS: i64 = 3600;

pub struct Config {
    pub database_url: String,
    pub bind: String,
    pub origin: String,
    pub session_idle: Duration,
    pub static_dir: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let session_idle =
            parse_session_idle(env::var("CARESYNC_SESSION_IDLE_SECS").ok().as_deref())?;

        Ok(Self {
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "caresync.db".to_string()),
            bind: env::var("CARESYNC_BIND").unwrap_or_else(|_| "127.0.0.1:8080".to_string()),
            origin: env::var("CARESYNC_ORIGIN").unwrap_or_else(|_| "caresync".to_string()),
            session_idle,
            static_dir: env::var("CARESYNC_STATIC_DIR").ok(),
        })
    }
}

fn parse_session_idle(raw: Option<&str>) -> anyhow::Result<Duration> {
    let secs = match raw {
        Some(raw) => raw
            .trim()
            .parse::<i64>()
            .context("CARESYNC_SESSION_IDLE_SECS must be a whole number of seconds")?,
        None => DEFAULT_SESSION_IDLE_SECS,
    };
    if secs <= 0 {
        anyhow::bail!("CARESYNC_SESSION_IDLE_SECS must be positive, got {}", secs);
    }
    Duration::try_seconds(secs)
        .with_context(|| format!("CARESYNC_SESSION_IDLE_SECS is out of range: {}", secs))
}
