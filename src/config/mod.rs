use anyhow::{anyhow, Result};
use std::str::FromStr;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub app_mode: String,
    pub feed_initial_batch: usize,
    pub feed_batch_step: usize,
    pub channel_initial_batch: usize,
    pub channel_batch_step: usize,
    /// Simulated network latency before a pagination batch is revealed.
    pub feed_settle_ms: u64,
    pub max_pulse_name_chars: usize,
    pub max_quiz_name_chars: usize,
    pub share_origin: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            app_mode: env_or("APP_MODE", "feed"),
            feed_initial_batch: env_or_parse("FEED_INITIAL_BATCH", "8")?,
            feed_batch_step: env_or_parse("FEED_BATCH_STEP", "6")?,
            channel_initial_batch: env_or_parse("CHANNEL_INITIAL_BATCH", "10")?,
            channel_batch_step: env_or_parse("CHANNEL_BATCH_STEP", "8")?,
            feed_settle_ms: env_or_parse("FEED_SETTLE_MS", "550")?,
            max_pulse_name_chars: env_or_parse("MAX_PULSE_NAME_CHARS", "200")?,
            max_quiz_name_chars: env_or_parse("MAX_QUIZ_NAME_CHARS", "100")?,
            share_origin: env_or("SHARE_ORIGIN", "https://pulso.local"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_or_parse<T>(key: &str, default: &str) -> Result<T>
where
    T: FromStr,
    <T as FromStr>::Err: std::fmt::Display,
{
    let value = std::env::var(key).unwrap_or_else(|_| default.to_string());
    value
        .parse::<T>()
        .map_err(|err| anyhow!("invalid {}: {}", key, err))
}
