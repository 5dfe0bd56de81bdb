use cartsim_core::*;
use std::time::Duration;

/// Simulator settings. Routes and credentials are not configurable.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    api: String,
    interval: Duration,
    jitter: Degrees,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: API_URL.to_string(),
            interval: UPDATE_INTERVAL,
            jitter: JITTER,
        }
    }
}

impl Config {
    /// Defaults overridden by `API_URL` and `UPDATE_INTERVAL` (e.g. "5s").
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }
    fn from_vars<F>(var: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(api) = var("API_URL") {
            config = config.with_api(&api);
        }
        if let Some(interval) = var("UPDATE_INTERVAL") {
            let interval = parse_duration(&interval)
                .ok_or_else(|| anyhow::anyhow!("invalid UPDATE_INTERVAL {:?}", interval))?;
            config = config.with_interval(interval)?;
        }
        Ok(config)
    }
    pub fn with_api(mut self, api: &str) -> Self {
        self.api = api.trim().trim_end_matches('/').to_string();
        self
    }
    pub fn with_interval(mut self, interval: Duration) -> anyhow::Result<Self> {
        if interval.is_zero() {
            return Err(anyhow::anyhow!("update interval must be positive"));
        }
        self.interval = interval;
        Ok(self)
    }
    pub fn api(&self) -> &str {
        &self.api
    }
    pub fn interval(&self) -> Duration {
        self.interval
    }
    pub fn jitter(&self) -> Degrees {
        self.jitter
    }
}
