use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str =
    "https://saverxdemo-server-435059368913.asia-south1.run.app/predict";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub prediction: PredictionConfig,
    pub simulation: SimulationConfig,
    pub loading: LoadingConfig,
    pub navigation: NavigationConfig,
    pub device: DeviceConfig,
    pub charts: ChartsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionConfig {
    pub endpoint: String,
    pub http_timeout_seconds: u64,
    pub user_agent: String,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            http_timeout_seconds: 30,
            user_agent: "saverx-simulator/0.1".to_string(),
        }
    }
}

impl PredictionConfig {
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_seconds.max(1))
    }
}

/// Minimum time the loading view stays up for a run, independent of latency.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub floor_duration_ms: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            floor_duration_ms: 20_000,
        }
    }
}

impl SimulationConfig {
    pub fn floor_duration(&self) -> Duration {
        Duration::from_millis(self.floor_duration_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadingConfig {
    pub step_interval_ms: u64,
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self {
            step_interval_ms: 1_000,
        }
    }
}

impl LoadingConfig {
    pub fn step_interval(&self) -> Duration {
        Duration::from_millis(self.step_interval_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Layout height used until the first scroll or resize observation.
    pub default_viewport_height: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            default_viewport_height: 1080.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    pub mobile_max_width_px: u32,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            mobile_max_width_px: 768,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartsConfig {
    pub daily_bucket_minutes: u32,
}

impl Default for ChartsConfig {
    fn default() -> Self {
        Self {
            daily_bucket_minutes: 30,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_figment(
            Figment::from(Serialized::defaults(Config::default()))
                .merge(Toml::file("config/default.toml"))
                .merge(Env::prefixed("SAVERX__").split("__")),
        )
    }

    pub fn from_figment(figment: Figment) -> Result<Self> {
        let cfg: Config = figment.extract()?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.prediction.endpoint.trim().is_empty() {
            anyhow::bail!("prediction.endpoint must not be empty");
        }
        if self.charts.daily_bucket_minutes == 0 {
            anyhow::bail!("charts.daily_bucket_minutes must be at least 1");
        }
        if !(self.navigation.default_viewport_height > 0.0) {
            anyhow::bail!("navigation.default_viewport_height must be positive");
        }
        Ok(())
    }
}
