use config::{Config, File};
use serde::{de, Deserialize, Serialize};
use serde_with::{serde_as, DurationMilliSeconds};
use std::{net::SocketAddr, str::FromStr, time::Duration};

pub const SERVICE_NAME: &str = "CONTRACT_BENCH";

/// Wrapper under [`serde::de::IgnoredAny`] which implements
/// [`PartialEq`] and [`Eq`] for fields to be ignored.
#[derive(Copy, Clone, Debug, Default, Deserialize)]
struct IgnoredAny(de::IgnoredAny);

impl PartialEq for IgnoredAny {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for IgnoredAny {}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub server: ServerSettings,
    pub tracing: TracingSettings,
    pub benchmark: BenchmarkSettings,
    pub deployment: DeploymentSettings,
    pub seed: SeedSettings,

    // Unknown fields are denied, but the config path is passed through the
    // `CONTRACT_BENCH__CONFIG` variable and ends up here.
    #[serde(skip_serializing, rename = "config")]
    config_path: IgnoredAny,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ServerSettings {
    pub addr: SocketAddr,
    pub max_body_size: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from_str("0.0.0.0:8050").expect("should be valid addr"),
            max_body_size: 2 * 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TracingFormat {
    #[default]
    Default,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct TracingSettings {
    pub enabled: bool,
    pub format: TracingFormat,
}

impl Default for TracingSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            format: Default::default(),
        }
    }
}

#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct BenchmarkSettings {
    /// How long the simulated runner takes per run.
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    pub simulated_delay: Duration,
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    pub run_timeout: Duration,
}

impl Default for BenchmarkSettings {
    fn default() -> Self {
        Self {
            simulated_delay: Duration::from_millis(500),
            run_timeout: Duration::from_secs(30),
        }
    }
}

#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct DeploymentSettings {
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    pub simulated_delay: Duration,
}

impl Default for DeploymentSettings {
    fn default() -> Self {
        Self {
            simulated_delay: Duration::from_secs(2),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct SeedSettings {
    /// Start with the sample contracts registered.
    pub enabled: bool,
}

impl Default for SeedSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Settings {
    pub fn build() -> anyhow::Result<Self> {
        let config_path_name = format!("{SERVICE_NAME}__CONFIG");
        let config_path = std::env::var(&config_path_name);

        let mut builder = Config::builder();
        if let Ok(config_path) = config_path {
            builder = builder.add_source(File::with_name(&config_path));
            std::env::remove_var(&config_path_name);
        };
        // Use `__` so that keys with underscores (e.g. `max_body_size`) stay addressable
        builder =
            builder.add_source(config::Environment::with_prefix(SERVICE_NAME).separator("__"));

        let settings: Self = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.server.max_body_size == 0 {
            anyhow::bail!("server.max_body_size must be positive");
        }
        if self.benchmark.run_timeout.is_zero() {
            anyhow::bail!("benchmark.run_timeout must be positive");
        }
        Ok(())
    }
}
