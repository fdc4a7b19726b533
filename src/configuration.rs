//! src/configuration.rs
use serde_aux::field_attributes::{
    deserialize_bool_from_anything, deserialize_number_from_string,
};
use std::path::{Path, PathBuf};

pub const DEFAULT_WORKERS: u16 = 4;
pub const DEFAULT_EXCLUDED_DOMAIN: &str = "esshopzilla.com";

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Settings {
    pub cluster: ClusterSettings,
    pub report: ReportSettings,
    pub telemetry: TelemetrySettings,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct ClusterSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub workers: u16,
}

impl ClusterSettings {
    pub fn worker_count(&self) -> usize {
        usize::from(self.workers.max(1))
    }
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct ReportSettings {
    /// The site's own domain; its rows are self-referrals, not search traffic.
    pub excluded_domain: String,
    pub output_dir: PathBuf,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct TelemetrySettings {
    #[serde(deserialize_with = "deserialize_bool_from_anything")]
    pub otlp: bool,
    pub log_level: String,
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path =
        std::env::current_dir().map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;
    get_configuration_from(&base_path.join("configuration"))
}

/// Defaults, then `<config_dir>/base.yaml` if present, then `SKP_*`
/// environment variables (`SKP_CLUSTER__WORKERS=8`).
pub fn get_configuration_from(config_dir: &Path) -> Result<Settings, config::ConfigError> {
    let settings = config::Config::builder()
        .set_default("cluster.workers", i64::from(DEFAULT_WORKERS))?
        .set_default("report.excluded_domain", DEFAULT_EXCLUDED_DOMAIN)?
        .set_default("report.output_dir", ".")?
        .set_default("telemetry.otlp", false)?
        .set_default("telemetry.log_level", "info")?
        .add_source(config::File::from(config_dir.join("base.yaml")).required(false))
        .add_source(
            config::Environment::with_prefix("SKP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;
    settings.try_deserialize::<Settings>()
}
