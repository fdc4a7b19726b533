//! tests/api/helpers.rs
use search_keyword_performance::configuration::{
    ClusterSettings, DEFAULT_EXCLUDED_DOMAIN, ReportSettings, Settings, TelemetrySettings,
};
use search_keyword_performance::telemetry::init_tracing;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static TRACING: LazyLock<()> = LazyLock::new(|| {
    if std::env::var("TEST_LOG").is_ok() {
        let telemetry = TelemetrySettings {
            otlp: false,
            log_level: "debug".into(),
        };
        init_tracing("tests::api", &telemetry).expect("Failed to setup tracing");
    }
});

pub fn test_data_dir() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("data");
    path
}

pub fn settings(output_dir: &Path, workers: u16) -> Settings {
    LazyLock::force(&TRACING);
    Settings {
        cluster: ClusterSettings { workers },
        report: ReportSettings {
            excluded_domain: DEFAULT_EXCLUDED_DOMAIN.into(),
            output_dir: output_dir.to_path_buf(),
        },
        telemetry: TelemetrySettings {
            otlp: false,
            log_level: "info".into(),
        },
    }
}
