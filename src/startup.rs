//! src/startup.rs
use crate::configuration::Settings;
use crate::error::PipelineError;
use crate::mapreduce::MapReduce;
use crate::sink::TsvSink;
use crate::source::TsvSource;
use std::path::{Path, PathBuf};

/// Reads `input`, runs the job and writes the dated report into the
/// configured output directory. Returns the report path.
pub async fn run_report(input: &Path, settings: &Settings) -> Result<PathBuf, PipelineError> {
    run_report_to(input, settings, TsvSink::new(&settings.report.output_dir)).await
}

#[tracing::instrument(name = "Search keyword performance", skip_all, fields(input = %input.display()))]
pub async fn run_report_to(
    input: &Path,
    settings: &Settings,
    sink: TsvSink,
) -> Result<PathBuf, PipelineError> {
    let source = TsvSource::open(input)?;
    let records = blocking("source", move || source.read()).await?;

    let job = MapReduce::new(settings);
    tracing::info!(job_id = %job.job_id(), workers = job.workers(), "starting job");
    let report = job.run(records).await?;

    blocking("sink", move || sink.write(&report)).await
}

/// File I/O runs on tokio's blocking pool so it never stalls the runtime
/// the map workers are scheduled from.
async fn blocking<T, F>(stage: &'static str, f: F) -> Result<T, PipelineError>
where
    F: FnOnce() -> Result<T, PipelineError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|source| PipelineError::Blocking { stage, source })?
}

#[cfg(test)]
mod tests {
    use super::blocking;
    use crate::error::PipelineError;
    use claims::{assert_matches, assert_ok_eq};

    #[tokio::test]
    async fn blocking_work_returns_its_result() {
        assert_ok_eq!(blocking("source", || Ok(42)).await, 42);
    }

    #[tokio::test]
    async fn a_panicking_blocking_task_is_reported_with_its_stage() {
        let result: Result<(), _> = blocking("sink", || panic!("disk went away")).await;
        let error = result.expect_err("A panicking task should fail");

        assert_matches!(error, PipelineError::Blocking { stage: "sink", .. });
        assert_eq!(error.stage(), "sink");
        assert_eq!(error.exit_code(), 70);
    }
}
