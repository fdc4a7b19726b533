//! src/error.rs
use std::path::PathBuf;

#[derive(thiserror::Error)]
pub enum PipelineError {
    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),
    #[error("failed to read input file {}", path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("input file {} has no `{column}` column", path.display())]
    MissingColumn { path: PathBuf, column: &'static str },
    #[error("failed to parse input record in {}", path.display())]
    InputParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("failed to write report to {}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("map worker did not complete")]
    Worker(#[source] tokio::task::JoinError),
    #[error("{stage} task did not complete")]
    Blocking {
        stage: &'static str,
        #[source]
        source: tokio::task::JoinError,
    },
    #[error("failed to load configuration")]
    Configuration(#[from] config::ConfigError),
}

impl PipelineError {
    /// The adapter or stage the failure belongs to.
    pub fn stage(&self) -> &'static str {
        match self {
            PipelineError::InputNotFound(_)
            | PipelineError::InputRead { .. }
            | PipelineError::MissingColumn { .. }
            | PipelineError::InputParse { .. } => "source",
            PipelineError::OutputWrite { .. } => "sink",
            PipelineError::Worker(_) => "aggregation",
            PipelineError::Blocking { stage, .. } => stage,
            PipelineError::Configuration(_) => "configuration",
        }
    }

    /// Process exit status, following sysexits.h.
    pub fn exit_code(&self) -> u8 {
        match self {
            PipelineError::InputNotFound(_) => 66,
            PipelineError::InputRead { .. } => 74,
            PipelineError::MissingColumn { .. } | PipelineError::InputParse { .. } => 65,
            PipelineError::OutputWrite { .. } => 73,
            PipelineError::Worker(_) | PipelineError::Blocking { .. } => 70,
            PipelineError::Configuration(_) => 78,
        }
    }
}

impl std::fmt::Debug for PipelineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(f, self)
    }
}

pub fn error_chain_fmt(
    f: &mut std::fmt::Formatter<'_>,
    e: &impl std::error::Error,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
