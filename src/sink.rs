//! src/sink.rs
use crate::error::PipelineError;
use crate::functions::{AggregateRecord, Revenue};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

pub const OUTPUT_SUFFIX: &str = "_SearchKeywordPerformance.tab";
pub const HEADER: [&str; 3] = ["Search Engine Domain", "Search Keyword", "Revenue"];

/// Writes the report as `<output_dir>/<YYYY-MM-DD>_SearchKeywordPerformance.tab`.
#[derive(Debug, Clone)]
pub struct TsvSink {
    output_dir: PathBuf,
    date: NaiveDate,
}

impl TsvSink {
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            date: chrono::Local::now().date_naive(),
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("{}{OUTPUT_SUFFIX}", self.date.format("%Y-%m-%d")))
    }

    #[tracing::instrument(name = "Write report", skip_all, fields(records = records.len()))]
    pub fn write(&self, records: &[AggregateRecord]) -> Result<PathBuf, PipelineError> {
        let path = self.output_path();
        let output_error = |source: csv::Error| PipelineError::OutputWrite {
            path: path.clone(),
            source,
        };

        std::fs::create_dir_all(&self.output_dir)
            .map_err(|e| output_error(csv::Error::from(e)))?;
        let mut writer = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .from_path(&path)
            .map_err(output_error)?;
        writer.write_record(HEADER).map_err(output_error)?;
        for record in records {
            let revenue = format_revenue(record.revenue());
            writer
                .write_record([record.domain(), record.keyword(), revenue.as_str()])
                .map_err(output_error)?;
        }
        writer
            .flush()
            .map_err(|e| output_error(csv::Error::from(e)))?;

        tracing::info!(path = %path.display(), "report written");
        Ok(path)
    }
}

/// Revenue the way a float column prints: trailing zeros are dropped but
/// whole amounts keep one decimal.
pub fn format_revenue(revenue: Revenue) -> String {
    let revenue = revenue.normalize();
    if revenue.scale() == 0 {
        format!("{revenue}.0")
    } else {
        revenue.to_string()
    }
}
