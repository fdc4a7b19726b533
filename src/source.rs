//! src/source.rs
use crate::error::PipelineError;
use crate::functions::RawInteraction;
use std::path::{Path, PathBuf};

/// Only referrers containing this literal reach the pipeline.
pub const SEARCH_PREDICATE: &str = "search";
pub const PRODUCT_LIST_COLUMN: &str = "product_list";
pub const REFERRER_COLUMN: &str = "referrer";

pub fn is_search_referral(interaction: &RawInteraction) -> bool {
    interaction.referrer().contains(SEARCH_PREDICATE)
}

/// Tab-separated hit-level data with a header row.
#[derive(Debug)]
pub struct TsvSource {
    path: PathBuf,
}

impl TsvSource {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, PipelineError> {
        let path = path.as_ref().to_path_buf();
        if !path.is_file() {
            return Err(PipelineError::InputNotFound(path));
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    #[tracing::instrument(name = "Read hit-level data", skip(self), fields(path = %self.path.display()))]
    pub fn read(&self) -> Result<Vec<RawInteraction>, PipelineError> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .flexible(true)
            .from_path(&self.path)
            .map_err(|source| self.read_error(source))?;

        let headers = reader
            .byte_headers()
            .map_err(|source| self.read_error(source))?
            .clone();
        let product_list_at = self.column_index(&headers, PRODUCT_LIST_COLUMN)?;
        let referrer_at = self.column_index(&headers, REFERRER_COLUMN)?;

        let mut interactions = Vec::new();
        let mut total = 0usize;
        let mut lossy = 0usize;
        for result in reader.byte_records() {
            let record = result.map_err(|source| PipelineError::InputParse {
                path: self.path.clone(),
                source,
            })?;
            total += 1;
            let fields =
                [product_list_at, referrer_at].map(|index| record.get(index).unwrap_or_default());
            if fields.iter().any(|field| std::str::from_utf8(field).is_err()) {
                lossy += 1;
                tracing::warn!(
                    line = record.position().map(|p| p.line()),
                    "replaced invalid UTF-8 in hit-level record"
                );
            }
            let [product_list, referrer] = fields.map(String::from_utf8_lossy);
            let interaction = RawInteraction::new(&product_list, &referrer);
            if is_search_referral(&interaction) {
                interactions.push(interaction);
            }
        }
        tracing::info!(
            total,
            lossy,
            search_referred = interactions.len(),
            "read hit-level records"
        );
        Ok(interactions)
    }

    fn column_index(
        &self,
        headers: &csv::ByteRecord,
        column: &'static str,
    ) -> Result<usize, PipelineError> {
        headers
            .iter()
            .position(|header| header == column.as_bytes())
            .ok_or_else(|| PipelineError::MissingColumn {
                path: self.path.clone(),
                column,
            })
    }

    fn read_error(&self, source: csv::Error) -> PipelineError {
        PipelineError::InputRead {
            path: self.path.clone(),
            source,
        }
    }
}
