//! src/mapreduce.rs
use crate::aggregate::RevenueTable;
use crate::configuration::Settings;
use crate::error::PipelineError;
use crate::functions::{AggregateRecord, RawInteraction, Reducer};
use crate::master::Master;
use crate::reducers::{RevenueAdder, shuffle};
use crate::report;
use crate::splitter::InputSplitter;
use crate::worker::Worker;
use uuid::Uuid;

/// One search keyword performance run over an in-memory batch of records.
#[derive(Debug, Clone)]
pub struct MapReduce {
    job_id: Uuid,
    workers: usize,
    excluded_domain: String,
}

impl MapReduce {
    pub fn new(settings: &Settings) -> Self {
        Self::with_workers(
            settings.cluster.worker_count(),
            &settings.report.excluded_domain,
        )
    }

    pub fn with_workers(workers: usize, excluded_domain: &str) -> Self {
        MapReduce {
            job_id: Uuid::new_v4(),
            workers: workers.max(1),
            excluded_domain: excluded_domain.to_string(),
        }
    }

    pub fn job_id(&self) -> &Uuid {
        &self.job_id
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn excluded_domain(&self) -> &str {
        &self.excluded_domain
    }

    /// Map with per-worker combining, then reduce the partial sums into
    /// one table keyed by (domain, keyword).
    #[tracing::instrument(name = "Aggregate revenue", skip_all, fields(job_id = %self.job_id, records = records.len()))]
    pub async fn aggregate(
        &self,
        records: Vec<RawInteraction>,
    ) -> Result<RevenueTable, PipelineError> {
        let splits = InputSplitter::new(self.workers).split(records);
        let workers = (0..self.workers).map(|_| Worker::new()).collect();
        let mut master = Master::new(workers, splits);
        let partials = master.run().await?;

        let mut adder = RevenueAdder::build(RevenueTable::default());
        for (key, values) in shuffle(partials) {
            adder.reduce(key, values.into_iter());
        }
        let table = adder.into_emitter();
        tracing::info!(keys = table.len(), "aggregated revenue by search engine domain and keyword");
        Ok(table)
    }

    #[tracing::instrument(name = "Run MapReduce", skip_all, fields(job_id = %self.job_id))]
    pub async fn run(
        &self,
        records: Vec<RawInteraction>,
    ) -> Result<Vec<AggregateRecord>, PipelineError> {
        let table = self.aggregate(records).await?;
        Ok(report::finalize(table, &self.excluded_domain))
    }
}
