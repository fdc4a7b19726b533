//! src/splitter.rs
use crate::functions::RawInteraction;
use std::sync::Arc;
use uuid::Uuid;

/// A contiguous slice of the input handed to one map task.
#[derive(Clone, Debug)]
pub struct InputSplit {
    id: Uuid,
    records: Arc<[RawInteraction]>,
}

impl InputSplit {
    pub fn new(records: Vec<RawInteraction>) -> Self {
        InputSplit {
            id: Uuid::new_v4(),
            records: records.into(),
        }
    }

    pub fn id(&self) -> &Uuid {
        &self.id
    }

    pub fn records(&self) -> &[RawInteraction] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

pub struct InputSplitter {
    max_splits: usize,
}

impl InputSplitter {
    pub fn new(max_splits: usize) -> Self {
        InputSplitter {
            max_splits: max_splits.max(1),
        }
    }

    /// Cuts `records` into at most `max_splits` splits of near-equal size,
    /// preserving input order. No records, no splits.
    #[tracing::instrument(name = "Split inputs", skip_all, fields(records = records.len()))]
    pub fn split(&self, records: Vec<RawInteraction>) -> Vec<InputSplit> {
        if records.is_empty() {
            return Vec::new();
        }
        let split_size = records.len().div_ceil(self.max_splits);
        let mut splits = Vec::with_capacity(self.max_splits);
        let mut remaining = records;
        while !remaining.is_empty() {
            let rest = remaining.split_off(split_size.min(remaining.len()));
            splits.push(InputSplit::new(remaining));
            remaining = rest;
        }
        tracing::debug!("created {} input splits of up to {split_size} records", splits.len());
        splits
    }
}
