//! src/aggregate.rs
use crate::functions::{AggregateKey, AggregateRecord, ReduceEmitter, Revenue};
use std::collections::HashMap;
use std::collections::hash_map::Iter;

/// Revenue summed per (domain, keyword). A key only exists once something
/// has contributed to it, even if that contribution was an absent revenue.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RevenueTable {
    sums: HashMap<AggregateKey, Revenue>,
}

impl RevenueTable {
    pub fn add(&mut self, key: AggregateKey, revenue: Option<Revenue>) {
        let sum = self.sums.entry(key).or_insert(Revenue::ZERO);
        *sum = sum.saturating_add(revenue.unwrap_or(Revenue::ZERO));
    }

    pub fn get(&self, key: &AggregateKey) -> Option<Revenue> {
        self.sums.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.sums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sums.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, AggregateKey, Revenue> {
        self.sums.iter()
    }

    pub fn into_records(self) -> Vec<AggregateRecord> {
        self.sums
            .into_iter()
            .map(|(key, revenue)| AggregateRecord::new(key, revenue))
            .collect()
    }
}

impl IntoIterator for RevenueTable {
    type Item = (AggregateKey, Revenue);
    type IntoIter = std::collections::hash_map::IntoIter<AggregateKey, Revenue>;

    fn into_iter(self) -> Self::IntoIter {
        self.sums.into_iter()
    }
}

impl ReduceEmitter for RevenueTable {
    fn emit(&mut self, record: AggregateRecord) {
        let revenue = record.revenue();
        self.sums.insert(record.key().clone(), revenue);
    }
}
