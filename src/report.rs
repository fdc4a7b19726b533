//! src/report.rs
use crate::aggregate::RevenueTable;
use crate::functions::AggregateRecord;
use std::cmp::Ordering;

/// Drops self-referrals and orders the rest by revenue, highest first.
#[tracing::instrument(name = "Filter and sort report", skip(table), fields(keys = table.len()))]
pub fn finalize(table: RevenueTable, excluded_domain: &str) -> Vec<AggregateRecord> {
    let mut records: Vec<AggregateRecord> = table
        .into_records()
        .into_iter()
        .filter(|record| record.domain() != excluded_domain)
        .collect();
    records.sort_by(by_revenue_desc);
    records
}

/// Revenue descending; equal revenues fall back to domain, then keyword,
/// both ascending.
pub fn by_revenue_desc(a: &AggregateRecord, b: &AggregateRecord) -> Ordering {
    b.revenue()
        .cmp(&a.revenue())
        .then_with(|| a.domain().cmp(b.domain()))
        .then_with(|| a.keyword().cmp(b.keyword()))
}
