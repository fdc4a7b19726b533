//! src/functions.rs
use crate::aggregate::RevenueTable;

pub type Revenue = rust_decimal::Decimal;

/// One hit-level log line, reduced to the two columns the report needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawInteraction {
    product_list: String,
    referrer: String,
}

impl RawInteraction {
    pub fn new(product_list: &str, referrer: &str) -> Self {
        RawInteraction {
            product_list: product_list.to_string(),
            referrer: referrer.to_string(),
        }
    }

    pub fn product_list(&self) -> &str {
        &self.product_list
    }

    pub fn referrer(&self) -> &str {
        &self.referrer
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AggregateKey {
    domain: String,
    keyword: String,
}

impl AggregateKey {
    pub fn new(domain: &str, keyword: &str) -> Self {
        AggregateKey {
            domain: domain.to_string(),
            keyword: keyword.to_string(),
        }
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }
}

/// A single (interaction, product entry) pair. `revenue` is `None` when the
/// entry carried no usable revenue field.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpandedRow {
    key: AggregateKey,
    revenue: Option<Revenue>,
}

impl ExpandedRow {
    pub fn new(key: AggregateKey, revenue: Option<Revenue>) -> Self {
        ExpandedRow { key, revenue }
    }

    pub fn key(&self) -> &AggregateKey {
        &self.key
    }

    pub fn revenue(&self) -> Option<Revenue> {
        self.revenue
    }

    pub fn into_parts(self) -> (AggregateKey, Option<Revenue>) {
        (self.key, self.revenue)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AggregateRecord {
    key: AggregateKey,
    revenue: Revenue,
}

impl AggregateRecord {
    pub fn new(key: AggregateKey, revenue: Revenue) -> Self {
        AggregateRecord { key, revenue }
    }

    pub fn key(&self) -> &AggregateKey {
        &self.key
    }

    pub fn domain(&self) -> &str {
        self.key.domain()
    }

    pub fn keyword(&self) -> &str {
        self.key.keyword()
    }

    pub fn revenue(&self) -> Revenue {
        self.revenue
    }
}

pub trait MapEmitter {
    fn emit(&mut self, row: ExpandedRow);
}

pub trait Mapper {
    type Emitter: MapEmitter;
    fn build(emitter: Self::Emitter) -> Self;
    fn map(&mut self, input: &RawInteraction);
    fn into_emitter(self) -> Self::Emitter;
}

pub trait ReduceEmitter {
    fn emit(&mut self, record: AggregateRecord);
}

pub trait Reducer {
    type Emitter: ReduceEmitter;
    fn build(emitter: Self::Emitter) -> Self;
    fn reduce<I: Iterator<Item = Revenue>>(&mut self, key: AggregateKey, values: I);
    fn into_emitter(self) -> Self::Emitter;
}

/// Keeps every emitted row, in emission order.
#[derive(Debug, Default)]
pub struct CollectingEmitter {
    rows: Vec<ExpandedRow>,
}

impl CollectingEmitter {
    pub fn rows(&self) -> &[ExpandedRow] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<ExpandedRow> {
        self.rows
    }
}

impl MapEmitter for CollectingEmitter {
    fn emit(&mut self, row: ExpandedRow) {
        self.rows.push(row);
    }
}

/// Map-side combiner: folds rows into a worker-local partial sum per key
/// instead of buffering them.
#[derive(Debug, Default)]
pub struct CombiningEmitter {
    table: RevenueTable,
    rows_seen: usize,
}

impl CombiningEmitter {
    pub fn rows_seen(&self) -> usize {
        self.rows_seen
    }

    pub fn into_table(self) -> RevenueTable {
        self.table
    }
}

impl MapEmitter for CombiningEmitter {
    fn emit(&mut self, row: ExpandedRow) {
        let (key, revenue) = row.into_parts();
        self.table.add(key, revenue);
        self.rows_seen += 1;
    }
}
