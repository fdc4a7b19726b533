//! src/reducers/mod.rs
use crate::aggregate::RevenueTable;
use crate::functions::{AggregateKey, Revenue};
use std::collections::BTreeMap;

mod adder;

pub use adder::RevenueAdder;

/// Groups the partial sums of every worker by key. Values keep the order of
/// `partials`, so a fixed worker order gives a fixed summation order.
pub fn shuffle(partials: Vec<RevenueTable>) -> BTreeMap<AggregateKey, Vec<Revenue>> {
    let mut grouped = BTreeMap::<AggregateKey, Vec<Revenue>>::new();
    for partial in partials {
        for (key, revenue) in partial {
            grouped.entry(key).or_default().push(revenue);
        }
    }
    grouped
}
