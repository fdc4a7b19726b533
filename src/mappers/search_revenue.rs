//! src/mappers/search_revenue.rs
use crate::extract::{extract_fields, product_revenues};
use crate::functions::{AggregateKey, ExpandedRow, MapEmitter, Mapper, RawInteraction};

/// Expands one interaction into one row per product entry, all sharing the
/// (domain, keyword) extracted from the referrer.
pub fn expand(interaction: &RawInteraction) -> Vec<ExpandedRow> {
    let revenues = product_revenues(interaction.product_list());
    if revenues.is_empty() {
        return Vec::new();
    }
    let key = AggregateKey::from(extract_fields(interaction.referrer()));
    revenues
        .into_iter()
        .map(|revenue| ExpandedRow::new(key.clone(), revenue))
        .collect()
}

pub struct SearchRevenueMapper<E: MapEmitter> {
    emitter: E,
}

impl<E: MapEmitter> Mapper for SearchRevenueMapper<E> {
    type Emitter = E;

    fn build(emitter: E) -> Self {
        Self { emitter }
    }

    fn map(&mut self, input: &RawInteraction) {
        for row in expand(input) {
            self.emitter.emit(row);
        }
    }

    fn into_emitter(self) -> E {
        self.emitter
    }
}
