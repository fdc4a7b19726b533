//! src/reducers/adder.rs
use crate::functions::{AggregateKey, AggregateRecord, ReduceEmitter, Reducer, Revenue};

pub struct RevenueAdder<E: ReduceEmitter> {
    emitter: E,
}

impl<E: ReduceEmitter> Reducer for RevenueAdder<E> {
    type Emitter = E;

    fn build(emitter: E) -> Self {
        Self { emitter }
    }

    fn reduce<I: Iterator<Item = Revenue>>(&mut self, key: AggregateKey, values: I) {
        let revenue = values.fold(Revenue::ZERO, |total, value| total.saturating_add(value));
        self.emitter.emit(AggregateRecord::new(key, revenue));
    }

    fn into_emitter(self) -> E {
        self.emitter
    }
}
