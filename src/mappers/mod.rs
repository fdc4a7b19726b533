//! src/mappers/mod.rs
mod search_revenue;

pub use search_revenue::{SearchRevenueMapper, expand};
