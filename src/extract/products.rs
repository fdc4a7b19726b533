//! src/extract/products.rs
use crate::functions::Revenue;

pub const PRODUCT_SEPARATOR: char = ',';
pub const FIELD_SEPARATOR: char = ';';
/// Positional index of the revenue attribute inside a product entry.
pub const REVENUE_FIELD: usize = 3;

/// Revenue of every entry in a product list, in list order.
///
/// An empty list has no entries. An entry whose revenue field is missing
/// or not a finite number yields `None` rather than failing the record.
pub fn product_revenues(product_list: &str) -> Vec<Option<Revenue>> {
    if product_list.is_empty() {
        return Vec::new();
    }
    product_list
        .split(PRODUCT_SEPARATOR)
        .map(entry_revenue)
        .collect()
}

fn entry_revenue(entry: &str) -> Option<Revenue> {
    entry
        .split(FIELD_SEPARATOR)
        .nth(REVENUE_FIELD)
        .and_then(parse_revenue)
}

/// Exact decimal amount; anything that is not a plain decimal number
/// (including `NaN`, infinities and exponent notation) is absent.
pub fn parse_revenue(field: &str) -> Option<Revenue> {
    field.trim().parse::<Revenue>().ok()
}
