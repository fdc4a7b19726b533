//! src/extract/mod.rs
//! Marker-based extraction of report fields from raw log columns. These are
//! narrow heuristics over fixed literals, not URL or query-string parsers.
use crate::functions::AggregateKey;

pub mod domain;
pub mod keyword;
pub mod products;

pub use domain::search_engine_domain;
pub use keyword::search_keyword;
pub use products::product_revenues;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedFields {
    pub domain: String,
    pub keyword: String,
}

pub fn extract_fields(referrer: &str) -> ExtractedFields {
    ExtractedFields {
        domain: search_engine_domain(referrer),
        keyword: search_keyword(referrer),
    }
}

impl From<ExtractedFields> for AggregateKey {
    fn from(fields: ExtractedFields) -> Self {
        AggregateKey::new(&fields.domain, &fields.keyword)
    }
}

/// First `n` characters of `s`, or all of it when shorter.
fn char_prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((offset, _)) => &s[..offset],
        None => s,
    }
}

/// `s` without its first `n` characters; empty when `s` is shorter.
fn skip_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((offset, _)) => &s[offset..],
        None => "",
    }
}
