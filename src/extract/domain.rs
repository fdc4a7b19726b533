//! src/extract/domain.rs
use super::char_prefix;

pub const DOT_COM: &str = ".com";
pub const DOT_COM_LEN: usize = DOT_COM.len();
/// Prefix length kept when the referrer has no `.com` at all.
pub const DEGENERATE_DOMAIN_LEN: usize = 3;

const SCHEME_PREFIX: &str = "http://";
const WWW_PREFIX: &str = "www.";

/// Search engine domain of a referrer: everything up to and including the
/// first `.com`, minus one leading `http://` and then one leading `www.`.
///
/// Without a `.com` the result is the first [`DEGENERATE_DOMAIN_LEN`]
/// characters of the referrer, stripped the same way.
pub fn search_engine_domain(referrer: &str) -> String {
    let prefix = match referrer.find(DOT_COM) {
        Some(offset) => &referrer[..offset + DOT_COM_LEN],
        None => char_prefix(referrer, DEGENERATE_DOMAIN_LEN),
    };
    let prefix = prefix.strip_prefix(SCHEME_PREFIX).unwrap_or(prefix);
    let prefix = prefix.strip_prefix(WWW_PREFIX).unwrap_or(prefix);
    prefix.to_string()
}
