//! src/extract/keyword.rs
use super::skip_chars;

pub const MARKERS: [&str; 3] = ["q=", "p=", "k="];
pub const MARKER_LEN: usize = 2;

const PARAM_SEPARATOR: char = '&';

/// Search keyword of a referrer.
///
/// The first occurrence of each of `q=`, `p=` and `k=` is located and the
/// rightmost of those wins. The keyword runs from just after that marker to
/// the next `&` (or the end), with every `+` turned into a space. With no
/// marker present the keyword starts [`MARKER_LEN`] characters into the
/// referrer.
pub fn search_keyword(referrer: &str) -> String {
    let tail = match marker_offset(referrer) {
        Some(offset) => &referrer[offset + MARKER_LEN..],
        None => skip_chars(referrer, MARKER_LEN),
    };
    let keyword = match tail.find(PARAM_SEPARATOR) {
        Some(end) => &tail[..end],
        None => tail,
    };
    keyword.replace('+', " ")
}

fn marker_offset(referrer: &str) -> Option<usize> {
    MARKERS
        .iter()
        .filter_map(|marker| referrer.find(marker))
        .max()
}
