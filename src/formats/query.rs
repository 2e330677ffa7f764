//! Query-line parsing
//!
//! One query per line, either `CONTIG:POS` (single 1-based position) or
//! `CONTIG:START-END` (1-based inclusive, endpoints in either order).
//! Anything else is a parse failure, reported per line as `BAD_INPUT`.

use crate::formats::to_zero_based;

/// A parsed query, already converted to 0-based inclusive endpoints
///
/// A point query has `start == end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub contig: String,
    /// Smaller endpoint position (0-based)
    pub start: u64,
    /// Larger endpoint position (0-based, inclusive)
    pub end: u64,
    /// Whether the input used the START-END form
    pub is_interval: bool,
}

fn parse_coordinate(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse::<u64>().ok()
}

/// Parse one query line; `None` means the line is unusable (`BAD_INPUT`)
///
/// Positions below 1 are rejected. Interval endpoints are normalized so
/// `start <= end` regardless of input order.
pub fn parse_query_line(line: &str) -> Option<Query> {
    let (contig, coords) = line.split_once(':')?;
    if contig.is_empty() || coords.contains(':') {
        return None;
    }

    if let Some(pos) = parse_coordinate(coords) {
        if pos < 1 {
            return None;
        }
        let pos = to_zero_based(pos);
        return Some(Query {
            contig: contig.to_string(),
            start: pos,
            end: pos,
            is_interval: false,
        });
    }

    let (a, b) = coords.split_once('-')?;
    let a = parse_coordinate(a)?;
    let b = parse_coordinate(b)?;
    if a < 1 || b < 1 {
        return None;
    }
    Some(Query {
        contig: contig.to_string(),
        start: to_zero_based(a.min(b)),
        end: to_zero_based(a.max(b)),
        is_interval: true,
    })
}
