//! External text interfaces
//!
//! Query-line parsing and TSV report writers. This is the only layer that
//! sees 1-based inclusive coordinates: conversion happens exactly here, at
//! parse time (subtract one) and format time (add one), never inside the
//! core engine.

pub mod blocks;
pub mod liftover;
pub mod paf;
pub mod query;
pub mod roundtrip;

pub use blocks::{invert_blocks_file, write_blocks, BLOCKS_HEADER};
pub use liftover::{
    convert_queries, format_gaps, lift_query, lift_report, LiftOutcome, LiftStats, LiftStatus,
    REPORT_HEADER,
};
pub use paf::{paf_record_blocks, paf_to_blocks_file};
pub use query::{parse_query_line, Query};
pub use roundtrip::{convert_roundtrip, roundtrip_report, RoundTripStats, ROUNDTRIP_HEADER};

/// 0-based → 1-based, applied only when formatting output
#[inline]
pub(crate) fn to_one_based(pos: u64) -> u64 {
    pos + 1
}

/// 1-based → 0-based, applied only when parsing input
#[inline]
pub(crate) fn to_zero_based(pos: u64) -> u64 {
    pos - 1
}
