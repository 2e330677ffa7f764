//! Blocklift - block-indexed genome coordinate liftover
//!
//! Projects point and interval coordinates from one genome assembly into
//! another using a precomputed set of collinear alignment blocks, with
//! multi-block interval stitching, structural-gap classification, and
//! bidirectional round-trip verification.
//!
//! # Example
//!
//! ```ignore
//! use blocklift::{BlockMap, stitch};
//!
//! // Load a blocks TSV (plain, .gz, or .bz2)
//! let map = BlockMap::from_path("A_to_B.blocks.tsv")?;
//!
//! // Stitch an interval (0-based inclusive endpoints)
//! let blocks = map.contig_blocks("I").unwrap();
//! let hit = stitch(blocks, 0, 149)?;
//! println!("{}:{}-{} {}", hit.contig, hit.start, hit.end, hit.strand);
//! ```
//!
//! The engine works purely on 0-based half-open block coordinates; the
//! `formats` module handles the 1-based inclusive external convention.

pub mod core;
pub mod formats;

// Re-export commonly used types
pub use core::{
    collect_gaps, locate, map_point, parse_blocks_bytes, parse_blocks_file, stitch, Block,
    BlockMap, BlocksError, Gap, GenomePair, LiftoverError, PafError, RoundTripReport,
    RoundTripValidator, RoundTripVerdict, Stitched, StitchFailure, Strand,
};
pub use formats::{lift_query, parse_query_line, LiftOutcome, LiftStatus, Query};
