//! Core coordinate mapping engine
//!
//! Block storage and lookup, strand-aware point mapping, multi-block
//! interval stitching, gap classification, and round-trip verification.
//! Everything in here works on 0-based coordinates and performs no I/O
//! beyond loading blocks files.

mod blocks;
mod error;
mod gaps;
mod index;
mod mapper;
mod roundtrip;
mod session;

pub use blocks::{
    detect_compression, parse_blocks_bytes, parse_blocks_file, parse_blocks_reader, Block,
    CompressionFormat,
};
pub use error::{BlocksError, BlocksResult, LiftoverError, PafError, Result};
pub use gaps::{collect_gaps, Gap};
pub use index::{locate, BlockMap};
pub use mapper::{map_point, stitch, Stitched, StitchFailure, Strand};
pub use roundtrip::{RoundTripReport, RoundTripValidator, RoundTripVerdict};
pub use session::GenomePair;
