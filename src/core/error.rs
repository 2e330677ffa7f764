//! Error types for blocklift
//!
//! Fatal conditions only: per-query problems (bad input line, unknown
//! contig, unmappable position) are not errors here; they travel as
//! discriminated statuses all the way to the report formatter.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for blocklift operations
#[derive(Debug, Error)]
pub enum LiftoverError {
    /// Blocks file loading errors
    #[error("Blocks file error: {0}")]
    Blocks(#[from] BlocksError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// PAF conversion errors
    #[error("PAF error: {0}")]
    Paf(#[from] PafError),
}

/// Errors in PAF records during blocks conversion
///
/// These abort the run: a PAF file that minimap2 did not produce with
/// `-c` cannot yield a usable block set.
#[derive(Debug, Error)]
pub enum PafError {
    /// Fewer than the 9 leading mandatory fields
    #[error("PAF record at line {line} is truncated")]
    Truncated { line: usize },

    /// A coordinate field failed to parse
    #[error("PAF record at line {line} has a non-numeric coordinate")]
    BadNumber { line: usize },

    /// Strand field outside `{+,-}`
    #[error("PAF record at line {line} has an unknown strand")]
    BadStrand { line: usize },

    /// No `cg:Z` tag on the record
    #[error("PAF record at line {line} lacks a cg:Z CIGAR (run minimap2 with -c)")]
    MissingCigar { line: usize },

    /// `cg:Z` payload that is not a run of `<len><op>` segments, or whose
    /// segments walk off the target range
    #[error("PAF record at line {line} has a malformed cg:Z CIGAR")]
    MalformedCigar { line: usize },
}

/// Errors that can occur while loading a blocks file
#[derive(Debug, Error)]
pub enum BlocksError {
    /// File not found
    #[error("Blocks file not found: {0}")]
    FileNotFound(PathBuf),

    /// I/O error during reading or decompression
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for blocklift operations
pub type Result<T> = std::result::Result<T, LiftoverError>;

/// Result type alias for blocks loading
pub type BlocksResult<T> = std::result::Result<T, BlocksError>;
