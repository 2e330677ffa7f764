//! Strand-aware point mapping and interval stitching
//!
//! Maps positions from the source assembly to the target assembly through
//! alignment blocks. A query interval is a pair of inclusive 0-based
//! endpoint positions; only the two endpoints are projected, so the result
//! describes the net span in the target. Discontinuities between the
//! traversed blocks are reported separately by [`crate::core::gaps`].

use crate::core::blocks::Block;
use crate::core::index::locate;

/// Strand orientation of a block's source→target correspondence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Strand {
    #[default]
    Plus,
    Minus,
}

impl Strand {
    /// Parse strand from char
    ///
    /// # Examples
    /// ```
    /// use blocklift::core::Strand;
    /// assert_eq!(Strand::from_char('+'), Some(Strand::Plus));
    /// assert_eq!(Strand::from_char('-'), Some(Strand::Minus));
    /// assert_eq!(Strand::from_char('.'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Strand::Plus),
            '-' => Some(Strand::Minus),
            _ => None,
        }
    }

    /// Parse strand from a whole field (exactly one strand char)
    pub fn from_field(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Strand::from_char(c),
            _ => None,
        }
    }

    /// Convert to char
    pub fn to_char(&self) -> char {
        match self {
            Strand::Plus => '+',
            Strand::Minus => '-',
        }
    }
}

impl std::fmt::Display for Strand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Map a single source position through a block
///
/// Requires `block.source_start <= pos < block.source_end`.
///
/// On `+` the offset into the block is preserved; on `-` it is mirrored
/// within the block, implementing reverse-complement coordinate
/// correspondence:
///
/// - `+`: `target_start + offset`
/// - `-`: `target_start + (len - 1 - offset)`
#[inline]
pub fn map_point(block: &Block, pos: u64) -> u64 {
    debug_assert!(pos >= block.source_start && pos < block.source_end);
    let offset = pos - block.source_start;
    match block.strand {
        Strand::Plus => block.target_start + offset,
        Strand::Minus => {
            let len = block.source_end - block.source_start;
            block.target_start + (len - 1 - offset)
        }
    }
}

/// Why an interval could not be stitched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StitchFailure {
    /// An endpoint falls outside every block on the contig
    Unmapped,
    /// The spanned blocks map to more than one target contig
    ContigMismatch,
    /// The spanned blocks disagree on strand
    StrandMismatch,
}

impl StitchFailure {
    /// Stable tag used in report statuses (`STITCH_FAILED_<tag>`)
    pub fn as_str(&self) -> &'static str {
        match self {
            StitchFailure::Unmapped => "UNMAPPED",
            StitchFailure::ContigMismatch => "CONTIG_MISMATCH",
            StitchFailure::StrandMismatch => "STRAND_MISMATCH",
        }
    }
}

/// Successful stitch: the projected target interval
#[derive(Debug, Clone, PartialEq)]
pub struct Stitched {
    /// Target contig shared by every spanned block
    pub contig: String,
    /// Smaller of the two projected endpoint positions (0-based)
    pub start: u64,
    /// Larger of the two projected endpoint positions (0-based, inclusive)
    pub end: u64,
    /// Strand shared by every spanned block
    pub strand: Strand,
    /// Indices of the first and last spanned block, in source order.
    /// Equal for a query contained in a single block. Lets callers run
    /// the gap classifier over exactly the stitched span.
    pub block_range: (usize, usize),
}

impl Stitched {
    /// Whether the query crossed more than one block
    pub fn spans_blocks(&self) -> bool {
        self.block_range.0 != self.block_range.1
    }
}

/// Stitch a source interval across one or more blocks
///
/// `start` and `end` are inclusive 0-based endpoint positions and may be
/// given in either order; `stitch(b, s, e) == stitch(b, e, s)` always.
///
/// When the endpoints fall in different blocks, every spanned block must
/// map to the same target contig and strand. Source gaps between spanned
/// blocks are tolerated (reported separately), and only the two original
/// endpoints are projected.
pub fn stitch(blocks: &[Block], start: u64, end: u64) -> Result<Stitched, StitchFailure> {
    let (start, end) = if start <= end { (start, end) } else { (end, start) };

    let idx_start = locate(blocks, start).ok_or(StitchFailure::Unmapped)?;
    let idx_end = locate(blocks, end).ok_or(StitchFailure::Unmapped)?;

    let first = &blocks[idx_start];

    if idx_start == idx_end {
        let a = map_point(first, start);
        let b = map_point(first, end);
        return Ok(Stitched {
            contig: first.target_contig.clone(),
            start: a.min(b),
            end: a.max(b),
            strand: first.strand,
            block_range: (idx_start, idx_end),
        });
    }

    let target_contig = &first.target_contig;
    let target_strand = first.strand;

    for block in &blocks[idx_start..=idx_end] {
        if block.target_contig != *target_contig {
            return Err(StitchFailure::ContigMismatch);
        }
        if block.strand != target_strand {
            return Err(StitchFailure::StrandMismatch);
        }
    }

    let a = map_point(first, start);
    let b = map_point(&blocks[idx_end], end);
    Ok(Stitched {
        contig: target_contig.clone(),
        start: a.min(b),
        end: a.max(b),
        strand: target_strand,
        block_range: (idx_start, idx_end),
    })
}
