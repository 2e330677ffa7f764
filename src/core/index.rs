//! Block index for source-coordinate lookups
//!
//! Blocks are grouped per source contig and kept in a `Vec` sorted by
//! source start. Blocks on one contig are assumed non-overlapping in
//! source coordinates (a documented precondition of the upstream block
//! generator, not verified here), so a plain binary search finds the
//! unique containing block in O(log n).

use crate::core::blocks::{parse_blocks_file, Block};
use crate::core::error::BlocksError;
use std::collections::HashMap;
use std::path::Path;

/// Immutable per-contig index of alignment blocks
///
/// Built once per (source genome, target genome) direction, then queried
/// arbitrarily often without mutation; shared references may be used from
/// any number of threads.
#[derive(Debug, Clone, Default)]
pub struct BlockMap {
    by_contig: HashMap<String, Vec<Block>>,
}

impl BlockMap {
    /// Build a map from parsed records, grouping by source contig and
    /// sorting each contig's blocks ascending by source start
    pub fn from_records(records: Vec<Block>) -> Self {
        let mut by_contig: HashMap<String, Vec<Block>> = HashMap::new();
        for block in records {
            by_contig
                .entry(block.source_contig.clone())
                .or_default()
                .push(block);
        }
        for blocks in by_contig.values_mut() {
            blocks.sort_by_key(|b| b.source_start);
        }
        Self { by_contig }
    }

    /// Load a map from a blocks TSV file (plain, gzip, or bzip2)
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, BlocksError> {
        let records = parse_blocks_file(path.as_ref())?;
        Ok(Self::from_records(records))
    }

    /// Sorted blocks for one source contig, if present
    pub fn contig_blocks(&self, contig: &str) -> Option<&[Block]> {
        self.by_contig.get(contig).map(|v| v.as_slice())
    }

    /// Whether a source contig has any blocks
    pub fn has_contig(&self, contig: &str) -> bool {
        self.by_contig.contains_key(contig)
    }

    /// All source contig names
    pub fn contigs(&self) -> impl Iterator<Item = &str> {
        self.by_contig.keys().map(|s| s.as_str())
    }

    /// Total number of blocks across all contigs
    pub fn total_blocks(&self) -> usize {
        self.by_contig.values().map(|v| v.len()).sum()
    }

    /// Index of the block containing `pos` on `contig`
    pub fn locate(&self, contig: &str, pos: u64) -> Option<usize> {
        locate(self.contig_blocks(contig)?, pos)
    }
}

/// Binary search for the block with `source_start <= pos < source_end`
///
/// Returns `None` if `pos` precedes the first block, follows the last,
/// or falls in an uncovered span between blocks.
pub fn locate(blocks: &[Block], pos: u64) -> Option<usize> {
    let mut lo = 0usize;
    let mut hi = blocks.len();
    while lo < hi {
        let mid = (lo + hi) / 2;
        let b = &blocks[mid];
        if pos < b.source_start {
            hi = mid;
        } else if pos >= b.source_end {
            lo = mid + 1;
        } else {
            return Some(mid);
        }
    }
    None
}
