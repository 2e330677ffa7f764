//! Blocks-TSV writing and set-level transforms
//!
//! Reading lives in `core::blocks`; this side writes block sets back out
//! in the same format and derives the B→A set from an A→B set, which is
//! the file the round-trip workflow consumes.

use crate::core::{parse_blocks_file, Block, LiftoverError};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Column header of a blocks TSV
pub const BLOCKS_HEADER: &str = "contigA\tstartA\tendA\tcontigB\tstartB\tendB\tstrand\tmapq";

/// Write blocks grouped by source contig, contigs in lexical order and
/// each contig's blocks ascending by source start
///
/// Returns the number of data rows written.
pub fn write_blocks<W: Write>(blocks: Vec<Block>, mut writer: W) -> io::Result<usize> {
    let mut by_contig: BTreeMap<String, Vec<Block>> = BTreeMap::new();
    for block in blocks {
        by_contig
            .entry(block.source_contig.clone())
            .or_default()
            .push(block);
    }

    writeln!(writer, "{}", BLOCKS_HEADER)?;
    let mut written = 0usize;
    for group in by_contig.values_mut() {
        group.sort_by_key(|b| b.source_start);
        for b in group.iter() {
            writeln!(
                writer,
                "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
                b.source_contig,
                b.source_start,
                b.source_end,
                b.target_contig,
                b.target_start,
                b.target_end,
                b.strand,
                b.mapq,
            )?;
            written += 1;
        }
    }
    Ok(written)
}

/// Invert an A→B blocks file into the matching B→A blocks file
pub fn invert_blocks_file(input: &Path, output: &Path) -> Result<usize, LiftoverError> {
    let inverted: Vec<Block> = parse_blocks_file(input)?
        .iter()
        .map(Block::inverted)
        .collect();
    let mut writer = BufWriter::new(File::create(output)?);
    let written = write_blocks(inverted, &mut writer)?;
    writer.flush()?;
    Ok(written)
}
