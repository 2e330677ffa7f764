//! PAF to blocks conversion
//!
//! Turns minimap2 PAF alignments into a blocks TSV. Each record must
//! carry a `cg:Z` CIGAR (minimap2 `-c`): match segments become blocks,
//! insertions advance the query coordinate, deletions advance the target
//! coordinate. On `-` records the target side is walked backwards from
//! the record's target end.

use crate::core::{Block, LiftoverError, PafError, Strand};
use crate::formats::blocks::write_blocks;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// `(length, op)` CIGAR segments from a `cg:Z` payload
fn parse_cigar(cg: &str, line: usize) -> Result<Vec<(u64, u8)>, PafError> {
    let mut ops = Vec::new();
    let mut num: u64 = 0;
    let mut have_num = false;
    for byte in cg.bytes() {
        if byte.is_ascii_digit() {
            num = num * 10 + u64::from(byte - b'0');
            have_num = true;
        } else {
            if !have_num {
                return Err(PafError::MalformedCigar { line });
            }
            ops.push((num, byte));
            num = 0;
            have_num = false;
        }
    }
    // trailing digits without an op char
    if have_num {
        return Err(PafError::MalformedCigar { line });
    }
    Ok(ops)
}

/// Convert one PAF record (1-based `line` for error reporting) into its
/// match blocks
///
/// Only `M` segments emit blocks; `I` consumes query, `D` consumes
/// target, anything else is ignored. Zero-length segments emit nothing.
pub fn paf_record_blocks(record: &str, line: usize) -> Result<Vec<Block>, PafError> {
    let fields: Vec<&str> = record.split('\t').collect();
    if fields.len() < 9 {
        return Err(PafError::Truncated { line });
    }

    let parse_coord = |s: &str| s.parse::<u64>().map_err(|_| PafError::BadNumber { line });
    let q_name = fields[0];
    let q_start = parse_coord(fields[2])?;
    let strand = Strand::from_field(fields[4]).ok_or(PafError::BadStrand { line })?;
    let t_name = fields[5];
    let t_start = parse_coord(fields[7])?;
    let t_end = parse_coord(fields[8])?;
    let mapq: u32 = fields
        .get(11)
        .and_then(|f| f.parse().ok())
        .unwrap_or(0);
    let cg = fields
        .iter()
        .skip(12)
        .find_map(|f| f.strip_prefix("cg:Z:"))
        .ok_or(PafError::MissingCigar { line })?;

    let make = |q: u64, t: u64, len: u64| Block {
        source_contig: q_name.to_string(),
        source_start: q,
        source_end: q + len,
        target_contig: t_name.to_string(),
        target_start: t,
        target_end: t + len,
        strand,
        mapq,
    };

    let mut blocks = Vec::new();
    let mut qa = q_start;
    match strand {
        Strand::Plus => {
            let mut ta = t_start;
            for (len, op) in parse_cigar(cg, line)? {
                match op {
                    b'M' => {
                        if len > 0 {
                            blocks.push(make(qa, ta, len));
                        }
                        qa += len;
                        ta += len;
                    }
                    b'I' => qa += len,
                    b'D' => ta += len,
                    _ => {}
                }
            }
        }
        Strand::Minus => {
            // walk the target backwards from the record's target end
            let mut ta = t_end;
            let step_back = |ta: u64, len: u64| {
                ta.checked_sub(len).ok_or(PafError::MalformedCigar { line })
            };
            for (len, op) in parse_cigar(cg, line)? {
                match op {
                    b'M' => {
                        ta = step_back(ta, len)?;
                        if len > 0 {
                            blocks.push(make(qa, ta, len));
                        }
                        qa += len;
                    }
                    b'I' => qa += len,
                    b'D' => ta = step_back(ta, len)?,
                    _ => {}
                }
            }
        }
    }
    Ok(blocks)
}

/// Convert a whole PAF file into a blocks TSV
///
/// Blank lines are skipped; any malformed record aborts the conversion.
/// Returns the number of blocks written.
pub fn paf_to_blocks_file(input: &Path, output: &Path) -> Result<usize, LiftoverError> {
    let reader = BufReader::new(File::open(input)?);
    let mut blocks = Vec::new();
    for (idx, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        let trimmed = line.trim_end_matches(['\r', '\n']);
        if trimmed.trim().is_empty() {
            continue;
        }
        blocks.extend(paf_record_blocks(trimmed, idx + 1)?);
    }

    let mut writer = BufWriter::new(File::create(output)?);
    let written = write_blocks(blocks, &mut writer)?;
    writer.flush()?;
    Ok(written)
}
