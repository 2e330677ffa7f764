//! Single-direction liftover report
//!
//! One TSV row per query line, 1-based inclusive on the outside. Every
//! per-line problem becomes a status in the row; nothing aborts the run.

use crate::core::{collect_gaps, BlockMap, Gap, LiftoverError, StitchFailure, Stitched};
use crate::formats::query::{parse_query_line, Query};
use crate::formats::to_one_based;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Column header of the single-direction report
pub const REPORT_HEADER: &str =
    "contigA\tstartA\tendA\tcontigB\tstartB\tendB\tstrand\tstatus\tgaps";

/// Per-row status of a liftover attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiftStatus {
    /// Query fell within a single block
    Ok,
    /// Query spanned several blocks, no discontinuities between them
    StitchedOk,
    /// Query spanned several blocks with discontinuities (see gaps column)
    StitchedWithGaps,
    /// Stitching failed
    StitchFailed(StitchFailure),
    /// Queried contig absent from the map
    NoContig,
    /// The direction's block map is not loaded
    NoBlocks,
    /// Unparseable query line
    BadInput,
}

impl LiftStatus {
    /// Status column text
    pub fn label(&self) -> String {
        match self {
            LiftStatus::Ok => "OK".to_string(),
            LiftStatus::StitchedOk => "STITCHED_OK".to_string(),
            LiftStatus::StitchedWithGaps => "STITCHED_WITH_GAPS".to_string(),
            LiftStatus::StitchFailed(reason) => format!("STITCH_FAILED_{}", reason.as_str()),
            LiftStatus::NoContig => "NO_CONTIG".to_string(),
            LiftStatus::NoBlocks => "NO_BLOCKS".to_string(),
            LiftStatus::BadInput => "BAD_INPUT".to_string(),
        }
    }

    /// Whether the row carries a mapped target interval
    pub fn is_mapped(&self) -> bool {
        matches!(
            self,
            LiftStatus::Ok | LiftStatus::StitchedOk | LiftStatus::StitchedWithGaps
        )
    }
}

/// Result of lifting one query against one map
#[derive(Debug, Clone, PartialEq)]
pub struct LiftOutcome {
    pub status: LiftStatus,
    /// Present iff `status.is_mapped()`
    pub stitched: Option<Stitched>,
    /// Discontinuities in the spanned blocks; empty for single-block hits
    pub gaps: Vec<Gap>,
}

impl LiftOutcome {
    fn failed(status: LiftStatus) -> Self {
        Self {
            status,
            stitched: None,
            gaps: Vec::new(),
        }
    }
}

/// Lift one parsed query through a loaded map
pub fn lift_query(map: &BlockMap, query: &Query) -> LiftOutcome {
    let Some(blocks) = map.contig_blocks(&query.contig) else {
        return LiftOutcome::failed(LiftStatus::NoContig);
    };

    match crate::core::stitch(blocks, query.start, query.end) {
        Err(reason) => LiftOutcome::failed(LiftStatus::StitchFailed(reason)),
        Ok(hit) => {
            let gaps = if hit.spans_blocks() {
                collect_gaps(blocks, hit.block_range.0, hit.block_range.1)
            } else {
                Vec::new()
            };
            let status = if !hit.spans_blocks() {
                LiftStatus::Ok
            } else if gaps.is_empty() {
                LiftStatus::StitchedOk
            } else {
                LiftStatus::StitchedWithGaps
            };
            LiftOutcome {
                status,
                stitched: Some(hit),
                gaps,
            }
        }
    }
}

/// Encode a gap list for the `gaps` column
///
/// `; `-joined, ranges converted to 1-based inclusive, e.g.
/// `GAP_A:10@A:101→110`.
pub fn format_gaps(gaps: &[Gap]) -> String {
    gaps.iter()
        .map(|g| match g {
            Gap::SourceGap { size, start, end } => {
                format!("GAP_A:{}@A:{}→{}", size, to_one_based(*start), to_one_based(*end))
            }
            Gap::TargetGap { size, start, end } => {
                format!("GAP_B:{}@B:{}→{}", size, to_one_based(*start), to_one_based(*end))
            }
            Gap::TargetOverlap { size, start, end } => {
                format!(
                    "OVERLAP_B:{}@B:{}→{}",
                    size,
                    to_one_based(*start),
                    to_one_based(*end)
                )
            }
            Gap::ContigChange { prev, next } => {
                format!("CONTIG_CHANGE@B:{}→{}", prev, next)
            }
            Gap::StrandChange { prev, next } => {
                format!("STRAND_CHANGE@B:{}→{}", prev, next)
            }
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// Render one report row (without trailing newline)
fn render_row(query: Option<&Query>, outcome: &LiftOutcome) -> String {
    let (contig_a, start_a, end_a) = match query {
        Some(q) => (
            q.contig.clone(),
            to_one_based(q.start).to_string(),
            to_one_based(q.end).to_string(),
        ),
        None => (String::new(), String::new(), String::new()),
    };

    match &outcome.stitched {
        Some(hit) => format!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            contig_a,
            start_a,
            end_a,
            hit.contig,
            to_one_based(hit.start),
            to_one_based(hit.end),
            hit.strand,
            outcome.status.label(),
            format_gaps(&outcome.gaps),
        ),
        None => format!(
            "{}\t{}\t{}\t\t\t\t\t{}\t",
            contig_a,
            start_a,
            end_a,
            outcome.status.label(),
        ),
    }
}

/// Counters reported after a run
#[derive(Debug, Clone, Default)]
pub struct LiftStats {
    pub total: usize,
    pub mapped: usize,
    pub with_gaps: usize,
    pub failed: usize,
}

/// Lift every query line from `reader`, writing the TSV report to `writer`
///
/// `map` is `None` when the direction is not loaded; every query line then
/// gets a `NO_BLOCKS` row. Blank lines are skipped.
pub fn lift_report<R: BufRead, W: Write>(
    map: Option<&BlockMap>,
    reader: R,
    mut writer: W,
) -> io::Result<LiftStats> {
    let mut stats = LiftStats::default();
    writeln!(writer, "{}", REPORT_HEADER)?;

    for line_result in reader.lines() {
        let line = line_result?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        stats.total += 1;

        let Some(query) = parse_query_line(line) else {
            stats.failed += 1;
            writeln!(
                writer,
                "{}",
                render_row(None, &LiftOutcome::failed(LiftStatus::BadInput))
            )?;
            continue;
        };

        let outcome = match map {
            None => LiftOutcome::failed(LiftStatus::NoBlocks),
            Some(map) => lift_query(map, &query),
        };

        if outcome.status.is_mapped() {
            stats.mapped += 1;
            if outcome.status == LiftStatus::StitchedWithGaps {
                stats.with_gaps += 1;
            }
        } else {
            stats.failed += 1;
        }
        writeln!(writer, "{}", render_row(Some(&query), &outcome))?;
    }

    Ok(stats)
}

/// File-based front-end over [`lift_report`]
pub fn convert_queries(
    input: &Path,
    output: &Path,
    map: Option<&BlockMap>,
) -> Result<LiftStats, LiftoverError> {
    let reader = BufReader::new(File::open(input)?);
    let mut writer = BufWriter::new(File::create(output)?);
    let stats = lift_report(map, reader, &mut writer)?;
    writer.flush()?;
    Ok(stats)
}
