//! Round-trip (A→B→A) report
//!
//! One TSV row per query line showing the forward interval, the interval
//! mapped back, the verdict, and both directions' gap lists.

use crate::core::{BlockMap, LiftoverError, RoundTripReport, RoundTripValidator, RoundTripVerdict};
use crate::formats::liftover::format_gaps;
use crate::formats::query::{parse_query_line, Query};
use crate::formats::to_one_based;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Column header of the round-trip report
pub const ROUNDTRIP_HEADER: &str = "contigA\tstartA\tendA\tcontigB\tstartB\tendB\t\
                                    contigA2\tstartA2\tendA2\tstatus\tgapsAB\tgapsBA";

fn verdict_label(verdict: &RoundTripVerdict) -> String {
    match verdict {
        RoundTripVerdict::Pass => "PASS".to_string(),
        RoundTripVerdict::Fail => "FAIL".to_string(),
        RoundTripVerdict::NoContig => "NO_CONTIG".to_string(),
        RoundTripVerdict::StitchFailed(reason) => {
            format!("STITCH_FAILED_{}", reason.as_str())
        }
        RoundTripVerdict::NoContigBack => "NO_CONTIG_BA".to_string(),
        RoundTripVerdict::StitchFailedBack(reason) => {
            format!("STITCH_FAILED_BA_{}", reason.as_str())
        }
    }
}

/// Render one round-trip row (without trailing newline)
fn render_row(query: &Query, report: &RoundTripReport) -> String {
    let (contig_b, start_b, end_b) = match &report.forward {
        Some(fwd) => (
            fwd.contig.clone(),
            to_one_based(fwd.start).to_string(),
            to_one_based(fwd.end).to_string(),
        ),
        None => (String::new(), String::new(), String::new()),
    };
    let (contig_a2, start_a2, end_a2) = match &report.back {
        Some(back) => (
            back.contig.clone(),
            to_one_based(back.start).to_string(),
            to_one_based(back.end).to_string(),
        ),
        None => (String::new(), String::new(), String::new()),
    };

    format!(
        "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
        query.contig,
        to_one_based(query.start),
        to_one_based(query.end),
        contig_b,
        start_b,
        end_b,
        contig_a2,
        start_a2,
        end_a2,
        verdict_label(&report.verdict),
        format_gaps(&report.gaps_ab),
        format_gaps(&report.gaps_ba),
    )
}

/// Counters reported after a round-trip run
#[derive(Debug, Clone, Default)]
pub struct RoundTripStats {
    pub total: usize,
    pub pass: usize,
    pub fail: usize,
    /// Rows that never reached a verdict (bad input, missing contig or
    /// map, stitch failure in either stage)
    pub errors: usize,
}

/// Check every query line from `reader`, writing the TSV report to `writer`
///
/// Either direction may be absent (`None`); query lines then get
/// `NO_BLOCKS` rows. Blank lines are skipped.
pub fn roundtrip_report<R: BufRead, W: Write>(
    forward: Option<&BlockMap>,
    reverse: Option<&BlockMap>,
    reader: R,
    mut writer: W,
) -> io::Result<RoundTripStats> {
    let mut stats = RoundTripStats::default();
    writeln!(writer, "{}", ROUNDTRIP_HEADER)?;

    let validator = match (forward, reverse) {
        (Some(f), Some(r)) => Some(RoundTripValidator::new(f, r)),
        _ => None,
    };

    for line_result in reader.lines() {
        let line = line_result?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        stats.total += 1;

        let Some(query) = parse_query_line(line) else {
            stats.errors += 1;
            writeln!(writer, "\t\t\t\t\t\t\t\t\tBAD_INPUT\t\t")?;
            continue;
        };

        let Some(validator) = &validator else {
            stats.errors += 1;
            writeln!(
                writer,
                "{}\t{}\t{}\t\t\t\t\t\t\tNO_BLOCKS\t\t",
                query.contig,
                to_one_based(query.start),
                to_one_based(query.end),
            )?;
            continue;
        };

        let report = validator.check(&query.contig, query.start, query.end);
        match report.verdict {
            RoundTripVerdict::Pass => stats.pass += 1,
            RoundTripVerdict::Fail => stats.fail += 1,
            _ => stats.errors += 1,
        }
        writeln!(writer, "{}", render_row(&query, &report))?;
    }

    Ok(stats)
}

/// File-based front-end over [`roundtrip_report`]
pub fn convert_roundtrip(
    input: &Path,
    output: &Path,
    forward: Option<&BlockMap>,
    reverse: Option<&BlockMap>,
) -> Result<RoundTripStats, LiftoverError> {
    let reader = BufReader::new(File::open(input)?);
    let mut writer = BufWriter::new(File::create(output)?);
    let stats = roundtrip_report(forward, reverse, reader, &mut writer)?;
    writer.flush()?;
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse_blocks_bytes;

    const HEADER: &str = "contigA\tstartA\tendA\tcontigB\tstartB\tendB\tstrand\tmapq\n";

    fn map_of(rows: &str) -> BlockMap {
        let data = format!("{HEADER}{rows}");
        BlockMap::from_records(parse_blocks_bytes(data.as_bytes()).unwrap())
    }

    fn run(forward: Option<&BlockMap>, reverse: Option<&BlockMap>, input: &str) -> Vec<String> {
        let mut out = Vec::new();
        roundtrip_report(forward, reverse, input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_pass_row() {
        let ab = map_of("I\t0\t100\tII\t5000\t5100\t+\t60\n");
        let ba = map_of("II\t5000\t5100\tI\t0\t100\t+\t60\n");
        let rows = run(Some(&ab), Some(&ba), "I:11-41\n");
        assert_eq!(rows[0], ROUNDTRIP_HEADER);
        assert_eq!(
            rows[1],
            "I\t11\t41\tII\t5011\t5041\tI\t11\t41\tPASS\t\t"
        );
    }

    #[test]
    fn test_fail_row_keeps_intervals() {
        let ab = map_of("I\t0\t100\tII\t5000\t5100\t+\t60\n");
        let ba = map_of("II\t5000\t5100\tI\t1\t101\t+\t60\n");
        let rows = run(Some(&ab), Some(&ba), "I:11-41\n");
        assert_eq!(
            rows[1],
            "I\t11\t41\tII\t5011\t5041\tI\t12\t42\tFAIL\t\t"
        );
    }

    #[test]
    fn test_no_contig_rows() {
        let ab = map_of("I\t0\t100\tII\t5000\t5100\t+\t60\n");
        let ba = map_of("III\t0\t100\tI\t0\t100\t+\t60\n");
        let rows = run(Some(&ab), Some(&ba), "chrZ:5\nI:10\n");
        assert_eq!(rows[1], "chrZ\t5\t5\t\t\t\t\t\t\tNO_CONTIG\t\t");
        // forward succeeds but II is absent from the B→A map
        assert_eq!(rows[2], "I\t10\t10\tII\t5010\t5010\t\t\t\tNO_CONTIG_BA\t\t");
    }

    #[test]
    fn test_stage2_failure_keeps_forward_gaps() {
        let ab = map_of(
            "I\t0\t100\tX\t0\t100\t+\t60\n\
             I\t110\t200\tX\t100\t190\t+\t60\n",
        );
        // B→A covers only part of X: the forward interval won't stitch back
        let ba = map_of("X\t0\t50\tI\t0\t50\t+\t60\n");
        let rows = run(Some(&ab), Some(&ba), "I:1-150\n");
        assert_eq!(
            rows[1],
            "I\t1\t150\tX\t1\t140\t\t\t\tSTITCH_FAILED_BA_UNMAPPED\tGAP_A:10@A:101→110\t"
        );
    }

    #[test]
    fn test_bad_input_and_no_blocks() {
        let ab = map_of("I\t0\t100\tII\t0\t100\t+\t60\n");
        let rows = run(Some(&ab), None, "nonsense\nI:5\n");
        assert_eq!(rows[1], "\t\t\t\t\t\t\t\t\tBAD_INPUT\t\t");
        assert_eq!(rows[2], "I\t5\t5\t\t\t\t\t\t\tNO_BLOCKS\t\t");
    }

    #[test]
    fn test_stats() {
        let ab = map_of("I\t0\t100\tII\t5000\t5100\t+\t60\n");
        let ba = map_of("II\t5000\t5100\tI\t0\t100\t+\t60\n");
        let mut out = Vec::new();
        let stats = roundtrip_report(
            Some(&ab),
            Some(&ba),
            "I:10\nchrZ:1\nbad\n".as_bytes(),
            &mut out,
        )
        .unwrap();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.pass, 1);
        assert_eq!(stats.fail, 0);
        assert_eq!(stats.errors, 2);
    }
}
