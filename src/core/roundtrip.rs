//! Bidirectional round-trip verification
//!
//! Composes an A→B map with an independently built B→A map and checks
//! that the composition is the identity on the original interval. Used to
//! audit a pair of block sets that are supposed to invert each other.

use crate::core::gaps::{collect_gaps, Gap};
use crate::core::index::BlockMap;
use crate::core::mapper::{stitch, StitchFailure, Stitched};

/// Final verdict of a round-trip check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundTripVerdict {
    /// Both stages stitched and the composition is exactly the identity
    Pass,
    /// Both stages stitched but the result differs from the original
    /// (any coordinate or contig mismatch, even off-by-one)
    Fail,
    /// Queried contig absent from the A→B map
    NoContig,
    /// Stage-1 (A→B) stitch failed
    StitchFailed(StitchFailure),
    /// Stage-1 target contig absent from the B→A map
    NoContigBack,
    /// Stage-2 (B→A) stitch failed
    StitchFailedBack(StitchFailure),
}

/// Everything learned from one round-trip check
///
/// Gap lists are retained for diagnosis regardless of the verdict: stage-1
/// gaps whenever stage 1 stitched across blocks, stage-2 gaps whenever
/// stage 2 did.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundTripReport {
    /// Stage-1 (A→B) result, when stage 1 stitched
    pub forward: Option<Stitched>,
    /// Stage-2 (B→A) result, when stage 2 stitched
    pub back: Option<Stitched>,
    /// Discontinuities in the A→B span
    pub gaps_ab: Vec<Gap>,
    /// Discontinuities in the B→A span
    pub gaps_ba: Vec<Gap>,
    pub verdict: RoundTripVerdict,
}

impl RoundTripReport {
    fn failed(verdict: RoundTripVerdict) -> Self {
        Self {
            forward: None,
            back: None,
            gaps_ab: Vec::new(),
            gaps_ba: Vec::new(),
            verdict,
        }
    }
}

/// Composes a forward (A→B) and reverse (B→A) map
pub struct RoundTripValidator<'a> {
    forward: &'a BlockMap,
    reverse: &'a BlockMap,
}

impl<'a> RoundTripValidator<'a> {
    pub fn new(forward: &'a BlockMap, reverse: &'a BlockMap) -> Self {
        Self { forward, reverse }
    }

    /// Check one interval (inclusive 0-based endpoints, either order)
    ///
    /// Verdict is `Pass` iff stage 2 lands back on `contig` with the
    /// normalized interval exactly equal to `(start, end)`.
    pub fn check(&self, contig: &str, start: u64, end: u64) -> RoundTripReport {
        let (start, end) = if start <= end { (start, end) } else { (end, start) };

        let Some(blocks_ab) = self.forward.contig_blocks(contig) else {
            return RoundTripReport::failed(RoundTripVerdict::NoContig);
        };
        let fwd = match stitch(blocks_ab, start, end) {
            Ok(hit) => hit,
            Err(f) => return RoundTripReport::failed(RoundTripVerdict::StitchFailed(f)),
        };
        let gaps_ab = if fwd.spans_blocks() {
            collect_gaps(blocks_ab, fwd.block_range.0, fwd.block_range.1)
        } else {
            Vec::new()
        };

        let Some(blocks_ba) = self.reverse.contig_blocks(&fwd.contig) else {
            return RoundTripReport {
                forward: Some(fwd),
                back: None,
                gaps_ab,
                gaps_ba: Vec::new(),
                verdict: RoundTripVerdict::NoContigBack,
            };
        };
        let back = match stitch(blocks_ba, fwd.start, fwd.end) {
            Ok(hit) => hit,
            Err(f) => {
                return RoundTripReport {
                    forward: Some(fwd),
                    back: None,
                    gaps_ab,
                    gaps_ba: Vec::new(),
                    verdict: RoundTripVerdict::StitchFailedBack(f),
                }
            }
        };
        let gaps_ba = if back.spans_blocks() {
            collect_gaps(blocks_ba, back.block_range.0, back.block_range.1)
        } else {
            Vec::new()
        };

        // Exact identity required: equality, not overlap or containment
        let verdict = if back.contig == contig && back.start == start && back.end == end {
            RoundTripVerdict::Pass
        } else {
            RoundTripVerdict::Fail
        };

        RoundTripReport {
            forward: Some(fwd),
            back: Some(back),
            gaps_ab,
            gaps_ba,
            verdict,
        }
    }
}
