//! Structural-gap classification between stitched blocks
//!
//! When a query spans several blocks, the stitched target interval only
//! projects the two endpoints; whatever happens between consecutive
//! blocks is surfaced here as a list of [`Gap`] records. All ranges are
//! 0-based inclusive; the formatting layer converts to 1-based.

use crate::core::blocks::Block;
use crate::core::mapper::{map_point, Strand};

/// A structural discontinuity between two consecutively traversed blocks
///
/// A single adjacent pair may contribute zero or more of these, but never
/// both a `TargetGap` and a `TargetOverlap`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gap {
    /// Consecutive blocks map to different target contigs
    ContigChange { prev: String, next: String },
    /// Consecutive blocks disagree on strand
    StrandChange { prev: Strand, next: Strand },
    /// Uncovered source positions between two blocks
    SourceGap { size: u64, start: u64, end: u64 },
    /// Target positions skipped between the mapped block boundaries
    TargetGap { size: u64, start: u64, end: u64 },
    /// Target positions covered twice by the mapped block boundaries
    TargetOverlap { size: u64, start: u64, end: u64 },
}

/// Enumerate discontinuities for each adjacent pair in
/// `blocks[start_idx..=end_idx]`, in fixed traversal order
///
/// The target gap/overlap comparison is anchored to the strand of the
/// first spanned block: on `-` spans target coordinates progress opposite
/// to source coordinates, so the boundary comparison inverts.
pub fn collect_gaps(blocks: &[Block], start_idx: usize, end_idx: usize) -> Vec<Gap> {
    let mut gaps = Vec::new();
    let target_strand = blocks[start_idx].strand;

    for i in start_idx..end_idx {
        let cur = &blocks[i];
        let next = &blocks[i + 1];

        if cur.target_contig != next.target_contig {
            gaps.push(Gap::ContigChange {
                prev: cur.target_contig.clone(),
                next: next.target_contig.clone(),
            });
        }
        if cur.strand != next.strand {
            gaps.push(Gap::StrandChange {
                prev: cur.strand,
                next: next.strand,
            });
        }

        let source_gap = next.source_start.saturating_sub(cur.source_end);
        if source_gap > 0 {
            gaps.push(Gap::SourceGap {
                size: source_gap,
                start: cur.source_end,
                end: next.source_start - 1,
            });
        }

        // Last covered target position of `cur` vs. first of `next`
        let b_end = map_point(cur, cur.source_end - 1);
        let b_start_next = map_point(next, next.source_start);

        match target_strand {
            Strand::Plus => {
                let gap = b_start_next.saturating_sub(b_end + 1);
                let overlap = (b_end + 1).saturating_sub(b_start_next);
                if gap > 0 {
                    gaps.push(Gap::TargetGap {
                        size: gap,
                        start: b_end + 1,
                        end: b_start_next - 1,
                    });
                } else if overlap > 0 {
                    gaps.push(Gap::TargetOverlap {
                        size: overlap,
                        start: b_start_next,
                        end: b_end,
                    });
                }
            }
            Strand::Minus => {
                let gap = b_end.saturating_sub(b_start_next + 1);
                let overlap = (b_start_next + 1).saturating_sub(b_end);
                if gap > 0 {
                    gaps.push(Gap::TargetGap {
                        size: gap,
                        start: b_start_next + 1,
                        end: b_end - 1,
                    });
                } else if overlap > 0 {
                    gaps.push(Gap::TargetOverlap {
                        size: overlap,
                        start: b_start_next.min(b_end),
                        end: b_start_next.max(b_end),
                    });
                }
            }
        }
    }

    gaps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(
        s_start: u64,
        s_end: u64,
        t_contig: &str,
        t_start: u64,
        strand: Strand,
    ) -> Block {
        let len = s_end - s_start;
        Block {
            source_contig: "I".to_string(),
            source_start: s_start,
            source_end: s_end,
            target_contig: t_contig.to_string(),
            target_start: t_start,
            target_end: t_start + len,
            strand,
            mapq: 60,
        }
    }

    #[test]
    fn test_contiguous_blocks_no_gaps() {
        let blocks = vec![
            block(0, 100, "X", 0, Strand::Plus),
            block(100, 200, "X", 100, Strand::Plus),
        ];
        assert!(collect_gaps(&blocks, 0, 1).is_empty());
    }

    #[test]
    fn test_source_gap() {
        let blocks = vec![
            block(0, 100, "X", 0, Strand::Plus),
            block(110, 200, "X", 100, Strand::Plus),
        ];
        let gaps = collect_gaps(&blocks, 0, 1);
        assert_eq!(
            gaps,
            vec![Gap::SourceGap {
                size: 10,
                start: 100,
                end: 109
            }]
        );
    }

    #[test]
    fn test_target_gap_plus() {
        // source contiguous, target jumps 0..100 then 150..
        let blocks = vec![
            block(0, 100, "X", 0, Strand::Plus),
            block(100, 200, "X", 150, Strand::Plus),
        ];
        let gaps = collect_gaps(&blocks, 0, 1);
        assert_eq!(
            gaps,
            vec![Gap::TargetGap {
                size: 50,
                start: 100,
                end: 149
            }]
        );
    }

    #[test]
    fn test_target_overlap_plus() {
        // second block rewinds into the first block's target range
        let blocks = vec![
            block(0, 100, "X", 0, Strand::Plus),
            block(100, 200, "X", 80, Strand::Plus),
        ];
        let gaps = collect_gaps(&blocks, 0, 1);
        assert_eq!(
            gaps,
            vec![Gap::TargetOverlap {
                size: 20,
                start: 80,
                end: 99
            }]
        );
    }

    #[test]
    fn test_never_both_target_gap_and_overlap() {
        for t2 in [0u64, 50, 99, 100, 101, 150, 500] {
            let blocks = vec![
                block(0, 100, "X", 0, Strand::Plus),
                block(100, 200, "X", t2, Strand::Plus),
            ];
            let gaps = collect_gaps(&blocks, 0, 1);
            let has_gap = gaps.iter().any(|g| matches!(g, Gap::TargetGap { .. }));
            let has_ovl = gaps.iter().any(|g| matches!(g, Gap::TargetOverlap { .. }));
            assert!(!(has_gap && has_ovl), "t2={} produced both", t2);
        }
    }

    #[test]
    fn test_target_gap_minus() {
        // minus span: target progression runs backwards relative to source.
        // cur covers target [100,200), its last covered position is 100;
        // next covers [0,50), its first mapped position is 49.
        let blocks = vec![
            block(0, 100, "X", 100, Strand::Minus),
            block(100, 150, "X", 0, Strand::Minus),
        ];
        let gaps = collect_gaps(&blocks, 0, 1);
        assert_eq!(
            gaps,
            vec![Gap::TargetGap {
                size: 50,
                start: 50,
                end: 99
            }]
        );
    }

    #[test]
    fn test_target_contiguous_minus() {
        // cur: [100,200) reversed, last covered = 100; next: [50,100)
        // reversed, first mapped = 99 -> contiguous backwards, no gap
        let blocks = vec![
            block(0, 100, "X", 100, Strand::Minus),
            block(100, 150, "X", 50, Strand::Minus),
        ];
        assert!(collect_gaps(&blocks, 0, 1).is_empty());
    }

    #[test]
    fn test_contig_and_strand_change() {
        let blocks = vec![
            block(0, 100, "X", 0, Strand::Plus),
            block(100, 200, "Y", 100, Strand::Minus),
        ];
        let gaps = collect_gaps(&blocks, 0, 1);
        assert!(matches!(&gaps[0], Gap::ContigChange { prev, next }
            if prev == "X" && next == "Y"));
        assert!(matches!(&gaps[1], Gap::StrandChange { prev, next }
            if *prev == Strand::Plus && *next == Strand::Minus));
    }

    #[test]
    fn test_multiple_pairs_fixed_order() {
        let blocks = vec![
            block(0, 100, "X", 0, Strand::Plus),
            block(110, 200, "X", 100, Strand::Plus),
            block(220, 300, "X", 250, Strand::Plus),
        ];
        let gaps = collect_gaps(&blocks, 0, 2);
        // pair (0,1): source gap only; pair (1,2): source gap then target gap
        assert_eq!(gaps.len(), 3);
        assert!(matches!(gaps[0], Gap::SourceGap { size: 10, .. }));
        assert!(matches!(gaps[1], Gap::SourceGap { size: 20, .. }));
        assert!(matches!(gaps[2], Gap::TargetGap { size: 60, .. }));
    }
}
