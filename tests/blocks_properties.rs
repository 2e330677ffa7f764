//! Property-based tests for blocks parsing and block lookup

use blocklift::core::{locate, parse_blocks_bytes, Block, BlockMap, Strand};
use proptest::prelude::*;

/// Build a contig's worth of sorted, non-overlapping blocks from
/// (leading gap, length) pairs
fn blocks_from_layout(layout: &[(u64, u64)]) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut cursor = 0u64;
    let mut target = 0u64;
    for &(gap, len) in layout {
        let start = cursor + gap;
        blocks.push(Block {
            source_contig: "I".to_string(),
            source_start: start,
            source_end: start + len,
            target_contig: "X".to_string(),
            target_start: target,
            target_end: target + len,
            strand: Strand::Plus,
            mapq: 60,
        });
        cursor = start + len;
        target += len;
    }
    blocks
}

fn layout_strategy() -> impl Strategy<Value = Vec<(u64, u64)>> {
    prop::collection::vec((0u64..50, 1u64..100), 1..20)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every position inside a block locates to exactly that block
    #[test]
    fn prop_locate_finds_containing_block(layout in layout_strategy()) {
        let blocks = blocks_from_layout(&layout);
        for (i, b) in blocks.iter().enumerate() {
            prop_assert_eq!(locate(&blocks, b.source_start), Some(i));
            prop_assert_eq!(locate(&blocks, b.source_end - 1), Some(i));
            let mid = b.source_start + (b.source_end - b.source_start) / 2;
            prop_assert_eq!(locate(&blocks, mid), Some(i));
        }
    }

    /// Positions before the first block, in uncovered spans, or past the
    /// last block never locate
    #[test]
    fn prop_locate_misses_uncovered_positions(layout in layout_strategy()) {
        let blocks = blocks_from_layout(&layout);
        let first = &blocks[0];
        if first.source_start > 0 {
            prop_assert_eq!(locate(&blocks, first.source_start - 1), None);
            prop_assert_eq!(locate(&blocks, 0), None);
        }
        for pair in blocks.windows(2) {
            if pair[1].source_start > pair[0].source_end {
                prop_assert_eq!(locate(&blocks, pair[0].source_end), None);
                prop_assert_eq!(locate(&blocks, pair[1].source_start - 1), None);
            }
        }
        let last = blocks.last().unwrap();
        prop_assert_eq!(locate(&blocks, last.source_end), None);
        prop_assert_eq!(locate(&blocks, last.source_end + 1000), None);
    }

    /// Records written as TSV parse back to the same blocks, in sorted
    /// order regardless of input order
    #[test]
    fn prop_parse_and_build_sorts(layout in layout_strategy(), seed in 0u64..1000) {
        let blocks = blocks_from_layout(&layout);

        // shuffle deterministically by rotating
        let rot = (seed as usize) % blocks.len();
        let mut shuffled = blocks.clone();
        shuffled.rotate_left(rot);

        let mut tsv = String::from("contigA\tstartA\tendA\tcontigB\tstartB\tendB\tstrand\tmapq\n");
        for b in &shuffled {
            tsv.push_str(&format!(
                "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\n",
                b.source_contig, b.source_start, b.source_end,
                b.target_contig, b.target_start, b.target_end,
                b.strand, b.mapq,
            ));
        }

        let parsed = parse_blocks_bytes(tsv.as_bytes()).unwrap();
        prop_assert_eq!(parsed.len(), blocks.len());

        let map = BlockMap::from_records(parsed);
        let indexed = map.contig_blocks("I").unwrap();
        prop_assert_eq!(indexed, blocks.as_slice());
    }
}

#[test]
fn malformed_records_are_dropped_not_fatal() {
    let tsv = "contigA\tstartA\tendA\tcontigB\tstartB\tendB\tstrand\tmapq\n\
               I\t0\t100\tX\t0\t100\t+\t60\n\
               truncated\tline\n\
               I\t200\tNaN\tX\t0\t100\t+\t60\n\
               I\t300\t400\tX\t300\t400\t*\t60\n\
               I\t500\t600\tX\t500\t600\t-\t60\n";
    let blocks = parse_blocks_bytes(tsv.as_bytes()).unwrap();
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].source_start, 0);
    assert_eq!(blocks[1].strand, Strand::Minus);
}
