use blocklift::core::{locate, stitch, Block, BlockMap, Strand};
use blocklift::formats::{lift_query, parse_query_line};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Synthetic map: `n` blocks of 1kb per contig with 100bp source gaps,
/// alternating strand every other contig
fn synthetic_blocks(contigs: usize, per_contig: usize) -> Vec<Block> {
    let mut blocks = Vec::with_capacity(contigs * per_contig);
    for c in 0..contigs {
        let strand = if c % 2 == 0 { Strand::Plus } else { Strand::Minus };
        for i in 0..per_contig {
            let s_start = (i as u64) * 1100;
            blocks.push(Block {
                source_contig: format!("chr{}", c + 1),
                source_start: s_start,
                source_end: s_start + 1000,
                target_contig: format!("scaffold{}", c + 1),
                target_start: s_start / 2,
                target_end: s_start / 2 + 1000,
                strand,
                mapq: 60,
            });
        }
    }
    blocks
}

fn bench_locate(c: &mut Criterion) {
    let map = BlockMap::from_records(synthetic_blocks(1, 100_000));
    let blocks = map.contig_blocks("chr1").unwrap();
    let span = blocks.last().unwrap().source_end;

    c.bench_function("locate_100k_blocks", |b| {
        let mut pos = 0u64;
        b.iter(|| {
            pos = (pos + 7919) % span;
            black_box(locate(blocks, black_box(pos)))
        })
    });
}

fn bench_stitch(c: &mut Criterion) {
    let map = BlockMap::from_records(synthetic_blocks(1, 100_000));
    let blocks = map.contig_blocks("chr1").unwrap();

    c.bench_function("stitch_single_block", |b| {
        b.iter(|| black_box(stitch(blocks, black_box(500), black_box(900))))
    });

    // spans ~90 blocks, exercising the consistency walk and endpoint math
    c.bench_function("stitch_100kb_span", |b| {
        b.iter(|| black_box(stitch(blocks, black_box(500), black_box(100_500))))
    });
}

fn bench_lift_query(c: &mut Criterion) {
    let map = BlockMap::from_records(synthetic_blocks(8, 10_000));

    c.bench_function("lift_query_with_gaps", |b| {
        let query = parse_query_line("chr3:501-50500").unwrap();
        b.iter(|| black_box(lift_query(&map, black_box(&query))))
    });
}

criterion_group!(benches, bench_locate, bench_stitch, bench_lift_query);
criterion_main!(benches);
