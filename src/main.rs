//! Blocklift CLI entry point
//!
//! Lifts CONTIG:POS / CONTIG:START-END queries between assemblies using
//! precomputed alignment-block TSV files.

use blocklift::core::GenomePair;
use blocklift::formats;
use blocklift::BlockMap;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "blocklift")]
#[command(about = "Block-indexed genome coordinate liftover")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lift queries through one direction's blocks file
    Lift {
        /// Blocks TSV file (contigA startA endA contigB startB endB strand mapq)
        blocks: PathBuf,
        /// Input queries, one CONTIG:POS or CONTIG:START-END per line
        input: PathBuf,
        /// Output TSV (default: liftover.out.tsv)
        output: Option<PathBuf>,
        /// Print mapping statistics to stderr
        #[arg(long)]
        stats: bool,
    },
    /// Round-trip queries A→B→A through a pair of blocks files
    Roundtrip {
        /// A→B blocks TSV file
        blocks_ab: PathBuf,
        /// B→A blocks TSV file
        blocks_ba: PathBuf,
        /// Input queries, one CONTIG:POS or CONTIG:START-END per line
        input: PathBuf,
        /// Output TSV (default: roundtrip.out.tsv)
        output: Option<PathBuf>,
        /// Print pass/fail statistics to stderr
        #[arg(long)]
        stats: bool,
    },
    /// Invert an A→B blocks file into the matching B→A blocks file
    Invert {
        /// Input A→B blocks TSV
        blocks_ab: PathBuf,
        /// Output B→A blocks TSV (default: B_to_A.blocks.tsv)
        output: Option<PathBuf>,
    },
    /// Build a blocks TSV from minimap2 PAF alignments (requires cg:Z)
    #[command(name = "paf2blocks")]
    Paf2Blocks {
        /// Input PAF file, produced with minimap2 -c
        paf: PathBuf,
        /// Output blocks TSV (default: A_to_B.blocks.tsv)
        output: Option<PathBuf>,
    },
}

fn load_blocks(path: &PathBuf) -> anyhow::Result<BlockMap> {
    let start = Instant::now();
    eprintln!("Loading blocks file: {:?}", path);

    let map = BlockMap::from_path(path)
        .map_err(|e| anyhow::anyhow!("Failed to load blocks file: {}", e))?;

    eprintln!(
        "Loaded {} blocks on {} contig(s) in {:.2}s",
        map.total_blocks(),
        map.contigs().count(),
        start.elapsed().as_secs_f64()
    );
    Ok(map)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let start = Instant::now();

    match cli.command {
        Commands::Lift {
            blocks,
            input,
            output,
            stats,
        } => {
            let map = load_blocks(&blocks)?;
            let output_path = output.unwrap_or_else(|| PathBuf::from("liftover.out.tsv"));

            eprintln!("Lifting queries: {:?} -> {:?}", input, output_path);
            let run = formats::convert_queries(&input, &output_path, Some(&map))?;

            if stats {
                eprintln!("\n=== Liftover Statistics ===");
                eprintln!("Total queries:   {}", run.total);
                eprintln!("Mapped:          {}", run.mapped);
                eprintln!("  - With gaps:   {}", run.with_gaps);
                eprintln!("Failed:          {}", run.failed);
                eprintln!("Time elapsed:    {:.2}s", start.elapsed().as_secs_f64());
            }
        }

        Commands::Roundtrip {
            blocks_ab,
            blocks_ba,
            input,
            output,
            stats,
        } => {
            let mut pair = GenomePair::new();
            let load_start = Instant::now();
            eprintln!("Loading blocks files: {:?}, {:?}", blocks_ab, blocks_ba);
            let (fwd, rev) = pair.load(&blocks_ab, &blocks_ba);
            let fwd = fwd.map_err(|e| anyhow::anyhow!("Failed to load A→B blocks: {}", e))?;
            let rev = rev.map_err(|e| anyhow::anyhow!("Failed to load B→A blocks: {}", e))?;
            eprintln!(
                "Loaded {} + {} blocks in {:.2}s",
                fwd,
                rev,
                load_start.elapsed().as_secs_f64()
            );

            let output_path = output.unwrap_or_else(|| PathBuf::from("roundtrip.out.tsv"));
            eprintln!("Round-tripping queries: {:?} -> {:?}", input, output_path);
            let run = formats::convert_roundtrip(
                &input,
                &output_path,
                pair.forward(),
                pair.reverse(),
            )?;

            if stats {
                eprintln!("\n=== Round-Trip Statistics ===");
                eprintln!("Total queries:   {}", run.total);
                eprintln!("Pass:            {}", run.pass);
                eprintln!("Fail:            {}", run.fail);
                eprintln!("Errors:          {}", run.errors);
                eprintln!("Time elapsed:    {:.2}s", start.elapsed().as_secs_f64());
            }
        }

        Commands::Invert { blocks_ab, output } => {
            let output_path = output.unwrap_or_else(|| PathBuf::from("B_to_A.blocks.tsv"));
            eprintln!("Inverting blocks: {:?} -> {:?}", blocks_ab, output_path);
            let written = formats::invert_blocks_file(&blocks_ab, &output_path)?;
            eprintln!(
                "Wrote {} blocks in {:.2}s",
                written,
                start.elapsed().as_secs_f64()
            );
        }

        Commands::Paf2Blocks { paf, output } => {
            let output_path = output.unwrap_or_else(|| PathBuf::from("A_to_B.blocks.tsv"));
            eprintln!("Converting PAF: {:?} -> {:?}", paf, output_path);
            let written = formats::paf_to_blocks_file(&paf, &output_path)?;
            eprintln!(
                "Wrote {} blocks in {:.2}s",
                written,
                start.elapsed().as_secs_f64()
            );
        }
    }

    Ok(())
}
