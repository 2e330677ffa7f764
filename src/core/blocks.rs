//! Blocks-TSV parsing
//!
//! Parses precomputed collinear alignment blocks relating a source
//! assembly to a target assembly.
//!
//! # Blocks File Format
//!
//! ```text
//! contigA	startA	endA	contigB	startB	endB	strand	mapq
//! I	0	100	II	5000	5100	+	60
//! ```
//!
//! - Tab-separated; the first line is a header and is always skipped
//! - Coordinates are 0-based half-open `[start, end)`
//! - `strand` is `+` or `-`; `mapq` is informational only
//! - Lines with fewer than 8 fields, non-integer numerics, an unknown
//!   strand, or `startA >= endA` are dropped without error

use crate::core::error::BlocksError;
use crate::core::Strand;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// A collinear alignment block
///
/// Maps the contiguous source range `[source_start, source_end)` to the
/// contiguous target range `[target_start, target_end)` under one strand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Source contig name
    pub source_contig: String,
    /// Source start position (0-based)
    pub source_start: u64,
    /// Source end position (exclusive)
    pub source_end: u64,
    /// Target contig name
    pub target_contig: String,
    /// Target start position (0-based)
    pub target_start: u64,
    /// Target end position (exclusive)
    pub target_end: u64,
    /// Orientation of the correspondence
    pub strand: Strand,
    /// Mapping quality carried through from the aligner; unused by the
    /// mapping algebra
    pub mapq: u32,
}

impl Block {
    /// Parse one data line; `None` means the record is malformed and
    /// should be dropped
    fn parse(line: &str) -> Option<Self> {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < 8 {
            return None;
        }

        let source_start = fields[1].parse::<u64>().ok()?;
        let source_end = fields[2].parse::<u64>().ok()?;
        let target_start = fields[4].parse::<u64>().ok()?;
        let target_end = fields[5].parse::<u64>().ok()?;
        let strand = Strand::from_field(fields[6])?;
        let mapq = fields[7].trim_end().parse::<u32>().ok()?;

        // Zero-length or inverted source ranges can never contain a position
        if source_start >= source_end {
            return None;
        }

        Some(Block {
            source_contig: fields[0].to_string(),
            source_start,
            source_end,
            target_contig: fields[3].to_string(),
            target_start,
            target_end,
            strand,
            mapq,
        })
    }

    /// Length of the block in source coordinates
    pub fn len(&self) -> u64 {
        self.source_end - self.source_start
    }

    /// Whether a source position falls inside this block
    pub fn contains(&self, pos: u64) -> bool {
        pos >= self.source_start && pos < self.source_end
    }

    /// The same correspondence viewed from the target side: source and
    /// target swap, strand is preserved
    pub fn inverted(&self) -> Block {
        Block {
            source_contig: self.target_contig.clone(),
            source_start: self.target_start,
            source_end: self.target_end,
            target_contig: self.source_contig.clone(),
            target_start: self.source_start,
            target_end: self.source_end,
            strand: self.strand,
            mapq: self.mapq,
        }
    }
}

/// Parse blocks from a reader
///
/// The first line is treated as a header and skipped. Malformed records
/// are dropped (logged at debug level); this is the recoverable,
/// non-fatal path for dirty inputs.
pub fn parse_blocks_reader<R: BufRead>(reader: R) -> Result<Vec<Block>, BlocksError> {
    let mut blocks = Vec::new();
    let mut dropped = 0usize;

    for (line_number, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        if line_number == 0 {
            continue; // header
        }
        let trimmed = line.trim_end_matches(['\r', '\n']);
        if trimmed.is_empty() {
            continue;
        }
        match Block::parse(trimmed) {
            Some(block) => blocks.push(block),
            None => {
                dropped += 1;
                log::debug!("dropping malformed blocks record at line {}", line_number + 1);
            }
        }
    }

    if dropped > 0 {
        log::info!("dropped {} malformed blocks record(s)", dropped);
    }
    Ok(blocks)
}

/// Parse blocks from an in-memory buffer (handy for tests)
pub fn parse_blocks_bytes(data: &[u8]) -> Result<Vec<Block>, BlocksError> {
    parse_blocks_reader(BufReader::new(data))
}

/// Compression format for blocks files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionFormat {
    /// Plain text (uncompressed)
    Plain,
    /// Gzip compressed (.gz)
    Gzip,
    /// Bzip2 compressed (.bz2)
    Bzip2,
}

/// Detect compression format from file extension and/or magic bytes
pub fn detect_compression(path: &Path) -> Result<CompressionFormat, BlocksError> {
    use std::fs::File;
    use std::io::Read;

    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    if extension == "gz" {
        return Ok(CompressionFormat::Gzip);
    }
    if extension == "bz2" {
        return Ok(CompressionFormat::Bzip2);
    }

    let mut file = File::open(path)?;
    let mut magic = [0u8; 3];
    let bytes_read = file.read(&mut magic)?;

    if bytes_read >= 2 && magic[0] == 0x1f && magic[1] == 0x8b {
        return Ok(CompressionFormat::Gzip);
    }
    // BZ2 magic: "BZh"
    if bytes_read >= 3 && magic[0] == 0x42 && magic[1] == 0x5a && magic[2] == 0x68 {
        return Ok(CompressionFormat::Bzip2);
    }

    Ok(CompressionFormat::Plain)
}

/// Parse a blocks file from a path
///
/// Automatically detects and handles gzip/bzip2 compression by extension
/// or magic bytes.
pub fn parse_blocks_file(path: &Path) -> Result<Vec<Block>, BlocksError> {
    use std::fs::File;

    if !path.exists() {
        return Err(BlocksError::FileNotFound(path.to_path_buf()));
    }

    let format = detect_compression(path)?;
    let file = File::open(path)?;

    match format {
        CompressionFormat::Gzip => {
            let decoder = flate2::read::GzDecoder::new(file);
            parse_blocks_reader(BufReader::with_capacity(128 * 1024, decoder))
        }
        CompressionFormat::Bzip2 => {
            let decoder = bzip2::read::BzDecoder::new(file);
            parse_blocks_reader(BufReader::with_capacity(128 * 1024, decoder))
        }
        CompressionFormat::Plain => {
            parse_blocks_reader(BufReader::with_capacity(128 * 1024, file))
        }
    }
}
