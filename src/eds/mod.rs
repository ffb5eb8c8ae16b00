//! Elastic Degenerate String construction.
//!
//! Conversion runs in two strictly ordered phases:
//!
//! 1. [`consolidator`]: sorted variant records become non-overlapping
//!    [`VariantItem`](crate::core::item::VariantItem) spans
//! 2. [`merger`]: the reference is streamed alongside the spans and written
//!    through an [`EdsWriter`](writer::EdsWriter)
//!
//! ## Example
//!
//! ```rust
//! use vcf2eds::core::variant::RawVariant;
//! use vcf2eds::eds::{convert, EdsConfig};
//!
//! let reference = b"NACGT".iter().copied().map(Ok);
//! let variants = vec![Ok(RawVariant::new(2, "A", ["G", "T"]))];
//!
//! let mut out = Vec::new();
//! let summary = convert(reference, variants, &mut out, &EdsConfig::default()).unwrap();
//!
//! assert_eq!(String::from_utf8(out).unwrap(), "N{A,G,T}CGT");
//! assert_eq!(summary.degenerate_blocks, 1);
//! ```

use std::io::{self, Write};

use thiserror::Error;
use tracing::{info, warn};

use crate::core::variant::RawVariant;
use crate::parsing::ParseError;

pub mod consolidator;
pub mod merger;
pub mod summary;
pub mod writer;

use consolidator::Consolidator;
use summary::RunSummary;
use writer::{EdsWriter, DEFAULT_LITERAL_CAPACITY};

#[derive(Error, Debug)]
pub enum EdsError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Variant at position {position} follows position {previous}; variants must be sorted by position")]
    OutOfOrder { position: u64, previous: u64 },
}

/// Tunables for a conversion run
#[derive(Debug, Clone)]
pub struct EdsConfig {
    /// Maximum literal symbols held before they are written out
    pub literal_capacity: usize,
}

impl Default for EdsConfig {
    fn default() -> Self {
        Self {
            literal_capacity: DEFAULT_LITERAL_CAPACITY,
        }
    }
}

/// Convert a reference symbol stream and a sorted variant stream into EDS text.
///
/// All variants are consolidated before the first reference symbol is read.
///
/// # Errors
///
/// Returns `EdsError::Parse` if the variant source fails, `EdsError::OutOfOrder`
/// if variants are not sorted by position, or `EdsError::Io` if reading the
/// reference or writing the output fails.
pub fn convert<S, V, W>(
    symbols: S,
    variants: V,
    output: W,
    config: &EdsConfig,
) -> Result<RunSummary, EdsError>
where
    S: IntoIterator<Item = io::Result<u8>>,
    V: IntoIterator<Item = Result<RawVariant, ParseError>>,
    W: Write,
{
    let mut consolidator = Consolidator::new();
    for variant in variants {
        consolidator.push(&variant?)?;
    }
    let records = consolidator.records();
    let skipped_splices = consolidator.skipped_splices();
    let items = consolidator.finish();

    info!(records, items = items.len(), "Variants consolidated");

    let mut writer = EdsWriter::with_capacity(output, config.literal_capacity);
    let stats = merger::merge(symbols, &items, &mut writer)?;

    if stats.unreached_items > 0 {
        warn!(
            count = stats.unreached_items,
            "Variant items start beyond the end of the reference and were not written"
        );
    }

    let summary = RunSummary {
        records,
        variant_items: items.len() as u64,
        degenerate_blocks: writer.degenerate_blocks(),
        fixed_blocks: writer.fixed_blocks(),
        literal_symbols: writer.literal_symbols(),
        reference_symbols: stats.reference_symbols,
        stale_items: stats.stale_items,
        unreached_items: stats.unreached_items,
        skipped_splices,
    };
    writer.finish()?;

    Ok(summary)
}
