//! Lock-step walk of the reference symbols and the consolidated items.

use std::io::{self, Write};

use tracing::debug;

use crate::core::item::VariantItem;
use crate::eds::writer::EdsWriter;
use crate::eds::EdsError;

/// Counters gathered while merging
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Reference symbols consumed, literal or skipped
    pub reference_symbols: u64,
    /// Items passed over because their start was already consumed
    pub stale_items: u64,
    /// Items starting past the end of the reference
    pub unreached_items: u64,
}

/// Merge the reference with the items, writing EDS tokens in coordinate order.
///
/// `items` must be ascending and non-overlapping. A symbol at a position where
/// an item starts is replaced by the item's alleles, and the following
/// `skip_length - 1` symbols are consumed without being written.
///
/// # Errors
///
/// Returns `EdsError::Io` if reading the reference or writing output fails.
pub fn merge<S, W>(
    symbols: S,
    items: &[VariantItem],
    writer: &mut EdsWriter<W>,
) -> Result<MergeStats, EdsError>
where
    S: IntoIterator<Item = io::Result<u8>>,
    W: Write,
{
    let mut symbols = symbols.into_iter();
    let mut pending = items.iter().peekable();
    let mut ref_index: u64 = 1;
    let mut stats = MergeStats::default();

    while let Some(symbol) = symbols.next() {
        let symbol = symbol?;
        stats.reference_symbols += 1;

        while pending
            .next_if(|item| item.start_position < ref_index)
            .is_some()
        {
            stats.stale_items += 1;
        }

        let Some(item) = pending.next_if(|item| item.start_position == ref_index) else {
            writer.push_literal(symbol)?;
            ref_index += 1;
            continue;
        };

        writer.write_alleles(&item.alleles)?;

        // An empty reference still consumes the symbol at its start
        let span = item.skip_length.max(1);
        for _ in 1..span {
            match symbols.next() {
                Some(skipped) => {
                    skipped?;
                    stats.reference_symbols += 1;
                }
                None => break,
            }
        }
        ref_index += span as u64;
    }

    stats.unreached_items = pending.count() as u64;

    debug!(
        symbols = stats.reference_symbols,
        stale = stats.stale_items,
        unreached = stats.unreached_items,
        "Merged reference with variant items"
    );

    Ok(stats)
}
