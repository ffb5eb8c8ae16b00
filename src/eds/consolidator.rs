//! Consolidation of raw variant records into non-overlapping spans.
//!
//! Records arrive sorted by position. Each one is placed relative to the
//! currently open item (always the last item of the arena):
//!
//! | Placement | Condition | Effect |
//! |-----------|-----------|--------|
//! | Duplicate | same start | extend to a longer REF, append alternates |
//! | Nested    | inside the open span | splice alternates into every known allele |
//! | New span  | at or after the span end | open a fresh item |
//!
//! Only the open item is ever mutated; earlier items are final.

use tracing::{debug, warn};

use crate::core::item::VariantItem;
use crate::core::variant::RawVariant;
use crate::eds::EdsError;

/// Where a record falls relative to the open item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Same start position as the open item
    Duplicate,
    /// Strictly inside the open item's span, `offset` bases from its start
    Nested { offset: usize },
    /// At or beyond the end of the open item's span
    NewSpan,
}

impl Placement {
    #[must_use]
    pub fn of(item: &VariantItem, position: u64) -> Self {
        if position == item.start_position {
            Self::Duplicate
        } else if position < item.end_position() {
            #[allow(clippy::cast_possible_truncation)] // bounded by skip_length
            let offset = (position - item.start_position) as usize;
            Self::Nested { offset }
        } else {
            Self::NewSpan
        }
    }
}

/// Replace the single base at `offset` of `allele` with `replacement`.
///
/// Returns `None` when the replacement is not exactly one base or the offset
/// does not address a base of `allele`.
///
/// # Examples
///
/// ```
/// use vcf2eds::eds::consolidator::splice;
///
/// assert_eq!(splice("AAA", 1, "C"), Some("ACA".to_string()));
/// assert_eq!(splice("AAA", 3, "C"), None);
/// assert_eq!(splice("AAA", 1, "CG"), None);
/// ```
#[must_use]
pub fn splice(allele: &str, offset: usize, replacement: &str) -> Option<String> {
    if replacement.len() != 1 {
        return None;
    }
    let head = allele.get(..offset)?;
    let tail = allele.get(offset + 1..)?;
    Some(format!("{head}{replacement}{tail}"))
}

/// Builds the ordered `VariantItem` sequence from a sorted record stream
#[derive(Debug, Default)]
pub struct Consolidator {
    items: Vec<VariantItem>,
    open: Option<usize>,
    last_position: u64,
    records: u64,
    skipped_splices: u64,
}

impl Consolidator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Place one record against the open item.
    ///
    /// # Errors
    ///
    /// Returns `EdsError::OutOfOrder` if the record starts before the previous record.
    pub fn push(&mut self, variant: &RawVariant) -> Result<(), EdsError> {
        if self.records > 0 && variant.position < self.last_position {
            return Err(EdsError::OutOfOrder {
                position: variant.position,
                previous: self.last_position,
            });
        }
        self.records += 1;
        self.last_position = variant.position;

        let Some(open) = self.open else {
            self.open_item(variant);
            return Ok(());
        };

        let item = &mut self.items[open];

        match Placement::of(item, variant.position) {
            Placement::Duplicate => merge_duplicate(item, variant),
            Placement::Nested { offset } => {
                let skipped = splice_nested(item, variant, offset);
                if skipped > 0 {
                    warn!(
                        position = variant.position,
                        skipped, "Nested alternates must be single bases; splices skipped"
                    );
                    self.skipped_splices += skipped;
                }
            }
            Placement::NewSpan => self.open_item(variant),
        }

        Ok(())
    }

    fn open_item(&mut self, variant: &RawVariant) {
        let alleles = variant.literal_alleles().map(str::to_owned).collect();
        self.items.push(VariantItem::new(
            variant.position,
            variant.reference_allele.clone(),
            alleles,
        ));
        self.open = Some(self.items.len() - 1);
    }

    /// Number of records pushed so far
    #[must_use]
    pub fn records(&self) -> u64 {
        self.records
    }

    /// Nested splices rejected as unsupported
    #[must_use]
    pub fn skipped_splices(&self) -> u64 {
        self.skipped_splices
    }

    #[must_use]
    pub fn finish(self) -> Vec<VariantItem> {
        debug!(
            records = self.records,
            items = self.items.len(),
            "Consolidated variant records"
        );
        self.items
    }
}

/// Same start: widen the span to a longer reference, then add the alternates.
fn merge_duplicate(item: &mut VariantItem, variant: &RawVariant) {
    let old_length = item.skip_length;
    let new_length = variant.reference_length();

    if !variant.has_symbolic_reference() && new_length > old_length {
        if let Some(suffix) = variant.reference_allele.get(old_length..) {
            for allele in item.alleles.iter_mut().filter(|a| a.len() < new_length) {
                allele.push_str(suffix);
            }
            item.reference.clone_from(&variant.reference_allele);
            item.skip_length = new_length;
        }
    }

    item.alleles
        .extend(variant.literal_alternates().map(str::to_owned));
}

/// Inside the span: every known allele may also carry each new alternate.
/// Returns the number of splices that could not be applied.
fn splice_nested(item: &mut VariantItem, variant: &RawVariant, offset: usize) -> u64 {
    let mut skipped = 0;
    let known = item.alleles.len();

    for index in 0..known {
        for alternate in variant.literal_alternates() {
            match splice(&item.alleles[index], offset, alternate) {
                Some(spliced) => item.alleles.push(spliced),
                None => skipped += 1,
            }
        }
    }

    skipped
}

/// Consolidate a complete, sorted record sequence.
///
/// # Errors
///
/// Returns `EdsError::OutOfOrder` on the first record that breaks ascending order.
pub fn consolidate<'a>(
    variants: impl IntoIterator<Item = &'a RawVariant>,
) -> Result<Vec<VariantItem>, EdsError> {
    let mut consolidator = Consolidator::new();
    for variant in variants {
        consolidator.push(variant)?;
    }
    Ok(consolidator.finish())
}
