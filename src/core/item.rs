/// A consolidated, non-overlapping span of the reference and its possible alleles.
///
/// Items are produced by the consolidator in ascending order and consumed
/// read-only by the merger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantItem {
    /// 1-based position of the first reference base covered
    pub start_position: u64,

    /// Number of reference bases the span covers
    pub skip_length: usize,

    /// Reference allele the alleles are aligned to
    pub reference: String,

    /// Possible alleles in discovery order (not deduplicated)
    pub alleles: Vec<String>,
}

impl VariantItem {
    pub fn new(start_position: u64, reference: impl Into<String>, alleles: Vec<String>) -> Self {
        let reference = reference.into();
        Self {
            start_position,
            skip_length: reference.len(),
            reference,
            alleles,
        }
    }

    /// First position after the span
    #[must_use]
    pub fn end_position(&self) -> u64 {
        self.start_position + self.skip_length as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_span() {
        let item = VariantItem::new(10, "AAA", vec!["AAA".into(), "TAA".into()]);
        assert_eq!(item.skip_length, 3);
        assert_eq!(item.end_position(), 13);
        assert_eq!(item.reference, "AAA");
    }
}
