/// Returns true for placeholder alleles that never reach the output.
///
/// Symbolic alleles (`<DEL>`, `<INS:ME>`, ...) and the missing-value marker `.`
/// describe variation without literal bases.
///
/// # Examples
///
/// ```
/// use vcf2eds::core::variant::is_symbolic;
///
/// assert!(is_symbolic("<DEL>"));
/// assert!(is_symbolic("."));
/// assert!(!is_symbolic("ACGT"));
/// ```
#[must_use]
pub fn is_symbolic(allele: &str) -> bool {
    allele.starts_with('<') || allele == "."
}

/// A single variant record as decoded from the variant source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawVariant {
    /// 1-based position of the first reference base
    pub position: u64,

    /// Reference allele (REF column)
    pub reference_allele: String,

    /// Alternate alleles in record order (ALT column)
    pub alternate_alleles: Vec<String>,
}

impl RawVariant {
    pub fn new(
        position: u64,
        reference_allele: impl Into<String>,
        alternate_alleles: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            position,
            reference_allele: reference_allele.into(),
            alternate_alleles: alternate_alleles.into_iter().map(Into::into).collect(),
        }
    }

    /// Length of the reference allele in bases
    #[must_use]
    pub fn reference_length(&self) -> usize {
        self.reference_allele.len()
    }

    #[must_use]
    pub fn has_symbolic_reference(&self) -> bool {
        is_symbolic(&self.reference_allele)
    }

    /// Alternate alleles with symbolic placeholders removed
    pub fn literal_alternates(&self) -> impl Iterator<Item = &str> {
        self.alternate_alleles
            .iter()
            .map(String::as_str)
            .filter(|a| !is_symbolic(a))
    }

    /// Reference then alternates, with symbolic placeholders removed
    pub fn literal_alleles(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.reference_allele.as_str())
            .filter(|a| !is_symbolic(a))
            .chain(self.literal_alternates())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_symbolic() {
        assert!(is_symbolic("<DEL>"));
        assert!(is_symbolic("<*>"));
        assert!(is_symbolic("."));
        assert!(!is_symbolic("A"));
        assert!(!is_symbolic("AT."));
        assert!(!is_symbolic("N"));
    }

    #[test]
    fn test_literal_alleles_filters_symbolic() {
        let variant = RawVariant::new(5, "A", ["G", "<DEL>", ".", "TT"]);
        let alleles: Vec<&str> = variant.literal_alleles().collect();
        assert_eq!(alleles, vec!["A", "G", "TT"]);

        let alternates: Vec<&str> = variant.literal_alternates().collect();
        assert_eq!(alternates, vec!["G", "TT"]);
    }

    #[test]
    fn test_symbolic_reference_is_dropped() {
        let variant = RawVariant::new(1, "<REF>", ["C"]);
        assert!(variant.has_symbolic_reference());
        let alleles: Vec<&str> = variant.literal_alleles().collect();
        assert_eq!(alleles, vec!["C"]);
    }
}
