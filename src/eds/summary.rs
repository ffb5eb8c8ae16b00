use serde::Serialize;

/// Statistics for one reference + variants conversion
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Variant records read from the variant source
    pub records: u64,

    /// Consolidated, non-overlapping variant items
    pub variant_items: u64,

    /// Bracketed allele blocks written
    pub degenerate_blocks: u64,

    /// Single-allele spans written without brackets
    pub fixed_blocks: u64,

    /// Reference symbols written literally
    pub literal_symbols: u64,

    /// Reference symbols consumed in total
    pub reference_symbols: u64,

    /// Items skipped because an earlier span already covered their start
    pub stale_items: u64,

    /// Items starting beyond the last reference symbol
    pub unreached_items: u64,

    /// Nested splices rejected (multi-base alternate or offset out of range)
    pub skipped_splices: u64,
}
