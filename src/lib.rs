//! # vcf2eds
//!
//! Build Elastic Degenerate Strings (EDS) from a reference sequence and a set of
//! variant calls.
//!
//! An EDS writes invariant stretches of the reference literally and every
//! polymorphic span as a bracketed set of its possible alleles:
//!
//! ```text
//! reference  NACGT
//! variant    pos 2  A -> G,T
//! EDS        N{A,G,T}CGT
//! ```
//!
//! Overlapping records are resolved before output: records sharing a start
//! position are merged into one span, and records falling inside an earlier
//! span are spliced into each of its alleles.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use vcf2eds::eds::{convert, EdsConfig};
//! use vcf2eds::parsing::{fasta, vcf};
//!
//! let reference = fasta::open_reference(Path::new("reference.fa")).unwrap();
//! let variants = vcf::open_variants(Path::new("variants.vcf.gz")).unwrap();
//! let output = std::fs::File::create("reference.fa.eds").unwrap();
//!
//! let summary = convert(reference, variants, output, &EdsConfig::default()).unwrap();
//! println!("{} degenerate blocks", summary.degenerate_blocks);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Raw variant records and consolidated variant items
//! - [`eds`]: Consolidation, reference merge, and EDS output
//! - [`parsing`]: Reference FASTA and VCF readers
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod eds;
pub mod parsing;

// Re-export commonly used types for convenience
pub use crate::core::item::VariantItem;
pub use crate::core::variant::RawVariant;
pub use eds::summary::RunSummary;
pub use eds::{convert, EdsConfig, EdsError};
