//! Readers for the two inputs of a conversion.
//!
//! - **Reference FASTA**: a header line followed by sequence lines, read as a
//!   lazy stream of `A`, `C`, `G`, `T`, `N` symbols ([`fasta`])
//! - **VCF**: variant records reduced to position, REF and ALT ([`vcf`])
//!
//! Both accept plain, gzip, or bgzip compressed files.

use thiserror::Error;

pub mod fasta;
pub mod vcf;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("noodles error: {0}")]
    Noodles(String),

    #[error("Invalid variant record: {0}")]
    InvalidRecord(String),

    #[error("Variants span multiple contigs ({first}, {other}); a single reference sequence is supported")]
    MultipleContigs { first: String, other: String },
}
