//! Command-line interface for vcf2eds.
//!
//! ## Usage
//!
//! ```text
//! # Write reference.fa.eds in the current directory
//! vcf2eds reference.fa variants.vcf.gz
//!
//! # Explicit output path, JSON run summary
//! vcf2eds reference.fa variants.vcf out.eds --format json
//! ```

use std::path::PathBuf;

use clap::Parser;

use crate::eds::writer::DEFAULT_LITERAL_CAPACITY;

pub mod convert;

#[derive(Parser)]
#[command(name = "vcf2eds")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Build an Elastic Degenerate String (EDS) from a reference FASTA and a VCF")]
#[command(
    long_about = "vcf2eds takes a reference FASTA file and a VCF file and produces an EDS format file.\n\nInvariant stretches of the reference are written literally; variant sites are written as bracketed allele sets such as {A,G,TT}."
)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Reference FASTA file (single sequence, optionally gzip/bgzip compressed)
    pub reference: PathBuf,

    /// VCF file sorted by position (optionally bgzip compressed)
    pub variants: PathBuf,

    /// Output EDS file [default: <reference file name>.eds]
    pub output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Format of the completion report
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Reference symbols buffered before a literal run is written
    #[arg(long, default_value_t = DEFAULT_LITERAL_CAPACITY as u64, value_parser = clap::value_parser!(u64).range(1..))]
    pub buffer_size: u64,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
