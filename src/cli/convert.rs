use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{debug, info};

use crate::cli::{Cli, OutputFormat};
use crate::eds::{self, EdsConfig};
use crate::parsing::{fasta, vcf};

/// Default output location: the reference file name plus `.eds`, in the
/// current directory.
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use vcf2eds::cli::convert::default_output_path;
///
/// assert_eq!(
///     default_output_path(Path::new("/data/hg38.fa")),
///     PathBuf::from("hg38.fa.eds")
/// );
/// ```
#[must_use]
pub fn default_output_path(reference: &Path) -> PathBuf {
    let reference = reference.to_string_lossy();
    let name = reference
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or(&reference);
    PathBuf::from(format!("{name}.eds"))
}

/// Execute a conversion
///
/// # Errors
///
/// Returns an error naming the failing resource if an input or the output
/// cannot be opened, or if conversion fails.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let reference = fasta::open_reference(&cli.reference).with_context(|| {
        format!(
            "Failed to open reference file: {}",
            cli.reference.display()
        )
    })?;
    debug!(header = reference.header(), "Opened reference");

    let variants = vcf::open_variants(&cli.variants).with_context(|| {
        format!("Failed to open variants file: {}", cli.variants.display())
    })?;

    let output_path = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&cli.reference));
    let output = File::create(&output_path)
        .map(BufWriter::new)
        .with_context(|| format!("Failed to open output file: {}", output_path.display()))?;

    let config = EdsConfig {
        literal_capacity: usize::try_from(cli.buffer_size).unwrap_or(usize::MAX),
    };

    info!("Processing {}", cli.reference.display());
    let summary = eds::convert(reference, variants, output, &config).with_context(|| {
        format!(
            "Failed to convert {} with {}",
            cli.reference.display(),
            cli.variants.display()
        )
    })?;
    info!(
        items = summary.variant_items,
        blocks = summary.degenerate_blocks,
        symbols = summary.reference_symbols,
        "Conversion complete"
    );

    match cli.format {
        OutputFormat::Text => println!("Done! Output to {}", output_path.display()),
        OutputFormat::Json => {
            let report = serde_json::json!({
                "output": output_path.display().to_string(),
                "summary": summary,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("ref.fa")),
            PathBuf::from("ref.fa.eds")
        );
        assert_eq!(
            default_output_path(Path::new("/a/b/chr21.fasta")),
            PathBuf::from("chr21.fasta.eds")
        );
        assert_eq!(
            default_output_path(Path::new("C:\\data\\chrM.fa")),
            PathBuf::from("chrM.fa.eds")
        );
    }
}
