//! Variant record source backed by noodles.
//!
//! Each VCF data line is reduced to a [`RawVariant`]: POS, REF and the ALT
//! alleles. All other columns are ignored. Plain, gzip and bgzip input are
//! detected by noodles from the file extension.

use std::io::BufRead;
use std::path::Path;

use noodles::vcf;
use noodles::vcf::variant::record::AlternateBases;

use crate::core::variant::RawVariant;
use crate::parsing::ParseError;

/// Iterator over the variant records of a single-contig VCF
pub struct VariantRecords<R> {
    reader: vcf::io::Reader<R>,
    record: vcf::Record,
    contig: Option<String>,
    done: bool,
}

impl<R: BufRead> VariantRecords<R> {
    /// Wrap a reader, reading past the VCF header.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Noodles` if the header is malformed.
    pub fn new(inner: R) -> Result<Self, ParseError> {
        let mut reader = vcf::io::Reader::new(inner);
        reader
            .read_header()
            .map_err(|e| ParseError::Noodles(format!("Failed to read VCF header: {e}")))?;

        Ok(Self {
            reader,
            record: vcf::Record::default(),
            contig: None,
            done: false,
        })
    }

    fn read_next(&mut self) -> Result<Option<RawVariant>, ParseError> {
        let n = self
            .reader
            .read_record(&mut self.record)
            .map_err(|e| ParseError::Noodles(format!("Failed to read VCF record: {e}")))?;
        if n == 0 {
            return Ok(None);
        }

        let name = self.record.reference_sequence_name();
        let first = self.contig.get_or_insert_with(|| name.to_string());
        if first.as_str() != name {
            return Err(ParseError::MultipleContigs {
                first: first.clone(),
                other: name.to_string(),
            });
        }

        to_raw_variant(&self.record).map(Some)
    }
}

impl<R: BufRead> Iterator for VariantRecords<R> {
    type Item = Result<RawVariant, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.read_next() {
            Ok(Some(variant)) => Some(Ok(variant)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Extract position, REF and ALT from a VCF record
fn to_raw_variant(record: &vcf::Record) -> Result<RawVariant, ParseError> {
    let position = record
        .variant_start()
        .transpose()
        .map_err(|e| ParseError::InvalidRecord(format!("invalid position: {e}")))?
        .ok_or_else(|| ParseError::InvalidRecord("missing position".to_string()))?;

    let reference_allele = record.reference_bases().to_string();

    let alternate_alleles = record
        .alternate_bases()
        .iter()
        .map(|allele| allele.map(|a| a.to_string()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| ParseError::InvalidRecord(format!("invalid alternate bases: {e}")))?;

    Ok(RawVariant {
        position: usize::from(position) as u64,
        reference_allele,
        alternate_alleles,
    })
}

/// Open a VCF file and read past its header.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be opened, or
/// `ParseError::Noodles` if the header is malformed.
pub fn open_variants(path: &Path) -> Result<VariantRecords<Box<dyn BufRead>>, ParseError> {
    let reader = vcf::io::reader::Builder::default().build_from_path(path)?;
    let inner = reader.into_inner();
    VariantRecords::new(inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    const HEADER: &str = "##fileformat=VCFv4.2\n\
##contig=<ID=chr1,length=100>\n\
##contig=<ID=chr2,length=100>\n\
#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\n";

    fn records(body: &str) -> Vec<Result<RawVariant, ParseError>> {
        let text = format!("{HEADER}{body}");
        VariantRecords::new(Cursor::new(text.into_bytes()))
            .unwrap()
            .collect()
    }

    #[test]
    fn test_parse_records() {
        let parsed = records(
            "chr1\t2\t.\tA\tG,T\t.\t.\t.\n\
             chr1\t10\trs1\tAAA\tA\t50\tPASS\tDP=3\n",
        );
        assert_eq!(parsed.len(), 2);

        let first = parsed[0].as_ref().unwrap();
        assert_eq!(first, &RawVariant::new(2, "A", ["G", "T"]));

        let second = parsed[1].as_ref().unwrap();
        assert_eq!(second.position, 10);
        assert_eq!(second.reference_allele, "AAA");
        assert_eq!(second.alternate_alleles, vec!["A"]);
    }

    #[test]
    fn test_symbolic_alternates_are_kept_for_filtering() {
        let parsed = records("chr1\t5\t.\tC\t<DEL>,T\t.\t.\t.\n");
        let variant = parsed[0].as_ref().unwrap();
        assert_eq!(variant.alternate_alleles, vec!["<DEL>", "T"]);
        let literal: Vec<&str> = variant.literal_alternates().collect();
        assert_eq!(literal, vec!["T"]);
    }

    #[test]
    fn test_missing_alternate() {
        let parsed = records("chr1\t5\t.\tC\t.\t.\t.\t.\n");
        let variant = parsed[0].as_ref().unwrap();
        assert_eq!(variant.literal_alternates().count(), 0);
    }

    #[test]
    fn test_multiple_contigs_rejected() {
        let parsed = records(
            "chr1\t5\t.\tC\tT\t.\t.\t.\n\
             chr2\t1\t.\tA\tG\t.\t.\t.\n",
        );
        assert_eq!(parsed.len(), 2);
        assert!(parsed[0].is_ok());
        assert!(matches!(
            parsed[1],
            Err(ParseError::MultipleContigs { ref first, ref other })
                if first == "chr1" && other == "chr2"
        ));
    }

    #[test]
    fn test_invalid_position() {
        let parsed = records("chr1\tabc\t.\tC\tT\t.\t.\t.\n");
        assert_eq!(parsed.len(), 1);
        assert!(parsed[0].is_err());
    }

    #[test]
    fn test_open_variants_file() {
        let mut temp = NamedTempFile::with_suffix(".vcf").unwrap();
        write!(temp, "{HEADER}chr1\t3\t.\tG\tA\t.\t.\t.\n").unwrap();
        temp.flush().unwrap();

        let variants = open_variants(temp.path()).unwrap();
        let parsed: Vec<RawVariant> = variants.collect::<Result<_, _>>().unwrap();
        assert_eq!(parsed, vec![RawVariant::new(3, "G", ["A"])]);
    }

    #[test]
    fn test_open_missing_variants() {
        let result = open_variants(Path::new("/nonexistent/variants.vcf"));
        assert!(matches!(result, Err(ParseError::Io(_))));
    }
}
