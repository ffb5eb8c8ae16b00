//! Reference sequence source.
//!
//! The first line (the FASTA header) is discarded. Everything after it is
//! scanned byte by byte and only the uppercase symbols `A`, `C`, `G`, `T` and
//! `N` are yielded; line endings, whitespace and any other bytes are dropped.
//!
//! Supported extensions for compressed input:
//! - `.gz` (gzip)
//! - `.bgz` (bgzip)

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;

/// Check whether a byte is an emittable reference symbol
#[must_use]
pub fn is_reference_symbol(byte: u8) -> bool {
    matches!(byte, b'A' | b'C' | b'G' | b'T' | b'N')
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Lazy, single-pass stream of reference symbols
pub struct ReferenceSymbols<R> {
    reader: R,
    header: String,
    failed: bool,
}

impl<R: BufRead> ReferenceSymbols<R> {
    /// Wrap a reader, consuming its first line as the header.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the header line cannot be read.
    pub fn new(mut reader: R) -> io::Result<Self> {
        let mut header = Vec::new();
        reader.read_until(b'\n', &mut header)?;
        let header = String::from_utf8_lossy(&header).trim_end().to_string();

        Ok(Self {
            reader,
            header,
            failed: false,
        })
    }

    /// The discarded first line, without its line ending
    #[must_use]
    pub fn header(&self) -> &str {
        &self.header
    }
}

impl<R: BufRead> Iterator for ReferenceSymbols<R> {
    type Item = io::Result<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        loop {
            let (consumed, symbol) = match self.reader.fill_buf() {
                Ok([]) => return None,
                Ok(available) => match available.iter().position(|&b| is_reference_symbol(b)) {
                    Some(i) => (i + 1, Some(available[i])),
                    None => (available.len(), None),
                },
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e));
                }
            };

            self.reader.consume(consumed);
            if let Some(symbol) = symbol {
                return Some(Ok(symbol));
            }
        }
    }
}

/// Open a reference FASTA file, decompressing `.gz`/`.bgz` input.
///
/// # Errors
///
/// Returns an IO error if the file cannot be opened or its header read.
pub fn open_reference(path: &Path) -> io::Result<ReferenceSymbols<Box<dyn BufRead>>> {
    let file = File::open(path)?;
    let reader: Box<dyn BufRead> = if is_gzipped(path) {
        Box::new(BufReader::new(MultiGzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };

    ReferenceSymbols::new(reader)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    fn collect<R: BufRead>(symbols: ReferenceSymbols<R>) -> String {
        let bytes: Vec<u8> = symbols.collect::<io::Result<_>>().unwrap();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_header_is_discarded() {
        let symbols = ReferenceSymbols::new(Cursor::new(b">chr1 test\nNACGT\n".to_vec())).unwrap();
        assert_eq!(symbols.header(), ">chr1 test");
        assert_eq!(collect(symbols), "NACGT");
    }

    #[test]
    fn test_non_symbols_are_dropped() {
        let input = b">seq\nAC GT\r\nnnRYacgtN\n\nTT".to_vec();
        let symbols = ReferenceSymbols::new(Cursor::new(input)).unwrap();
        assert_eq!(collect(symbols), "ACGTNTT");
    }

    #[test]
    fn test_header_only() {
        let symbols = ReferenceSymbols::new(Cursor::new(b">empty".to_vec())).unwrap();
        assert_eq!(collect(symbols), "");
    }

    #[test]
    fn test_small_read_buffer() {
        let input = b">x\nACGT\nACGT\nAC\n".to_vec();
        let reader = BufReader::with_capacity(3, Cursor::new(input));
        let symbols = ReferenceSymbols::new(reader).unwrap();
        assert_eq!(collect(symbols), "ACGTACGTAC");
    }

    #[test]
    fn test_is_gzipped() {
        assert!(is_gzipped(Path::new("ref.fa.gz")));
        assert!(is_gzipped(Path::new("ref.FA.BGZ")));
        assert!(!is_gzipped(Path::new("ref.fa")));
    }

    #[test]
    fn test_open_reference_plain() {
        let mut temp = NamedTempFile::with_suffix(".fa").unwrap();
        temp.write_all(b">chr1\nACGT\nNNAC\n").unwrap();
        temp.flush().unwrap();

        let symbols = open_reference(temp.path()).unwrap();
        assert_eq!(symbols.header(), ">chr1");
        assert_eq!(collect(symbols), "ACGTNNAC");
    }

    #[test]
    fn test_open_reference_gzipped() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b">chr1\nGGCC\nTA\n").unwrap();
        let compressed = encoder.finish().unwrap();

        let mut temp = NamedTempFile::with_suffix(".fa.gz").unwrap();
        temp.write_all(&compressed).unwrap();
        temp.flush().unwrap();

        let symbols = open_reference(temp.path()).unwrap();
        assert_eq!(collect(symbols), "GGCCTA");
    }

    #[test]
    fn test_open_missing_reference() {
        let result = open_reference(Path::new("/nonexistent/ref.fa"));
        assert!(result.is_err());
    }
}
