//! EDS token output.
//!
//! Literal runs are accumulated and written in chunks so long invariant
//! stretches never sit in memory whole. Chunk boundaries are invisible in the
//! output since literal tokens concatenate without separators.

use std::io::{self, Write};

/// Default literal-run capacity in symbols
pub const DEFAULT_LITERAL_CAPACITY: usize = 1_000_000;

/// Streams literal runs and allele blocks to an underlying writer
pub struct EdsWriter<W: Write> {
    inner: W,
    literal: Vec<u8>,
    capacity: usize,
    literal_symbols: u64,
    degenerate_blocks: u64,
    fixed_blocks: u64,
}

impl<W: Write> EdsWriter<W> {
    pub fn new(inner: W) -> Self {
        Self::with_capacity(inner, DEFAULT_LITERAL_CAPACITY)
    }

    /// A capacity of zero is treated as one.
    pub fn with_capacity(inner: W, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            inner,
            literal: Vec::with_capacity(capacity.min(DEFAULT_LITERAL_CAPACITY)),
            capacity,
            literal_symbols: 0,
            degenerate_blocks: 0,
            fixed_blocks: 0,
        }
    }

    /// Append one reference symbol to the current literal run.
    ///
    /// # Errors
    ///
    /// Returns an IO error if a full run cannot be flushed.
    pub fn push_literal(&mut self, symbol: u8) -> io::Result<()> {
        self.literal.push(symbol);
        self.literal_symbols += 1;
        if self.literal.len() >= self.capacity {
            self.flush_literal()?;
        }
        Ok(())
    }

    /// Write out any pending literal run.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the underlying writer fails.
    pub fn flush_literal(&mut self) -> io::Result<()> {
        if !self.literal.is_empty() {
            self.inner.write_all(&self.literal)?;
            self.literal.clear();
        }
        Ok(())
    }

    /// Emit the alleles of one span.
    ///
    /// No alleles writes nothing, one allele is written as a literal, and
    /// more are written as `{a,b,...}`.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the underlying writer fails.
    pub fn write_alleles(&mut self, alleles: &[String]) -> io::Result<()> {
        self.flush_literal()?;

        match alleles {
            [] => {}
            [allele] => {
                self.inner.write_all(allele.as_bytes())?;
                self.fixed_blocks += 1;
            }
            _ => {
                self.inner.write_all(b"{")?;
                for (i, allele) in alleles.iter().enumerate() {
                    if i > 0 {
                        self.inner.write_all(b",")?;
                    }
                    self.inner.write_all(allele.as_bytes())?;
                }
                self.inner.write_all(b"}")?;
                self.degenerate_blocks += 1;
            }
        }

        Ok(())
    }

    /// Reference symbols written as literal text
    pub fn literal_symbols(&self) -> u64 {
        self.literal_symbols
    }

    /// Bracketed blocks written
    pub fn degenerate_blocks(&self) -> u64 {
        self.degenerate_blocks
    }

    /// Single-allele spans written unbracketed
    pub fn fixed_blocks(&self) -> u64 {
        self.fixed_blocks
    }

    /// Flush everything and hand back the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns an IO error if flushing fails.
    pub fn finish(mut self) -> io::Result<W> {
        self.flush_literal()?;
        self.inner.flush()?;
        Ok(self.inner)
    }
}
