//! FASTA input using noodles.
//!
//! Yields successive sequence records (name + raw bytes) from multi-record
//! FASTA files. Supports both uncompressed and gzip/bgzip compressed inputs.
//!
//! Supported extensions:
//! - `.fa`, `.fasta`, `.fna` (uncompressed)
//! - `.fa.gz`, `.fasta.gz`, `.fna.gz` (gzip compressed)
//! - `.fa.bgz`, `.fasta.bgz`, `.fna.bgz` (bgzip compressed)
//!
//! Files without a recognized compression extension are read as uncompressed
//! FASTA; the record parser rejects anything that is not.

use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use noodles::fasta;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid FASTA format: {0}")]
    InvalidFormat(String),

    #[error("noodles error: {0}")]
    Noodles(String),
}

/// One named sequence entry from a multi-record FASTA file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    /// Record name (the first word of the `>` definition line)
    pub name: String,

    /// Raw sequence bytes, line breaks removed
    pub sequence: Vec<u8>,
}

impl SequenceRecord {
    pub fn new(name: impl Into<String>, sequence: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            sequence: sequence.into(),
        }
    }
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// An open FASTA file yielding records in file order.
///
/// The underlying file handle is closed when the source is dropped.
pub struct FastaSource {
    reader: fasta::io::Reader<Box<dyn BufRead>>,
    path: PathBuf,
    records_read: usize,
}

impl FastaSource {
    /// Open a FASTA file, transparently decompressing gzip/bgzip input.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Io` if the file cannot be opened.
    pub fn open(path: &Path) -> Result<Self, ParseError> {
        let file = std::fs::File::open(path)?;

        let inner: Box<dyn BufRead> = if is_gzipped(path) {
            Box::new(BufReader::new(GzDecoder::new(file)))
        } else {
            Box::new(BufReader::new(file))
        };

        Ok(Self {
            reader: fasta::io::Reader::new(inner),
            path: path.to_path_buf(),
            records_read: 0,
        })
    }

    /// Read the next record, or `None` at end of data.
    ///
    /// Records are yielded strictly in file order.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Noodles` if the next record cannot be parsed.
    pub fn next_record(&mut self) -> Result<Option<SequenceRecord>, ParseError> {
        match self.reader.records().next() {
            Some(Ok(record)) => {
                let name = String::from_utf8_lossy(record.name()).to_string();
                let sequence = record.sequence().as_ref().to_vec();

                self.records_read += 1;
                debug!(
                    "read record {} ({}, {} bases) from {}",
                    self.records_read,
                    name,
                    sequence.len(),
                    self.path.display()
                );

                Ok(Some(SequenceRecord { name, sequence }))
            }
            Some(Err(e)) => Err(ParseError::Noodles(format!(
                "Failed to parse record {} in {}: {e}",
                self.records_read + 1,
                self.path.display()
            ))),
            None => Ok(None),
        }
    }

    /// Number of records read so far.
    #[must_use]
    pub fn records_read(&self) -> usize {
        self.records_read
    }
}

/// Cheap up-front check that a file is present and parses as FASTA.
///
/// Opens the file and reads its first record. A file that passes here can
/// still fail during the load phase (it may change or disappear underneath
/// us); the load phase reports its own errors.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be opened, `ParseError::Noodles`
/// if the first record is malformed, or `ParseError::InvalidFormat` if the
/// file contains no records at all.
pub fn preflight(path: &Path) -> Result<(), ParseError> {
    let mut source = FastaSource::open(path)?;

    match source.next_record()? {
        Some(_) => Ok(()),
        None => Err(ParseError::InvalidFormat(format!(
            "No sequences found in {}",
            path.display()
        ))),
    }
}
