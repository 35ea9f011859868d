//! Sequence-file input.
//!
//! The only on-disk format this tool consumes is multi-record FASTA (plain or
//! gzip/bgzip compressed), handled by [`fasta`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use mum_finder::parsing::fasta::FastaSource;
//! use std::path::Path;
//!
//! let mut source = FastaSource::open(Path::new("reference.fa")).unwrap();
//! while let Some(record) = source.next_record().unwrap() {
//!     println!("{}: {} bases", record.name, record.sequence.len());
//! }
//! ```

pub mod fasta;
