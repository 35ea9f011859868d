//! # mum-finder
//!
//! A front end for computing maximal and unique matches (MUMs) between a
//! reference sequence file and one or more query files.
//!
//! All inputs are multi-FastA; each record gets its own suffix-array index.
//! Files are loaded concurrently on a bounded worker pool, and the resulting
//! indexes are aggregated into one collection whose order depends only on the
//! command line (first by file position, then by record position), never on
//! thread scheduling.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use mum_finder::core::collection::IndexCollection;
//! use mum_finder::core::index::SuffixArrayBuilder;
//! use mum_finder::loader::{pool, LoadTask};
//!
//! let tasks = vec![
//!     LoadTask::new(0, "reference.fa"),
//!     LoadTask::new(1, "query.fa"),
//! ];
//!
//! let builder = Arc::new(SuffixArrayBuilder);
//! let workers = pool::default_worker_count(tasks.len());
//!
//! let mut collection = IndexCollection::new();
//! for outcome in pool::load_all(tasks, &builder, workers) {
//!     collection.append_file(outcome.result.unwrap());
//! }
//!
//! for index in &collection {
//!     println!("{}: {} bases", index.name(), index.len());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface implementation
//! - [`core`]: Run configuration, index handles, and the ordered collection
//! - [`loader`]: Load tasks, the bounded worker pool, and aggregation
//! - [`parsing`]: FASTA input

pub mod cli;
pub mod core;
pub mod loader;
pub mod parsing;

// Re-export commonly used types for convenience
pub use crate::core::collection::IndexCollection;
pub use crate::core::config::RunConfiguration;
pub use crate::core::index::{IndexBuilder, SequenceIndex, SuffixArrayBuilder};
pub use crate::core::types::MatchMode;
pub use crate::loader::{LoadError, LoadTask};
pub use crate::parsing::fasta::SequenceRecord;
