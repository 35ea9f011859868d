//! Concurrent multi-file ingestion.
//!
//! One [`LoadTask`] per input file. Each task is executed by a worker on a
//! bounded pool ([`pool::load_all`]): the worker opens its file, reads
//! records in file order, and builds one index per record. Workers share no
//! mutable state; each one's output list is exclusively owned until the pool
//! has been joined.
//!
//! A worker's result is an explicit `Result`: an unopenable file or a
//! malformed record surfaces as a [`LoadError`] at the join point rather than
//! as a silently empty index list.

pub mod pool;

use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

use crate::core::index::IndexBuilder;
use crate::parsing::fasta::{FastaSource, ParseError};

/// A single unit of work: one input file and its position among the trailing
/// command-line arguments.
///
/// Created during argument parsing, consumed by exactly one worker, never
/// mutated. The ordinal fixes where this file's indexes land in the final
/// collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTask {
    pub ordinal: usize,
    pub path: PathBuf,
}

impl LoadTask {
    pub fn new(ordinal: usize, path: impl Into<PathBuf>) -> Self {
        Self {
            ordinal,
            path: path.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to open {path}: {source}")]
    Open { path: PathBuf, source: ParseError },

    #[error("failed while reading {path}: {source}")]
    Read { path: PathBuf, source: ParseError },

    #[error("worker for {path} terminated unexpectedly")]
    Worker { path: PathBuf },
}

/// What one worker produced for one task.
#[derive(Debug)]
pub struct FileOutcome<I> {
    pub task: LoadTask,
    pub result: Result<Vec<I>, LoadError>,
}

/// Load one file: open it, read every record, build one index per record.
///
/// Indexes are returned in record order. The index list already built is
/// dropped (and thereby released) if a later record fails to parse.
fn load_file<B: IndexBuilder>(task: &LoadTask, builder: &B) -> Result<Vec<B::Index>, LoadError> {
    let mut source = FastaSource::open(&task.path).map_err(|source| LoadError::Open {
        path: task.path.clone(),
        source,
    })?;

    let mut indexes = Vec::new();
    loop {
        let record = source.next_record().map_err(|source| LoadError::Read {
            path: task.path.clone(),
            source,
        })?;
        let Some(record) = record else { break };
        indexes.push(builder.build(record));
    }

    debug!(
        "built {} indexes from {} (task {})",
        indexes.len(),
        task.path.display(),
        task.ordinal
    );

    Ok(indexes)
}
