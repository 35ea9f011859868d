//! The process-wide ordered collection of sequence indexes.

use crate::core::index::SequenceIndex;

/// All indexes built during one run, ordered first by the originating file's
/// position on the command line, then by record position within that file.
///
/// The ordering is a property of how the collection is filled: the
/// aggregation step appends per-file results strictly in submission order,
/// after every worker has finished, so it holds regardless of which worker
/// completed first.
///
/// Owns its handles: dropping the collection releases every index exactly
/// once.
#[derive(Debug, Default)]
pub struct IndexCollection {
    indexes: Vec<SequenceIndex>,
}

impl IndexCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one file's indexes, in the order they were built.
    ///
    /// Takes ownership of every handle; the worker's private list is consumed
    /// by the move.
    pub fn append_file(&mut self, indexes: Vec<SequenceIndex>) {
        self.indexes.extend(indexes);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.indexes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indexes.is_empty()
    }

    #[must_use]
    pub fn get(&self, position: usize) -> Option<&SequenceIndex> {
        self.indexes.get(position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SequenceIndex> + '_ {
        self.indexes.iter()
    }
}

impl<'a> IntoIterator for &'a IndexCollection {
    type Item = &'a SequenceIndex;
    type IntoIter = std::slice::Iter<'a, SequenceIndex>;

    fn into_iter(self) -> Self::IntoIter {
        self.indexes.iter()
    }
}
