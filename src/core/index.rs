//! Per-sequence search indexes.
//!
//! Each record of each input file gets its own [`SequenceIndex`]: the record
//! name, the raw sequence bytes, and a suffix array over those bytes. The
//! handle is an owned resource with single-owner move semantics; dropping it
//! releases the index, so every handle is released exactly once no matter
//! which exit path the process takes.
//!
//! Construction sits behind the [`IndexBuilder`] trait so the load pipeline
//! can be exercised with instrumented builders in tests.

use bio::data_structures::suffix_array::{suffix_array, RawSuffixArray};

use crate::parsing::fasta::SequenceRecord;

/// Sentinel appended for suffix-array construction; must sort below every
/// sequence character.
const SENTINEL: u8 = b'$';

/// An owned, queryable index over one sequence record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceIndex {
    name: String,
    sequence: Vec<u8>,
    suffix_array: RawSuffixArray,
}

impl SequenceIndex {
    /// Record name from the FASTA definition line.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw sequence bytes this index was built from.
    #[must_use]
    pub fn sequence(&self) -> &[u8] {
        &self.sequence
    }

    /// Sequence length in bases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// The suffix array, including the terminal sentinel position.
    #[must_use]
    pub fn suffix_array(&self) -> &[usize] {
        &self.suffix_array
    }
}

/// Builds one index per sequence record.
///
/// Implementations must be pure functions of the record contents: the index
/// built for given bytes is identical regardless of which other workers are
/// running concurrently.
pub trait IndexBuilder: Send + Sync + 'static {
    type Index: Send + 'static;

    fn build(&self, record: SequenceRecord) -> Self::Index;
}

/// The production builder: suffix arrays via `bio`.
#[derive(Debug, Default)]
pub struct SuffixArrayBuilder;

impl IndexBuilder for SuffixArrayBuilder {
    type Index = SequenceIndex;

    fn build(&self, record: SequenceRecord) -> SequenceIndex {
        let SequenceRecord { name, sequence } = record;

        // The construction algorithm requires a terminal sentinel; it is not
        // part of the stored sequence.
        let mut text = Vec::with_capacity(sequence.len() + 1);
        text.extend_from_slice(&sequence);
        text.push(SENTINEL);
        let suffix_array = suffix_array(&text);

        SequenceIndex {
            name,
            sequence,
            suffix_array,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_keeps_name_and_sequence() {
        let index = SuffixArrayBuilder.build(SequenceRecord::new("chr1", b"ACGTACGT".to_vec()));
        assert_eq!(index.name(), "chr1");
        assert_eq!(index.sequence(), b"ACGTACGT");
        assert_eq!(index.len(), 8);
        // One entry per suffix plus the sentinel
        assert_eq!(index.suffix_array().len(), 9);
    }

    #[test]
    fn test_build_is_pure() {
        let record = SequenceRecord::new("chr1", b"GATTACA".to_vec());
        let a = SuffixArrayBuilder.build(record.clone());
        let b = SuffixArrayBuilder.build(record);
        assert_eq!(a, b);
    }

    #[test]
    fn test_suffix_array_orders_suffixes() {
        // "ABAB$" suffixes sorted: $ < AB$ < ABAB$ < B$ < BAB$
        let index = SuffixArrayBuilder.build(SequenceRecord::new("r", b"ABAB".to_vec()));
        assert_eq!(index.suffix_array(), &[4, 2, 0, 3, 1]);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = SuffixArrayBuilder.build(SequenceRecord::new("chr1", b"ACGT".to_vec()));
        let copy = original.clone();
        drop(original);
        assert_eq!(copy.sequence(), b"ACGT");
    }

    #[test]
    fn test_empty_record() {
        let index = SuffixArrayBuilder.build(SequenceRecord::new("empty", Vec::new()));
        assert!(index.is_empty());
        assert_eq!(index.suffix_array(), &[0]);
    }
}
