//! Candidate pool container
//!
//! Holds the sequences still consistent with every piece of feedback seen so
//! far. Members keep their insertion order so seeded runs stay reproducible.

use crate::core::{Sequence, SequenceError};
use rustc_hash::FxHashSet;
use thiserror::Error;

/// Errors raised while building a pool
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolError {
    #[error("candidate pool is empty")]
    Empty,
    #[error("sequence {0} appears more than once in the pool")]
    Duplicate(Sequence),
    #[error("sequence {sequence} has {found} digits, expected {expected}")]
    LengthMismatch {
        sequence: Sequence,
        expected: usize,
        found: usize,
    },
    #[error(transparent)]
    Sequence(#[from] SequenceError),
}

/// A set of distinct, equal-length sequences
///
/// `members` fixes the order and `index` answers membership; both always hold
/// the same sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePool {
    members: Vec<Sequence>,
    index: FxHashSet<Sequence>,
    num_of_digits: usize,
}

impl CandidatePool {
    /// Build a pool, rejecting empty input, duplicates and mixed lengths
    ///
    /// The length of the first sequence fixes the pool's `num_of_digits`.
    ///
    /// # Errors
    /// Returns `PoolError` if the input is empty, contains the same sequence
    /// twice, or mixes sequence lengths.
    pub fn new(members: Vec<Sequence>) -> Result<Self, PoolError> {
        let num_of_digits = members.first().ok_or(PoolError::Empty)?.len();

        let mut index = FxHashSet::default();
        index.reserve(members.len());
        for &sequence in &members {
            if sequence.len() != num_of_digits {
                return Err(PoolError::LengthMismatch {
                    sequence,
                    expected: num_of_digits,
                    found: sequence.len(),
                });
            }
            if !index.insert(sequence) {
                return Err(PoolError::Duplicate(sequence));
            }
        }

        Ok(Self {
            members,
            index,
            num_of_digits,
        })
    }

    /// Length shared by every member
    #[inline]
    #[must_use]
    pub const fn num_of_digits(&self) -> usize {
        self.num_of_digits
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[must_use]
    pub fn contains(&self, sequence: &Sequence) -> bool {
        self.index.contains(sequence)
    }

    /// Members in pool order
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Sequence] {
        &self.members
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sequence> {
        self.members.iter()
    }

    /// Remove a sequence, returning whether it was present
    pub fn remove(&mut self, sequence: &Sequence) -> bool {
        if !self.index.remove(sequence) {
            return false;
        }
        if let Some(position) = self.members.iter().position(|s| s == sequence) {
            self.members.remove(position);
        }
        true
    }

    /// Keep only members matching the predicate
    pub fn retain<F: FnMut(&Sequence) -> bool>(&mut self, mut keep: F) {
        let index = &mut self.index;
        self.members.retain(|sequence| {
            let kept = keep(sequence);
            if !kept {
                index.remove(sequence);
            }
            kept
        });
    }
}

impl<'a> IntoIterator for &'a CandidatePool {
    type Item = &'a Sequence;
    type IntoIter = std::slice::Iter<'a, Sequence>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
