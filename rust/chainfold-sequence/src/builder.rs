//! Growable output sequence used by accumulators.

use crate::sequence::{NodeRef, Sequence};
use crate::visitor::Accumulator;

/// A [`Sequence`] being grown by a fold in progress.
///
/// At any point the builder's content is a valid sequence, available through
/// [`SequenceBuilder::sequence`]. Appends attach after the current tail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceBuilder<T> {
    sequence: Sequence<T>,
}

impl<T> SequenceBuilder<T> {
    pub fn new() -> SequenceBuilder<T> {
        SequenceBuilder {
            sequence: Sequence::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> SequenceBuilder<T> {
        SequenceBuilder {
            sequence: Sequence::with_capacity(capacity),
        }
    }

    /// Appends `value`, same as [`Sequence::append`].
    pub fn add(&mut self, value: T) {
        self.sequence.append(value);
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Returns the sequence built so far.
    pub fn sequence(&self) -> &Sequence<T> {
        &self.sequence
    }

    /// Returns the most recently added node, or `None` if nothing was added yet.
    pub fn last(&self) -> Option<NodeRef<'_, T>> {
        self.sequence.tail()
    }

    pub fn build(self) -> Sequence<T> {
        self.sequence
    }
}

impl<T> Default for SequenceBuilder<T> {
    fn default() -> Self {
        SequenceBuilder::new()
    }
}

impl<T> Accumulator for SequenceBuilder<T> {
    fn empty() -> Self {
        SequenceBuilder::new()
    }
}

impl<T> From<SequenceBuilder<T>> for Sequence<T> {
    fn from(builder: SequenceBuilder<T>) -> Self {
        builder.build()
    }
}
