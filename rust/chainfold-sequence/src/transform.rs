//! Derived transforms expressed as [`AccumulatorVisitor`] implementations.
//!
//! Each transform is a stateless visitor type paired with an accumulator record
//! that owns the transform's output:
//!
//! | Visitor            | Accumulator             | Output                                      |
//! |--------------------|-------------------------|---------------------------------------------|
//! | [`RunningAverage`] | [`RunningAverageState`] | `[x0, (x0 + x1) / 2, (x1 + x2) / 2, ...]`   |
//! | [`Diff`]           | [`DiffState`]           | `[0, x1 - x0, x2 - x1, ...]`                |
//! | [`Collect`]        | [`SequenceBuilder`]     | a copy of the input                         |
//! | [`Average`]        | [`SumCount`]            | no sequence; `sum / count`                  |
//!
//! Arithmetic uses the element type's native operators, so integer division
//! truncates toward zero.
//!
//! Transforms compose by accumulating over the output sequence of a previous
//! transform:
//!
//! ```
//! use chainfold_sequence::sequence::Sequence;
//! use chainfold_sequence::transform::{Diff, RunningAverage};
//!
//! let input: Sequence<i64> = [5, 8, 3].into_iter().collect();
//! let diff = input.accumulate(&mut Diff);
//! let smoothed = diff.sequence().accumulate(&mut RunningAverage);
//! assert_eq!(smoothed.sequence().iter().copied().collect::<Vec<_>>(), [0, 1, -1]);
//! ```

use chainfold_common::Result;
use chainfold_common::error::Error;
use num_traits::{Num, NumCast, Zero};

use crate::builder::SequenceBuilder;
use crate::sequence::Sequence;
use crate::visitor::{Accumulator, AccumulatorVisitor};

/// Output builder plus the previous raw input value.
///
/// Shared record shape of the pairwise transforms ([`RunningAverage`], [`Diff`]).
/// The previous value always holds the last *input* element, not the last output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairwiseState<T> {
    builder: SequenceBuilder<T>,
    prev_value: T,
}

pub type RunningAverageState<T> = PairwiseState<T>;

pub type DiffState<T> = PairwiseState<T>;

impl<T> PairwiseState<T> {
    pub fn builder(&self) -> &SequenceBuilder<T> {
        &self.builder
    }

    /// The last input element seen, or zero before the first one.
    pub fn prev_value(&self) -> &T {
        &self.prev_value
    }

    pub fn sequence(&self) -> &Sequence<T> {
        self.builder.sequence()
    }

    pub fn into_sequence(self) -> Sequence<T> {
        self.builder.build()
    }
}

impl<T: Zero> Accumulator for PairwiseState<T> {
    fn empty() -> Self {
        PairwiseState {
            builder: SequenceBuilder::new(),
            prev_value: T::zero(),
        }
    }
}

/// Running pairwise average: the first element is passed through, every
/// following element is averaged with its predecessor.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunningAverage;

impl<T> AccumulatorVisitor<T> for RunningAverage
where
    T: Num + Copy,
{
    type Accumulator = RunningAverageState<T>;

    fn on_element(&mut self, value: &T, accumulator: &mut Self::Accumulator) {
        let value = *value;
        if accumulator.builder.is_empty() {
            accumulator.builder.add(value);
        } else {
            let two = T::one() + T::one();
            accumulator
                .builder
                .add((accumulator.prev_value + value) / two);
        }
        accumulator.prev_value = value;
    }
}

/// First difference: zero for the first element, then the difference between
/// every element and its predecessor.
#[derive(Debug, Clone, Copy, Default)]
pub struct Diff;

impl<T> AccumulatorVisitor<T> for Diff
where
    T: Num + Copy,
{
    type Accumulator = DiffState<T>;

    fn on_element(&mut self, value: &T, accumulator: &mut Self::Accumulator) {
        let value = *value;
        if accumulator.builder.is_empty() {
            accumulator.builder.add(T::zero());
        } else {
            accumulator.builder.add(value - accumulator.prev_value);
        }
        accumulator.prev_value = value;
    }
}

/// Appends every element to a new output sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct Collect;

impl<T: Clone> AccumulatorVisitor<T> for Collect {
    type Accumulator = SequenceBuilder<T>;

    fn on_element(&mut self, value: &T, accumulator: &mut SequenceBuilder<T>) {
        accumulator.add(value.clone());
    }
}

/// Running sum and element count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SumCount<T> {
    sum: T,
    count: usize,
}

impl<T: Copy> SumCount<T> {
    pub fn sum(&self) -> T {
        self.sum
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

impl<T> SumCount<T>
where
    T: Num + Copy + NumCast,
{
    /// Returns `sum / count` using the element type's division.
    ///
    /// Fails with [`ErrorKind::EmptyInput`](chainfold_common::error::ErrorKind::EmptyInput)
    /// when no element was accumulated, and with `InvalidArgument` when the
    /// count does not fit into `T`.
    pub fn average(&self) -> Result<T> {
        if self.count == 0 {
            return Err(Error::empty_input("average"));
        }
        let count = <T as NumCast>::from(self.count).ok_or_else(|| {
            Error::invalid_arg("count", "element count is not representable in the element type")
        })?;
        Ok(self.sum / count)
    }
}

impl<T: Zero> Accumulator for SumCount<T> {
    fn empty() -> Self {
        SumCount {
            sum: T::zero(),
            count: 0,
        }
    }
}

/// Sum/count accumulation, see [`SumCount::average`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Average;

impl<T> AccumulatorVisitor<T> for Average
where
    T: Num + Copy,
{
    type Accumulator = SumCount<T>;

    fn on_element(&mut self, value: &T, accumulator: &mut SumCount<T>) {
        accumulator.sum = accumulator.sum + *value;
        accumulator.count += 1;
    }
}
