//! Traversal protocols driven by [`Sequence`](crate::sequence::Sequence).
//!
//! A single left-to-right walk serves two kinds of consumers:
//!
//! - [`Visitor`]: side-effecting consumers (printing, counting). Any
//!   `FnMut(&T)` closure is a visitor.
//! - [`AccumulatorVisitor`]: fold-style consumers that update one running
//!   [`Accumulator`] across the whole walk. The traversal creates the
//!   accumulator with [`Accumulator::empty`] and hands it back to the caller.

/// Receives every element of a traversal, then a completion call.
pub trait Visitor<T: ?Sized> {
    /// Called once per element, in sequence order.
    fn on_element(&mut self, value: &T);

    /// Called exactly once after the last element, including for empty sequences.
    fn on_complete(&mut self) {}
}

impl<T, F> Visitor<T> for F
where
    T: ?Sized,
    F: FnMut(&T),
{
    fn on_element(&mut self, value: &T) {
        self(value)
    }
}

/// Accumulator state that a traversal can create before the walk begins.
pub trait Accumulator {
    /// Returns the empty (zero) state of the accumulator.
    fn empty() -> Self;
}

/// Receives every element of a traversal together with the running accumulator.
pub trait AccumulatorVisitor<T: ?Sized> {
    type Accumulator: Accumulator;

    /// Called once per element, in sequence order, always with the same accumulator.
    fn on_element(&mut self, value: &T, accumulator: &mut Self::Accumulator);

    /// Called exactly once after the last element, including for empty sequences.
    fn on_complete(&mut self, _accumulator: &mut Self::Accumulator) {}
}

pub(crate) fn drive_visit<'a, T, I, V>(elements: I, visitor: &mut V)
where
    T: 'a,
    I: Iterator<Item = &'a T>,
    V: Visitor<T> + ?Sized,
{
    let mut count = 0usize;
    for value in elements {
        visitor.on_element(value);
        count += 1;
    }
    visitor.on_complete();
    log::trace!("visit completed after {count} elements");
}

pub(crate) fn drive_accumulate<'a, T, I, V>(elements: I, visitor: &mut V) -> V::Accumulator
where
    T: 'a,
    I: Iterator<Item = &'a T>,
    V: AccumulatorVisitor<T> + ?Sized,
{
    let mut accumulator = V::Accumulator::empty();
    let mut count = 0usize;
    for value in elements {
        visitor.on_element(value, &mut accumulator);
        count += 1;
    }
    visitor.on_complete(&mut accumulator);
    log::trace!(
        "accumulate into {} completed after {count} elements",
        std::any::type_name::<V::Accumulator>()
    );
    accumulator
}
