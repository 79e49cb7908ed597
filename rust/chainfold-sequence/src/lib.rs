//! Singly-linked sequences with visitor and accumulator traversals.
//!
//! # Core Concepts
//!
//! ## Sequences
//!
//! A [`crate::sequence::Sequence`] is an ordered, append-only chain of nodes. Nodes live
//! in an arena owned by the sequence and are linked by index, so appending is
//! amortized O(1) and dropping the sequence releases the whole chain.
//!
//! ## Traversals
//!
//! The same single left-to-right walk serves two kinds of consumers:
//! - [`crate::visitor::Visitor`]: receives each element, then a completion call.
//! - [`crate::visitor::AccumulatorVisitor`]: receives each element together with one
//!   running accumulator, created empty by the traversal and returned to the caller.
//!
//! ## Transforms
//!
//! [`crate::transform`] builds running pairwise average, first difference, copy and
//! sum/count average on top of the accumulator traversal. Transforms producing a
//! new sequence grow it through a [`crate::builder::SequenceBuilder`].
//!
//! # Supporting Components
//!
//! - [`crate::random`]: random integer sequences for demos and tests.
//! - [`crate::printer`]: a printing visitor and a lock-step column writer.

pub mod builder;
pub mod printer;
pub mod random;
pub mod sequence;
pub mod transform;
pub mod visitor;
