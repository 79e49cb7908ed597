//! The singly-linked [`Sequence`] container.
//!
//! Nodes are kept in an append-only arena owned by the sequence and are linked
//! through [`NodeId`] indices. Each node's `next` link is set exactly once, when
//! its successor is appended, and never changes afterwards. The sequence tracks
//! both its head and its tail, so appending is amortized O(1) without holding
//! aliasing references into the chain.

use std::collections::TryReserveError;
use std::fmt;
use std::iter::FusedIterator;

use crate::visitor::{self, AccumulatorVisitor, Visitor};

/// Index of a node within the arena of the [`Sequence`] that owns it.
///
/// Ids are only handed out by [`NodeRef::id`]; they cannot be built from a raw index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl From<NodeId> for usize {
    fn from(value: NodeId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone)]
struct Node<T> {
    data: T,
    next: Option<NodeId>,
}

/// An ordered, singly-linked chain of elements of type `T`.
///
/// A sequence is either empty (no head) or has a head and a tail reachable by
/// following `next` links. The chain never contains cycles and nodes are never
/// shared between sequences: dropping the sequence releases the whole chain.
///
/// Two traversal protocols are provided over the same left-to-right walk:
/// - [`Sequence::visit`] calls a [`Visitor`] for every element, then once on
///   completion.
/// - [`Sequence::accumulate`] threads a single, freshly created accumulator
///   through an [`AccumulatorVisitor`] and returns it.
///
/// # Examples
///
/// ```
/// use chainfold_sequence::sequence::Sequence;
/// use chainfold_sequence::transform::Diff;
///
/// let input: Sequence<i64> = [5, 8, 3, 3].into_iter().collect();
/// let diff = input.accumulate(&mut Diff);
/// assert_eq!(diff.sequence().iter().copied().collect::<Vec<_>>(), [0, 3, -5, 0]);
/// ```
#[derive(Clone)]
pub struct Sequence<T> {
    nodes: Vec<Node<T>>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
}

impl<T> Sequence<T> {
    /// Creates a new empty `Sequence`.
    pub fn new() -> Sequence<T> {
        Sequence {
            nodes: Vec::new(),
            head: None,
            tail: None,
        }
    }

    /// Creates a new empty `Sequence` with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Sequence<T> {
        Sequence {
            nodes: Vec::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    /// Creates a new empty `Sequence` with room for `capacity` nodes, or returns
    /// an error if that much memory cannot be reserved.
    pub fn try_with_capacity(capacity: usize) -> Result<Sequence<T>, TryReserveError> {
        let mut nodes = Vec::new();
        nodes.try_reserve_exact(capacity)?;
        Ok(Sequence {
            nodes,
            head: None,
            tail: None,
        })
    }

    /// Appends `value` after the current tail.
    ///
    /// On an empty sequence the new node becomes both head and tail.
    pub fn append(&mut self, value: T) {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            data: value,
            next: None,
        });
        match self.tail {
            Some(tail) => {
                let tail = &mut self.nodes[tail.0];
                debug_assert!(tail.next.is_none());
                tail.next = Some(id);
            }
            None => self.head = Some(id),
        }
        self.tail = Some(id);
    }

    /// Returns `true` if the sequence has no head.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of nodes reachable from the head.
    ///
    /// This walks the chain and is O(n).
    pub fn size(&self) -> usize {
        self.iter().count()
    }

    /// Returns a handle to the first node, or `None` if the sequence is empty.
    pub fn head(&self) -> Option<NodeRef<'_, T>> {
        self.head.map(|id| NodeRef { sequence: self, id })
    }

    /// Returns a handle to the last node, or `None` if the sequence is empty.
    pub fn tail(&self) -> Option<NodeRef<'_, T>> {
        self.tail.map(|id| NodeRef { sequence: self, id })
    }

    /// Returns a handle to the node with the given id, or `None` if the id is
    /// out of range for this sequence.
    ///
    /// Ids are positions in the owning sequence's arena and carry no identity of
    /// that sequence: an id taken from another sequence resolves to whatever node
    /// sits at the same position here.
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_, T>> {
        (id.0 < self.nodes.len()).then_some(NodeRef { sequence: self, id })
    }

    /// Returns an iterator over the elements, following links from the head.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            cursor: self.head,
        }
    }

    /// Walks the chain from head to end, calling `visitor.on_element` for every
    /// element in order and `visitor.on_complete` exactly once afterwards.
    ///
    /// `on_complete` is invoked even when the sequence is empty.
    pub fn visit<V>(&self, visitor: &mut V)
    where
        V: Visitor<T> + ?Sized,
    {
        visitor::drive_visit(self.iter(), visitor)
    }

    /// Folds the chain into a new accumulator.
    ///
    /// The accumulator is created with [`Accumulator::empty`](crate::visitor::Accumulator::empty)
    /// before the walk. The same instance is passed to every `on_element` call
    /// and to the final `on_complete` call, and is then returned by value.
    pub fn accumulate<V>(&self, visitor: &mut V) -> V::Accumulator
    where
        V: AccumulatorVisitor<T> + ?Sized,
    {
        visitor::drive_accumulate(self.iter(), visitor)
    }

    /// Verifies the internal consistency of the chain.
    ///
    /// # Panics
    ///
    /// Panics if the chain contains a cycle, if the tail is not the last node
    /// reachable from the head, or if some node is unreachable from the head.
    pub fn verify(&self) {
        assert_eq!(self.head.is_none(), self.tail.is_none());
        assert_eq!(self.head.is_none(), self.nodes.is_empty());

        let mut steps = 0;
        let mut last = None;
        let mut cursor = self.head;
        while let Some(id) = cursor {
            steps += 1;
            assert!(steps <= self.nodes.len(), "cycle detected in sequence");
            last = Some(id);
            cursor = self.nodes[id.0].next;
        }
        assert_eq!(last, self.tail, "tail is not the last reachable node");
        assert_eq!(steps, self.nodes.len(), "unreachable nodes in sequence");
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Sequence::new()
    }
}

impl<T> fmt::Debug for Sequence<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Sequence<T> {}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut sequence = Sequence::new();
        sequence.extend(iter);
        sequence
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.nodes.reserve(iter.size_hint().0);
        iter.for_each(|value| self.append(value));
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A read-only handle to a single node of a [`Sequence`].
///
/// Traversals started from a node run from that node to the end of the chain.
pub struct NodeRef<'a, T> {
    sequence: &'a Sequence<T>,
    id: NodeId,
}

impl<'a, T> NodeRef<'a, T> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn data(&self) -> &'a T {
        &self.sequence.nodes[self.id.0].data
    }

    /// Returns the successor of this node, if any.
    pub fn next(&self) -> Option<NodeRef<'a, T>> {
        self.sequence.nodes[self.id.0].next.map(|id| NodeRef {
            sequence: self.sequence,
            id,
        })
    }

    /// Returns an iterator over this node's element and all elements after it.
    pub fn iter(&self) -> Iter<'a, T> {
        Iter {
            nodes: &self.sequence.nodes,
            cursor: Some(self.id),
        }
    }

    /// Same as [`Sequence::visit`], starting at this node.
    pub fn visit<V>(&self, visitor: &mut V)
    where
        V: Visitor<T> + ?Sized,
    {
        visitor::drive_visit(self.iter(), visitor)
    }

    /// Same as [`Sequence::accumulate`], starting at this node.
    pub fn accumulate<V>(&self, visitor: &mut V) -> V::Accumulator
    where
        V: AccumulatorVisitor<T> + ?Sized,
    {
        visitor::drive_accumulate(self.iter(), visitor)
    }
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<T> fmt::Debug for NodeRef<'_, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("data", self.data())
            .finish()
    }
}

/// Iterator over the elements of a [`Sequence`], following `next` links.
pub struct Iter<'a, T> {
    nodes: &'a [Node<T>],
    cursor: Option<NodeId>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = &self.nodes[self.cursor?.0];
        self.cursor = node.next;
        Some(&node.data)
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            nodes: self.nodes,
            cursor: self.cursor,
        }
    }
}
