//! Ordered priority queue with a pluggable urgency comparison.
//!
//! Items are kept sorted from most to least urgent. Among items of equal
//! urgency, those added earlier are dequeued first (FIFO).

use std::cmp::Ordering;
use std::collections::VecDeque;

/// Natural-order comparison: the larger item is the more urgent one.
pub type Natural<T> = fn(&T, &T) -> Ordering;

/// A sorted priority queue.
///
/// The urgency function returns [`Ordering::Greater`] when its first
/// argument is more urgent than its second. The default is the natural
/// ordering of `T`, so without a custom comparison the largest item comes
/// out first, like [`std::collections::BinaryHeap`].
///
/// Duplicates are permitted and kept as separate entries; callers that need
/// set semantics must check membership before adding.
pub struct PriorityQueue<T, F = Natural<T>> {
    items: VecDeque<T>,
    urgency: F,
}

impl<T: Ord> PriorityQueue<T> {
    /// Create an empty queue ordered by `T`'s natural ordering.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
            urgency: Ord::cmp,
        }
    }
}

impl<T: Ord> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, F> PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    /// Create an empty queue ordered by `urgency`.
    pub fn with_urgency(urgency: F) -> Self {
        Self {
            items: VecDeque::new(),
            urgency,
        }
    }

    /// Insert `item` after every entry that is at least as urgent.
    pub fn push(&mut self, item: T) {
        let at = self
            .items
            .partition_point(|x| (self.urgency)(&item, x) != Ordering::Greater);
        self.items.insert(at, item);
    }

    /// Insert every item in order. Returns `self` for chaining.
    pub fn add<I: IntoIterator<Item = T>>(&mut self, items: I) -> &mut Self {
        for item in items {
            self.push(item);
        }
        self
    }

    /// Remove and return the most urgent item.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// The most urgent item.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    /// The least urgent item.
    #[inline]
    pub fn rear(&self) -> Option<&T> {
        self.items.back()
    }

    /// The item at position `i` in dequeue order.
    #[inline]
    pub fn at(&self, i: usize) -> Option<&T> {
        self.items.get(i)
    }

    /// Remove the first item matching `pred`, returning it.
    pub fn remove_first(&mut self, pred: impl Fn(&T) -> bool) -> Option<T> {
        let i = self.items.iter().position(pred)?;
        self.items.remove(i)
    }

    /// Remove all items. Returns `self` for chaining.
    pub fn clear(&mut self) -> &mut Self {
        self.items.clear();
        self
    }

    /// Number of queued items.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the queue is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate in dequeue order without removing anything.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter()
    }
}

impl<T: PartialEq, F> PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    /// Remove the first item equal to `item`. Returns whether one was found.
    pub fn remove(&mut self, item: &T) -> bool {
        self.remove_first(|x| x == item).is_some()
    }
}
