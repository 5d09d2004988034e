use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A min-priority queue over `(item, priority)` pairs
///
/// There is no decrease-key: pushing an item again with a better priority
/// leaves the old entry in place, and the caller skips it when it surfaces.
/// Entries with equal priority pop smallest item first.
#[derive(Debug)]
pub struct MinQueue<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    heap: BinaryHeap<Reverse<(P, V)>>,
}

impl<V, P> Default for MinQueue<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, P> MinQueue<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    pub fn new() -> Self {
        MinQueue {
            heap: BinaryHeap::new(),
        }
    }

    /// Queue with room for `capacity` entries before reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        MinQueue {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn push(&mut self, item: V, priority: P) {
        self.heap.push(Reverse((priority, item)));
    }

    /// Removes the entry with the smallest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap.pop().map(|Reverse((priority, item))| (item, priority))
    }

}

#[cfg(test)]
mod tests {
    use super::MinQueue;

    #[test]
    fn pops_in_priority_then_item_order() {
        let mut queue = MinQueue::new();
        queue.push(4usize, 7u32);
        queue.push(2, 3);
        queue.push(9, 3);
        queue.push(1, 5);

        assert_eq!(queue.len(), 4);
        let order: Vec<_> = std::iter::from_fn(|| queue.pop()).collect();
        assert_eq!(order, vec![(2, 3), (9, 3), (1, 5), (4, 7)]);
        assert!(queue.is_empty());
    }

    #[test]
    fn keeps_stale_entries() {
        let mut queue = MinQueue::with_capacity(1);
        queue.push(0usize, 10i64);
        queue.push(0, 4);
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.pop(), Some((0, 4)));
        assert_eq!(queue.pop(), Some((0, 10)));
    }
}
