/*!
# Priority Queues

The frontier of the Dijkstra-like algorithms is a [`PriorityQueue`] of [`PriorityItem`]s.
Queues never support decrease-key: improving a vertex simply enqueues it again, and the
consumer discards a dequeued entry whose cost disagrees with the current distance
(lazy deletion). Consequently `enqueue` must accept duplicates.

- [`BinaryHeapQueue`] is a binary min-heap and the default,
- [`LinearScanQueue`] keeps an unsorted vector and scans for the minimum, which is
  competitive for tiny or very dense frontiers.
*/

use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
};

use itertools::Itertools;

use crate::cost::Cost;

/// A queue entry: a vertex together with the cost it was offered at.
///
/// Equality only considers the vertex, ordering only considers the cost.
#[derive(Debug, Clone, Copy)]
pub struct PriorityItem<V, W> {
    pub vertex: V,
    pub cost: Cost<W>,
}

impl<V, W> PriorityItem<V, W> {
    pub fn new(vertex: V, cost: Cost<W>) -> Self {
        Self { vertex, cost }
    }
}

impl<V: PartialEq, W> PartialEq for PriorityItem<V, W> {
    fn eq(&self, other: &Self) -> bool {
        self.vertex == other.vertex
    }
}

impl<V: Eq, W> Eq for PriorityItem<V, W> {}

impl<V: Eq, W: PartialOrd> PartialOrd for PriorityItem<V, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V: Eq, W: PartialOrd> Ord for PriorityItem<V, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        // incomparable weights (NaN) are a precondition violation
        self.cost
            .partial_cmp(&other.cost)
            .unwrap_or(Ordering::Equal)
    }
}

/// A min-priority queue accepting duplicate entries
pub trait PriorityQueue<T>: Default {
    /// Inserts an item; duplicates are allowed
    fn enqueue(&mut self, item: T);

    /// Removes and returns a minimal item
    fn dequeue(&mut self) -> Option<T>;

    /// Returns a minimal item without removing it
    fn peek(&self) -> Option<&T>;

    /// Returns the number of stored items (including stale duplicates)
    fn len(&self) -> usize;

    /// Returns *true* if no items are stored
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes all items
    fn clear(&mut self);
}

/// Binary min-heap
#[derive(Debug, Clone)]
pub struct BinaryHeapQueue<T> {
    heap: BinaryHeap<Reverse<T>>,
}

impl<T: Ord> Default for BinaryHeapQueue<T> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }
}

impl<T: Ord> PriorityQueue<T> for BinaryHeapQueue<T> {
    fn enqueue(&mut self, item: T) {
        self.heap.push(Reverse(item));
    }

    fn dequeue(&mut self) -> Option<T> {
        self.heap.pop().map(|Reverse(item)| item)
    }

    fn peek(&self) -> Option<&T> {
        self.heap.peek().map(|Reverse(item)| item)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn clear(&mut self) {
        self.heap.clear();
    }
}

/// Unsorted vector with O(n) extraction
#[derive(Debug, Clone)]
pub struct LinearScanQueue<T> {
    items: Vec<T>,
}

impl<T> Default for LinearScanQueue<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Ord> PriorityQueue<T> for LinearScanQueue<T> {
    fn enqueue(&mut self, item: T) {
        self.items.push(item);
    }

    fn dequeue(&mut self) -> Option<T> {
        let idx = self.items.iter().position_min()?;
        Some(self.items.swap_remove(idx))
    }

    fn peek(&self) -> Option<&T> {
        self.items.iter().min()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}

/// The queue used by all algorithms unless overridden with `with_queue`
pub type DefaultQueue<V, W> = BinaryHeapQueue<PriorityItem<V, W>>;

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn drain<Q: PriorityQueue<PriorityItem<u32, i32>>>(mut queue: Q) -> Vec<(u32, Cost<i32>)> {
        for (v, c) in [(0, Cost::Finite(5)), (1, Cost::Infinite), (2, Cost::Finite(-1)), (3, Cost::Finite(5))] {
            queue.enqueue(PriorityItem::new(v, c));
        }
        assert_eq!(queue.len(), 4);
        assert_eq!(queue.peek().map(|i| i.vertex), Some(2));

        std::iter::from_fn(|| queue.dequeue())
            .map(|i| (i.vertex, i.cost))
            .collect_vec()
    }

    #[test]
    fn binary_heap_order() {
        let order = drain(BinaryHeapQueue::default());
        assert_eq!(order[0], (2, Cost::Finite(-1)));
        assert_eq!(order[1].1, Cost::Finite(5));
        assert_eq!(order[2].1, Cost::Finite(5));
        assert_eq!(order[3], (1, Cost::Infinite));
    }

    #[test]
    fn linear_scan_order() {
        let order = drain(LinearScanQueue::default());
        assert_eq!(order.iter().map(|(_, c)| *c).collect_vec(), vec![
            Cost::Finite(-1),
            Cost::Finite(5),
            Cost::Finite(5),
            Cost::Infinite
        ]);
    }

    #[test]
    fn duplicates_and_item_equality() {
        let mut queue = DefaultQueue::<u32, u32>::default();
        queue.enqueue(PriorityItem::new(7, Cost::Finite(3)));
        queue.enqueue(PriorityItem::new(7, Cost::Finite(1)));
        assert_eq!(queue.len(), 2);

        let first = queue.dequeue().unwrap();
        let second = queue.dequeue().unwrap();
        assert_eq!(first.cost, Cost::Finite(1));
        assert_eq!(first, second);
        assert!(queue.dequeue().is_none());

        queue.enqueue(PriorityItem::new(1, Cost::zero()));
        queue.clear();
        assert!(queue.is_empty());
    }
}
