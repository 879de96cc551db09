//! Open set for best-first search.
//!
//! An indexed binary min-heap: besides the heap array it keeps the current
//! heap position of every node, so a node whose estimate drops can be moved
//! up in O(log n) instead of being pushed a second time.

use std::cmp::Ordering;

use crate::node::NodeId;
use crate::state::Cost;

#[derive(Debug, Clone, Copy)]
struct FrontierEntry {
    node: NodeId,
    priority: Cost,
    /// Stamped on insert and on every priority decrease.
    order: u64,
}

impl FrontierEntry {
    fn cmp_key(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| self.order.cmp(&other.order))
    }
}

/// Min-priority frontier over node handles keyed by estimated total cost.
///
/// Entries with equal priority leave in FIFO order of their last insertion or
/// priority decrease.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: Vec<FrontierEntry>,
    /// Heap index of each node, indexed by `NodeId`; `None` once popped or
    /// never inserted.
    positions: Vec<Option<usize>>,
    next_order: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node that is not currently in the frontier.
    pub fn insert(&mut self, node: NodeId, priority: Cost) {
        debug_assert!(!self.contains(node), "node {node} inserted twice");
        if self.positions.len() <= node {
            self.positions.resize(node + 1, None);
        }
        let index = self.heap.len();
        let order = self.stamp();
        self.heap.push(FrontierEntry {
            node,
            priority,
            order,
        });
        self.positions[node] = Some(index);
        self.sift_up(index);
    }

    /// Remove and return the node with the smallest priority, or `None` when
    /// the frontier is exhausted.
    pub fn extract_min(&mut self) -> Option<NodeId> {
        let last = self.heap.len().checked_sub(1)?;
        self.swap(0, last);
        let entry = self.heap.pop()?;
        self.positions[entry.node] = None;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some(entry.node)
    }

    /// Lower the priority of a node already in the frontier and restore heap
    /// order. Returns `false` if the node is not in the frontier.
    pub fn decrease_priority(&mut self, node: NodeId, priority: Cost) -> bool {
        let Some(index) = self.position(node) else {
            return false;
        };
        let order = self.stamp();
        let entry = &mut self.heap[index];
        entry.priority = priority;
        entry.order = order;
        let index = self.sift_up(index);
        self.sift_down(index);
        true
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.position(node).is_some()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn position(&self, node: NodeId) -> Option<usize> {
        self.positions.get(node).copied().flatten()
    }

    fn stamp(&mut self) -> u64 {
        let order = self.next_order;
        self.next_order += 1;
        order
    }

    fn less(&self, a: usize, b: usize) -> bool {
        self.heap[a].cmp_key(&self.heap[b]) == Ordering::Less
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions[self.heap[a].node] = Some(a);
        self.positions[self.heap[b].node] = Some(b);
    }

    fn sift_up(&mut self, mut index: usize) -> usize {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.less(index, parent) {
                break;
            }
            self.swap(index, parent);
            index = parent;
        }
        index
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;
            if left < len && self.less(left, smallest) {
                smallest = left;
            }
            if right < len && self.less(right, smallest) {
                smallest = right;
            }
            if smallest == index {
                return;
            }
            self.swap(index, smallest);
            index = smallest;
        }
    }
}
