//! Per-call node store for best-first search.
//!
//! Nodes live in an arena and refer to their parent by [`NodeId`], so the
//! parent chain never forms an ownership cycle.

use std::collections::HashMap;

use crate::state::{Cost, SearchState};

/// Stable handle of a node inside a [`NodeRegistry`].
pub type NodeId = usize;

/// Whether a node is still waiting in the frontier or has been finalised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeStatus {
    Open,
    Closed,
}

/// Bookkeeping for one discovered state.
#[derive(Debug, Clone)]
pub struct SearchNode<S> {
    pub state: S,
    /// Cheapest known cost from the start state.
    pub cost_from_start: Cost,
    /// `cost_from_start` plus the weighted heuristic; the frontier key.
    pub estimated_total_cost: Cost,
    pub parent: Option<NodeId>,
    pub status: NodeStatus,
}

/// Arena of every node discovered during a single search call.
#[derive(Debug)]
pub struct NodeRegistry<S> {
    nodes: Vec<SearchNode<S>>,
    index: HashMap<S, NodeId>,
}

impl<S: SearchState> NodeRegistry<S> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Handle of the node for `state`, if it has been discovered.
    pub fn lookup(&self, state: &S) -> Option<NodeId> {
        self.index.get(state).copied()
    }

    /// Register a newly discovered, open state.
    pub fn insert(
        &mut self,
        state: S,
        cost_from_start: Cost,
        estimated_total_cost: Cost,
        parent: Option<NodeId>,
    ) -> NodeId {
        let id = self.nodes.len();
        self.index.insert(state.clone(), id);
        self.nodes.push(SearchNode {
            state,
            cost_from_start,
            estimated_total_cost,
            parent,
            status: NodeStatus::Open,
        });
        id
    }

    pub fn get(&self, id: NodeId) -> &SearchNode<S> {
        &self.nodes[id]
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchNode<S> {
        &mut self.nodes[id]
    }

    pub fn close(&mut self, id: NodeId) {
        self.nodes[id].status = NodeStatus::Closed;
    }

    pub fn is_closed(&self, id: NodeId) -> bool {
        self.nodes[id].status == NodeStatus::Closed
    }

    /// States from the root down to `id`, following parent links.
    pub fn lineage(&self, id: NodeId) -> Vec<S> {
        let mut states = Vec::new();
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = &self.nodes[node_id];
            states.push(node.state.clone());
            current = node.parent;
        }
        states.reverse();
        states
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<S: SearchState> Default for NodeRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}
