//! The contract every searchable domain implements.
//!
//! The graph is never materialised. Both engines discover it lazily by asking
//! each state for its outgoing transitions and for an estimate of the cost
//! still left to the target.

use std::fmt::Debug;
use std::hash::Hash;

use serde::Serialize;

/// Cost of a transition or path.
pub type Cost = f64;

/// A vertex of an implicit weighted state graph.
///
/// # Preconditions
///
/// The engines do not check these at runtime. Violating them can yield a
/// suboptimal or incorrect path, never a panic.
///
/// - Transition costs are finite and non-negative.
/// - [`estimate_cost`](SearchState::estimate_cost) never overestimates the true
///   remaining cost and satisfies the triangle inequality with edge costs.
/// - Equality is reflexive and consistent with `Hash`.
/// - `successors` returns the same edges every time it is called for the same
///   state.
pub trait SearchState: Clone + Eq + Hash {
    /// Label describing how one state leads to the next (e.g. a direction).
    type Transition: Clone + Debug;

    /// All states directly reachable from this one.
    ///
    /// An empty list marks a dead end. The engines may call this more than once
    /// per state and never cache the result across calls.
    fn successors(&self) -> Vec<StateTransition<Self>>;

    /// Estimated cost of reaching `target` from this state.
    fn estimate_cost(&self, target: &Self) -> Cost;
}

/// Outgoing edge produced by [`SearchState::successors`].
#[derive(Debug, Clone, PartialEq)]
pub struct StateTransition<S: SearchState> {
    /// State reached by taking this edge.
    pub target: S,
    /// Caller-defined label carried through to the result path unmodified.
    pub transition: S::Transition,
    /// Non-negative cost of taking the edge.
    pub cost: Cost,
}

impl<S: SearchState> StateTransition<S> {
    pub fn new(target: S, transition: S::Transition, cost: Cost) -> Self {
        Self {
            target,
            transition,
            cost,
        }
    }
}

/// One step of a solution path: the state the step leaves from, the transition
/// taken out of it and that transition's cost.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound(serialize = "S: Serialize, S::Transition: Serialize"))]
pub struct PathStep<S: SearchState> {
    pub state: S,
    pub transition: S::Transition,
    pub cost: Cost,
}

impl<S: SearchState> PathStep<S> {
    pub(crate) fn leaving(state: S, edge: &StateTransition<S>) -> Self {
        Self {
            state,
            transition: edge.transition.clone(),
            cost: edge.cost,
        }
    }
}
