use serde::Serialize;

use crate::state::{Cost, PathStep, SearchState};

/// Counters collected while a search runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SearchStats {
    /// States whose successors were enumerated.
    pub expanded: u64,
    /// Successor edges examined.
    pub generated: u64,
    /// Search rounds; always 1 for best-first search.
    pub rounds: u64,
    /// Last bound used by iterative deepening.
    pub final_bound: Option<Cost>,
}

/// Result of a search call.
///
/// When `found` is `false` the path is empty and `total_cost` carries no
/// meaning.
#[derive(Debug, Clone, Serialize)]
#[serde(bound(serialize = "S: Serialize, S::Transition: Serialize"))]
pub struct SearchOutcome<S: SearchState> {
    /// Steps from the start state up to, but excluding, the goal.
    pub path: Vec<PathStep<S>>,
    pub total_cost: Cost,
    pub found: bool,
    pub stats: SearchStats,
}

impl<S: SearchState> SearchOutcome<S> {
    /// Outcome for a start state that already is the goal.
    pub(crate) fn trivial() -> Self {
        Self {
            path: Vec::new(),
            total_cost: 0.0,
            found: true,
            stats: SearchStats::default(),
        }
    }

    pub(crate) fn success(path: Vec<PathStep<S>>, total_cost: Cost, stats: SearchStats) -> Self {
        Self {
            path,
            total_cost,
            found: true,
            stats,
        }
    }

    pub(crate) fn not_found(stats: SearchStats) -> Self {
        Self {
            path: Vec::new(),
            total_cost: 0.0,
            found: false,
            stats,
        }
    }

    /// Split into the `(path, total_cost, found)` triple.
    pub fn into_parts(self) -> (Vec<PathStep<S>>, Cost, bool) {
        (self.path, self.total_cost, self.found)
    }

    /// Transition labels along the path, in order.
    pub fn transitions(&self) -> impl Iterator<Item = &S::Transition> + '_ {
        self.path.iter().map(|step| &step.transition)
    }

    /// Summed cost of the transitions along the path.
    ///
    /// Equal to `total_cost` for best-first search. Iterative deepening
    /// reports its final bound as `total_cost`, which a weighted heuristic
    /// can push above this value.
    pub fn path_cost(&self) -> Cost {
        self.path.iter().map(|step| step.cost).sum()
    }

    /// Number of transitions in the path.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}
