//! Iterative-deepening A* (IDA*).
//!
//! Each round is a depth-first search that rejects any state whose estimated
//! total cost exceeds the current bound. A failed round raises the bound to
//! the smallest estimate it rejected. No node registry survives between
//! rounds: memory is proportional to the depth of the current path.
//!
//! The depth-first search runs on an explicit frame stack. The stack is also
//! the live path; on success it is read off directly as the solution.
//!
//! Each frame holds the successor list of its state until the frame is
//! popped, so memory is O(depth x branching factor) rather than O(depth).
//! Resuming a frame never calls `successors()` again, and reading the path
//! back needs no second enumeration either.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::error::Result;
use crate::options::{SearchAlgorithm, SearchOptions};
use crate::outcome::{SearchOutcome, SearchStats};
use crate::state::{Cost, PathStep, SearchState, StateTransition};

/// One state on the live path together with its pending successors.
struct Frame<S: SearchState> {
    state: S,
    cost_from_start: Cost,
    successors: Vec<StateTransition<S>>,
    /// Index of the next successor to try; the edge at `next - 1` is the
    /// one the path currently continues through.
    next: usize,
}

impl<S: SearchState> Frame<S> {
    fn expand(
        state: S,
        cost_from_start: Cost,
        options: &SearchOptions<S>,
        stats: &mut SearchStats,
    ) -> Result<Self> {
        stats.expanded += 1;
        options.check_budget(stats.expanded)?;
        let successors = state.successors();
        Ok(Self {
            state,
            cost_from_start,
            successors,
            next: 0,
        })
    }

    fn next_edge(&mut self) -> Option<usize> {
        if self.next < self.successors.len() {
            self.next += 1;
            Some(self.next - 1)
        } else {
            None
        }
    }

    fn step_taken(&self) -> PathStep<S> {
        PathStep::leaving(self.state.clone(), &self.successors[self.next - 1])
    }
}

/// Result of one bounded round.
enum Round<S: SearchState> {
    Found(Vec<PathStep<S>>),
    /// Smallest estimate that was rejected for exceeding the bound.
    Exceeded(Cost),
    /// Nothing was rejected and the goal was not reached.
    Exhausted,
}

/// Find a path from `start` to `goal` with iterative-deepening A*.
///
/// Uses memory proportional to the path depth at the price of re-expanding
/// states across rounds. The heuristic weight is applied at every evaluation,
/// including the initial bound.
///
/// `total_cost` is the bound of the round that reached the goal, also
/// reported in [`SearchStats::final_bound`]. For a consistent heuristic at
/// weight 1 it equals the summed cost of the path. With a heavier weight the
/// bound can exceed that sum; [`SearchOutcome::path_cost`] gives the cost of
/// the transitions actually taken.
///
/// # Errors
///
/// - [`Error::InvalidWeight`](crate::Error::InvalidWeight) if the options fail
///   validation.
/// - [`Error::ExpansionLimit`](crate::Error::ExpansionLimit) if the expansion
///   budget runs out (counted across all rounds).
pub fn iterative_search<S: SearchState>(
    start: &S,
    goal: &S,
    options: &SearchOptions<S>,
) -> Result<SearchOutcome<S>> {
    options.validate()?;
    if start == goal {
        return Ok(SearchOutcome::trivial());
    }

    debug!(
        algorithm = %SearchAlgorithm::IdaStar,
        weight = options.weight,
        heuristic_override = options.has_heuristic_override(),
        "starting search"
    );

    let mut stats = SearchStats::default();
    let mut bound = options.estimate(start, goal);
    loop {
        stats.rounds += 1;
        stats.final_bound = Some(bound);
        trace!(round = stats.rounds, bound, "starting bounded round");

        match bounded_round(start, goal, bound, options, &mut stats)? {
            Round::Found(path) => {
                let path_cost: Cost = path.iter().map(|step| step.cost).sum();
                debug!(
                    total_cost = bound,
                    path_cost,
                    steps = path.len(),
                    rounds = stats.rounds,
                    expanded = stats.expanded,
                    "search found goal"
                );
                return Ok(SearchOutcome::success(path, bound, stats));
            }
            Round::Exceeded(next_bound) => bound = next_bound,
            Round::Exhausted => {
                debug!(
                    rounds = stats.rounds,
                    expanded = stats.expanded,
                    "search exhausted graph without reaching goal"
                );
                return Ok(SearchOutcome::not_found(stats));
            }
        }
    }
}

fn bounded_round<S: SearchState>(
    start: &S,
    goal: &S,
    bound: Cost,
    options: &SearchOptions<S>,
    stats: &mut SearchStats,
) -> Result<Round<S>> {
    let root_estimate = options.estimate(start, goal);
    if root_estimate > bound {
        return Ok(Round::Exceeded(root_estimate));
    }

    let mut on_path: HashSet<S> = HashSet::new();
    on_path.insert(start.clone());
    let mut stack = vec![Frame::expand(start.clone(), 0.0, options, stats)?];
    let mut smallest_rejected: Option<Cost> = None;

    while let Some(frame) = stack.last_mut() {
        let Some(edge_index) = frame.next_edge() else {
            if let Some(done) = stack.pop() {
                on_path.remove(&done.state);
            }
            continue;
        };

        let top = stack.len() - 1;
        let parent_cost = stack[top].cost_from_start;
        let edge = &stack[top].successors[edge_index];
        stats.generated += 1;
        if on_path.contains(&edge.target) {
            continue;
        }

        let cost_from_start = parent_cost + edge.cost;
        let estimate = cost_from_start + options.estimate(&edge.target, goal);
        if estimate > bound {
            smallest_rejected = Some(smallest_rejected.map_or(estimate, |s| s.min(estimate)));
            continue;
        }

        if edge.target == *goal {
            return Ok(Round::Found(stack.iter().map(Frame::step_taken).collect()));
        }

        let target = edge.target.clone();
        on_path.insert(target.clone());
        let child = Frame::expand(target, cost_from_start, options, stats)?;
        stack.push(child);
    }

    Ok(match smallest_rejected {
        Some(next_bound) => Round::Exceeded(next_bound),
        None => Round::Exhausted,
    })
}
