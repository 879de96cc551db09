//! Best-first (A*) search over an open/closed node set.

use tracing::debug;

use crate::error::{Error, Result};
use crate::frontier::Frontier;
use crate::node::{NodeId, NodeRegistry};
use crate::options::{SearchAlgorithm, SearchOptions};
use crate::outcome::{SearchOutcome, SearchStats};
use crate::state::{PathStep, SearchState};

/// Find the lowest-cost path from `start` to `goal` with A*.
///
/// Nodes are finalised when they leave the frontier as the current minimum.
/// With an admissible, consistent heuristic at weight 1 the returned path is
/// optimal; larger weights may return a costlier path after fewer expansions.
///
/// An unreachable goal is reported as `Ok` with `found == false`.
///
/// # Errors
///
/// - [`Error::InvalidWeight`] if the options fail validation.
/// - [`Error::ExpansionLimit`] if the expansion budget runs out.
/// - [`Error::MissingTransition`] if successor enumeration is not
///   deterministic and the path cannot be rebuilt.
pub fn search<S: SearchState>(
    start: &S,
    goal: &S,
    options: &SearchOptions<S>,
) -> Result<SearchOutcome<S>> {
    options.validate()?;
    if start == goal {
        return Ok(SearchOutcome::trivial());
    }

    debug!(
        algorithm = %SearchAlgorithm::AStar,
        weight = options.weight,
        heuristic_override = options.has_heuristic_override(),
        "starting search"
    );

    let mut registry = NodeRegistry::new();
    let mut frontier = Frontier::new();
    let mut stats = SearchStats {
        rounds: 1,
        ..SearchStats::default()
    };

    let root_estimate = options.estimate(start, goal);
    let root = registry.insert(start.clone(), 0.0, root_estimate, None);
    frontier.insert(root, root_estimate);

    while let Some(current) = frontier.extract_min() {
        if registry.get(current).state == *goal {
            let total_cost = registry.get(current).cost_from_start;
            let path = reconstruct_path(&registry, current)?;
            debug!(
                total_cost,
                steps = path.len(),
                expanded = stats.expanded,
                discovered = registry.len(),
                "search found goal"
            );
            return Ok(SearchOutcome::success(path, total_cost, stats));
        }

        registry.close(current);
        stats.expanded += 1;
        options.check_budget(stats.expanded)?;

        let cost_from_start = registry.get(current).cost_from_start;
        let successors = registry.get(current).state.successors();
        for edge in successors {
            stats.generated += 1;
            let tentative = cost_from_start + edge.cost;

            match registry.lookup(&edge.target) {
                Some(id) if registry.is_closed(id) => {}
                Some(id) => {
                    if tentative < registry.get(id).cost_from_start {
                        let estimate = tentative + options.estimate(&edge.target, goal);
                        let node = registry.get_mut(id);
                        node.cost_from_start = tentative;
                        node.estimated_total_cost = estimate;
                        node.parent = Some(current);
                        frontier.decrease_priority(id, estimate);
                    }
                }
                None => {
                    let estimate = tentative + options.estimate(&edge.target, goal);
                    let id = registry.insert(edge.target, tentative, estimate, Some(current));
                    frontier.insert(id, estimate);
                }
            }
        }
    }

    debug!(
        expanded = stats.expanded,
        discovered = registry.len(),
        "search exhausted frontier without reaching goal"
    );
    Ok(SearchOutcome::not_found(stats))
}

/// Walk parent links back from `goal` and recover each step's transition by
/// re-enumerating the successors of the state it leaves from.
fn reconstruct_path<S: SearchState>(
    registry: &NodeRegistry<S>,
    goal: NodeId,
) -> Result<Vec<PathStep<S>>> {
    let states = registry.lineage(goal);
    states
        .windows(2)
        .enumerate()
        .map(|(step, pair)| {
            let (from, to) = (&pair[0], &pair[1]);
            // Parallel edges are possible; the cheapest one is the one the
            // node's recorded cost came from.
            from.successors()
                .into_iter()
                .filter(|edge| edge.target == *to)
                .min_by(|a, b| a.cost.total_cmp(&b.cost))
                .map(|edge| PathStep::leaving(from.clone(), &edge))
                .ok_or(Error::MissingTransition { step })
        })
        .collect()
}
