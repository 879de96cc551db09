//! Search strategies behind a common trait.
//!
//! The engines are plain functions ([`search`] and [`iterative_search`]); the
//! planners wrap them so callers can choose a strategy at runtime, e.g. from a
//! [`SearchConfig`](crate::SearchConfig).

use crate::astar::search;
use crate::error::Result;
use crate::idastar::iterative_search;
use crate::options::{SearchAlgorithm, SearchOptions};
use crate::outcome::SearchOutcome;
use crate::state::SearchState;

/// A shortest-path strategy over the [`SearchState`] contract.
pub trait SearchPlanner<S: SearchState> {
    /// The algorithm identifier for this planner.
    fn algorithm(&self) -> SearchAlgorithm;

    /// Run the search from `start` to `goal`.
    fn find_path(&self, start: &S, goal: &S, options: &SearchOptions<S>)
        -> Result<SearchOutcome<S>>;
}

/// Best-first planner; memory grows with the number of discovered states.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStarPlanner;

impl<S: SearchState> SearchPlanner<S> for AStarPlanner {
    fn algorithm(&self) -> SearchAlgorithm {
        SearchAlgorithm::AStar
    }

    fn find_path(
        &self,
        start: &S,
        goal: &S,
        options: &SearchOptions<S>,
    ) -> Result<SearchOutcome<S>> {
        search(start, goal, options)
    }
}

/// Iterative-deepening planner; memory grows with path depth only.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdaStarPlanner;

impl<S: SearchState> SearchPlanner<S> for IdaStarPlanner {
    fn algorithm(&self) -> SearchAlgorithm {
        SearchAlgorithm::IdaStar
    }

    fn find_path(
        &self,
        start: &S,
        goal: &S,
        options: &SearchOptions<S>,
    ) -> Result<SearchOutcome<S>> {
        iterative_search(start, goal, options)
    }
}

/// Select the planner for `algorithm`.
pub fn select_planner<S: SearchState>(algorithm: SearchAlgorithm) -> Box<dyn SearchPlanner<S>> {
    match algorithm {
        SearchAlgorithm::AStar => Box::new(AStarPlanner),
        SearchAlgorithm::IdaStar => Box::new(IdaStarPlanner),
    }
}

/// Run the search selected by `algorithm`.
///
/// # Example
///
/// ```ignore
/// use pathsearch_lib::{find_path, SearchConfig, SearchOptions};
///
/// let config = SearchConfig::from_json_str(r#"{ "algorithm": "ida-star" }"#)?;
/// let options = SearchOptions::from_config(&config);
/// let outcome = find_path(&start, &goal, config.algorithm, &options)?;
/// if outcome.found {
///     println!("cost {} over {} steps", outcome.total_cost, outcome.len());
/// }
/// ```
pub fn find_path<S: SearchState>(
    start: &S,
    goal: &S,
    algorithm: SearchAlgorithm,
    options: &SearchOptions<S>,
) -> Result<SearchOutcome<S>> {
    select_planner(algorithm).find_path(start, goal, options)
}
