//! Generic shortest-path search over implicit weighted state graphs.
//!
//! Callers describe their graph by implementing [`SearchState`]: successor
//! enumeration plus an admissible cost heuristic. Two interchangeable engines
//! run over that contract:
//!
//! - [`search`]: best-first A* with an indexed open set and per-call node arena.
//! - [`iterative_search`]: IDA*, re-exploring depth-first under a rising cost
//!   bound with memory proportional to path depth.
//!
//! Both accept [`SearchOptions`] to override the heuristic, weight it for
//! faster suboptimal search, or cap the number of expansions. [`find_path`]
//! picks an engine at runtime.
//!

#![deny(warnings)]

pub mod astar;
pub mod error;
pub mod frontier;
pub mod idastar;
pub mod node;
pub mod options;
pub mod outcome;
pub mod planner;
pub mod state;

pub use astar::search;
pub use error::{Error, Result};
pub use idastar::iterative_search;
pub use options::{Heuristic, SearchAlgorithm, SearchConfig, SearchOptions};
pub use outcome::{SearchOutcome, SearchStats};
pub use planner::{find_path, select_planner, AStarPlanner, IdaStarPlanner, SearchPlanner};
pub use state::{Cost, PathStep, SearchState, StateTransition};
