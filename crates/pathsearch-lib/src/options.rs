//! Per-call search configuration.
//!
//! [`SearchConfig`] is the plain, serialisable part (algorithm, weight, budget)
//! that can be loaded from JSON. [`SearchOptions`] adds the runtime-only
//! heuristic override and is what the engines consume.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::state::{Cost, SearchState};

/// Supported search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SearchAlgorithm {
    /// Best-first search over an open/closed node set.
    #[default]
    #[serde(rename = "a-star")]
    AStar,
    /// Iterative deepening with a tightening cost bound.
    #[serde(rename = "ida-star")]
    IdaStar,
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            SearchAlgorithm::AStar => "a-star",
            SearchAlgorithm::IdaStar => "ida-star",
        };
        f.write_str(value)
    }
}

impl FromStr for SearchAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a-star" | "astar" | "a*" => Ok(SearchAlgorithm::AStar),
            "ida-star" | "idastar" | "ida*" => Ok(SearchAlgorithm::IdaStar),
            _ => Err(Error::UnknownAlgorithm {
                name: s.to_string(),
            }),
        }
    }
}

/// Serialisable search settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub algorithm: SearchAlgorithm,
    /// Multiplier applied to every heuristic evaluation.
    pub weight: f64,
    /// Stop with [`Error::ExpansionLimit`] after this many expansions.
    pub max_expansions: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            algorithm: SearchAlgorithm::default(),
            weight: 1.0,
            max_expansions: None,
        }
    }
}

impl SearchConfig {
    /// Parse settings from a JSON document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Heuristic override: `(state, goal) -> estimated remaining cost`.
pub type Heuristic<S> = Arc<dyn Fn(&S, &S) -> Cost + Send + Sync>;

/// Options consumed by both engines for a single search call.
pub struct SearchOptions<S> {
    /// Multiplier applied to every heuristic evaluation. Values above 1 trade
    /// optimality for fewer expansions.
    pub weight: f64,
    /// Stop with [`Error::ExpansionLimit`] after this many expansions.
    pub max_expansions: Option<u64>,
    heuristic: Option<Heuristic<S>>,
}

impl<S: SearchState> SearchOptions<S> {
    pub fn new() -> Self {
        Self {
            weight: 1.0,
            max_expansions: None,
            heuristic: None,
        }
    }

    /// Build options from serialisable settings. The algorithm is not part of
    /// the options; pass it to [`find_path`](crate::find_path) separately.
    pub fn from_config(config: &SearchConfig) -> Self {
        Self {
            weight: config.weight,
            max_expansions: config.max_expansions,
            heuristic: None,
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_max_expansions(mut self, limit: u64) -> Self {
        self.max_expansions = Some(limit);
        self
    }

    /// Replace [`SearchState::estimate_cost`] for this call.
    pub fn with_heuristic<F>(mut self, heuristic: F) -> Self
    where
        F: Fn(&S, &S) -> Cost + Send + Sync + 'static,
    {
        self.heuristic = Some(Arc::new(heuristic));
        self
    }

    /// Whether a heuristic override is installed.
    pub fn has_heuristic_override(&self) -> bool {
        self.heuristic.is_some()
    }

    /// Weighted heuristic term `h(state, goal) * weight`.
    ///
    /// Every heuristic evaluation made by either engine goes through here.
    pub fn estimate(&self, state: &S, goal: &S) -> Cost {
        let h = match &self.heuristic {
            Some(heuristic) => heuristic(state, goal),
            None => state.estimate_cost(goal),
        };
        h * self.weight
    }

    /// Reject options that would make the search meaningless.
    pub fn validate(&self) -> Result<()> {
        if !self.weight.is_finite() || self.weight < 0.0 {
            return Err(Error::InvalidWeight {
                weight: self.weight,
            });
        }
        Ok(())
    }

    /// Returns the expansion limit error once `expanded` has passed the budget.
    pub(crate) fn check_budget(&self, expanded: u64) -> Result<()> {
        match self.max_expansions {
            Some(limit) if expanded > limit => {
                tracing::warn!(limit, "search expansion budget exhausted");
                Err(Error::ExpansionLimit { limit })
            }
            _ => Ok(()),
        }
    }
}

impl<S: SearchState> Default for SearchOptions<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Clone for SearchOptions<S> {
    fn clone(&self) -> Self {
        Self {
            weight: self.weight,
            max_expansions: self.max_expansions,
            heuristic: self.heuristic.clone(),
        }
    }
}

impl<S> fmt::Debug for SearchOptions<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchOptions")
            .field("weight", &self.weight)
            .field("max_expansions", &self.max_expansions)
            .field("heuristic_override", &self.heuristic.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StateTransition;

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    struct Point(i64);

    impl SearchState for Point {
        type Transition = ();

        fn successors(&self) -> Vec<StateTransition<Self>> {
            vec![StateTransition::new(Point(self.0 + 1), (), 1.0)]
        }

        fn estimate_cost(&self, target: &Self) -> Cost {
            (target.0 - self.0).abs() as Cost
        }
    }

    #[test]
    fn algorithm_round_trips_through_display_and_from_str() {
        for algorithm in [SearchAlgorithm::AStar, SearchAlgorithm::IdaStar] {
            let parsed: SearchAlgorithm = algorithm.to_string().parse().unwrap();
            assert_eq!(parsed, algorithm);
        }
        assert_eq!("IDA*".parse::<SearchAlgorithm>().unwrap(), SearchAlgorithm::IdaStar);
    }

    #[test]
    fn unknown_algorithm_is_rejected() {
        let error = "dijkstra".parse::<SearchAlgorithm>().expect_err("unknown");
        assert!(format!("{error}").contains("dijkstra"));
    }

    #[test]
    fn config_defaults_fill_missing_fields() {
        let config = SearchConfig::from_json_str(r#"{ "algorithm": "ida-star" }"#).unwrap();
        assert_eq!(config.algorithm, SearchAlgorithm::IdaStar);
        assert_eq!(config.weight, 1.0);
        assert_eq!(config.max_expansions, None);
    }

    #[test]
    fn malformed_config_reports_config_error() {
        let error = SearchConfig::from_json_str(r#"{ "weight": "heavy" }"#).expect_err("bad");
        assert!(matches!(error, Error::Config(_)));
    }

    #[test]
    fn estimate_applies_weight_to_default_heuristic() {
        let options = SearchOptions::<Point>::new().with_weight(2.5);
        assert_eq!(options.estimate(&Point(0), &Point(4)), 10.0);
    }

    #[test]
    fn estimate_prefers_override() {
        let options = SearchOptions::<Point>::new()
            .with_heuristic(|_, _| 3.0)
            .with_weight(2.0);
        assert!(options.has_heuristic_override());
        assert_eq!(options.estimate(&Point(0), &Point(100)), 6.0);
    }

    #[test]
    fn validate_rejects_bad_weights() {
        for weight in [-1.0, f64::NAN, f64::INFINITY] {
            let options = SearchOptions::<Point>::new().with_weight(weight);
            assert!(matches!(
                options.validate(),
                Err(Error::InvalidWeight { .. })
            ));
        }
        assert!(SearchOptions::<Point>::new().with_weight(0.0).validate().is_ok());
    }

    #[test]
    fn budget_allows_exactly_limit_expansions() {
        let options = SearchOptions::<Point>::new().with_max_expansions(2);
        assert!(options.check_budget(2).is_ok());
        assert!(matches!(
            options.check_budget(3),
            Err(Error::ExpansionLimit { limit: 2 })
        ));
    }
}
