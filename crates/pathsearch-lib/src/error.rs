use thiserror::Error;

/// Convenient result alias for the path search library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// Failing to find a path is not an error: both engines report it through
/// [`SearchOutcome::found`](crate::SearchOutcome::found).
#[derive(Debug, Error)]
pub enum Error {
    /// The heuristic weight was negative, NaN or infinite.
    #[error("heuristic weight must be finite and non-negative, got {weight}")]
    InvalidWeight { weight: f64 },

    /// The expansion budget ran out before the search completed.
    #[error("search stopped after reaching the expansion limit of {limit}")]
    ExpansionLimit { limit: u64 },

    /// Path reconstruction could not find the edge between two consecutive
    /// states when re-enumerating successors.
    #[error("successors of path step {step} no longer lead to the next state on the path")]
    MissingTransition { step: usize },

    /// Raised when an algorithm name could not be parsed.
    #[error("unknown search algorithm: {name}")]
    UnknownAlgorithm { name: String },

    /// Wrapper for configuration parsing errors.
    #[error("invalid search configuration: {0}")]
    Config(#[from] serde_json::Error),
}
