//! Search policy: iteration budget, pruning, and frontier ordering.

use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Default iteration cap.
pub const DEFAULT_MAX_ITERATIONS: u64 = 25_000;

/// How frontier priority is computed from a node's costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    /// `f = g + h`. Optimal with an admissible heuristic.
    #[default]
    AStar,
    /// `f = g`; the heuristic is never called.
    UniformCost,
    /// `f = h`; greedy best-first, fast but not optimal.
    Greedy,
}

impl SearchStrategy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AStar => "a_star",
            Self::UniformCost => "uniform_cost",
            Self::Greedy => "greedy",
        }
    }

    /// Frontier priority for a node with the given costs.
    #[must_use]
    pub fn priority(self, g_cost: u64, h_cost: u64) -> u64 {
        match self {
            Self::AStar => g_cost.saturating_add(h_cost),
            Self::UniformCost => g_cost,
            Self::Greedy => h_cost,
        }
    }
}

/// Search configuration. Deserializes with defaults for missing fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchPolicy {
    /// Expansions allowed before the search aborts.
    pub max_iterations: u64,
    /// Skip states that were already expanded (graph search). When false,
    /// the search is a tree search and may revisit states.
    pub multi_path_pruning: bool,
    /// Frontier ordering.
    pub strategy: SearchStrategy,
}

impl SearchPolicy {
    /// Check the policy before any search step is taken.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] when `max_iterations` is zero.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_iterations == 0 {
            return Err(SearchError::InvalidPolicy {
                detail: "max_iterations must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Policy echo for audit metadata.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "max_iterations": self.max_iterations,
            "multi_path_pruning": self.multi_path_pruning,
            "strategy": self.strategy.as_str(),
        })
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            multi_path_pruning: true,
            strategy: SearchStrategy::AStar,
        }
    }
}
