//! Planning facade: search, then map the outcome onto [`PlanError`].

use gripper_kernel::goal::formula::{Goal, GoalError};
use gripper_kernel::operators::action::{to_tokens, Action};
use gripper_kernel::world::objects::ObjectCatalog;
use gripper_kernel::world::state::{StateError, WorldState};

use crate::error::SearchError;
use crate::graph::TerminationReason;
use crate::heuristic::{Heuristic, RelationHeuristic};
use crate::policy::SearchPolicy;
use crate::search::{search, SearchResult};

/// A successful plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub actions: Vec<Action>,
    /// Sum of transition costs; equals `actions.len()` with unit costs.
    pub cost: u64,
    pub stats: PlanStats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlanStats {
    pub expansions: u64,
    pub nodes_generated: u64,
    pub frontier_high_water: u64,
}

impl Plan {
    /// Single-letter tokens, e.g. `["r", "p"]`.
    #[must_use]
    pub fn tokens(&self) -> Vec<String> {
        to_tokens(&self.actions)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    #[error("invalid goal: {0}")]
    InvalidGoal(#[from] GoalError),
    #[error("invalid initial state: {0}")]
    InvalidState(#[from] StateError),
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },
    /// Every reachable state was expanded; the goal is unreachable.
    #[error("no plan exists (after {expansions} expansions)")]
    NoPlanFound { expansions: u64 },
    /// The iteration cap was hit; a plan may still exist.
    #[error("search aborted after {iterations} iterations")]
    SearchAborted { iterations: u64 },
    #[error("heuristic panicked during search")]
    HeuristicPanicked,
    #[error("no goal interpretations to plan for")]
    NoInterpretations,
}

impl From<SearchError> for PlanError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::InvalidGoal(g) => Self::InvalidGoal(g),
            SearchError::InvalidState(s) => Self::InvalidState(s),
            SearchError::InvalidPolicy { detail } => Self::InvalidPolicy { detail },
        }
    }
}

impl PlanError {
    /// `true` for failures decided before any search step.
    #[must_use]
    pub fn is_preflight(&self) -> bool {
        matches!(
            self,
            Self::InvalidGoal(_)
                | Self::InvalidState(_)
                | Self::InvalidPolicy { .. }
                | Self::NoInterpretations
        )
    }
}

/// Turn a finished search into a plan or a runtime failure.
///
/// # Errors
///
/// [`PlanError::NoPlanFound`], [`PlanError::SearchAborted`] or
/// [`PlanError::HeuristicPanicked`] according to the termination reason.
pub fn plan_from_result(result: &SearchResult) -> Result<Plan, PlanError> {
    let expansions = result.expansions();
    match result.termination {
        TerminationReason::GoalReached { .. } => Ok(Plan {
            actions: result.actions().unwrap_or_default(),
            cost: result.cost().unwrap_or_default(),
            stats: PlanStats {
                expansions,
                nodes_generated: result.graph.metadata.total_nodes_generated,
                frontier_high_water: result.graph.metadata.frontier_high_water,
            },
        }),
        TerminationReason::FrontierExhausted => Err(PlanError::NoPlanFound { expansions }),
        TerminationReason::IterationLimitExceeded { .. } => Err(PlanError::SearchAborted {
            iterations: expansions,
        }),
        TerminationReason::HeuristicPanicked => Err(PlanError::HeuristicPanicked),
    }
}

/// Compute a least-cost action sequence from `initial` to a state
/// satisfying `goal`.
///
/// # Errors
///
/// Pre-flight [`PlanError`]s for bad input, otherwise the runtime failures
/// of [`plan_from_result`].
pub fn plan(
    initial: &WorldState,
    goal: &Goal,
    catalog: &ObjectCatalog,
    policy: &SearchPolicy,
    heuristic: &dyn Heuristic,
) -> Result<Plan, PlanError> {
    let result = search(initial, goal, catalog, policy, heuristic)?;
    plan_from_result(&result)
}

/// [`plan`] with the default policy and [`RelationHeuristic`].
///
/// # Errors
///
/// See [`plan`].
pub fn plan_with_defaults(
    initial: &WorldState,
    goal: &Goal,
    catalog: &ObjectCatalog,
) -> Result<Plan, PlanError> {
    plan(
        initial,
        goal,
        catalog,
        &SearchPolicy::default(),
        &RelationHeuristic,
    )
}

/// Plan every interpretation of an ambiguous request.
///
/// Returns one outcome per goal, in input order.
///
/// # Errors
///
/// [`PlanError::NoInterpretations`] when `goals` is empty.
pub fn plan_all(
    initial: &WorldState,
    goals: &[Goal],
    catalog: &ObjectCatalog,
    policy: &SearchPolicy,
    heuristic: &dyn Heuristic,
) -> Result<Vec<Result<Plan, PlanError>>, PlanError> {
    if goals.is_empty() {
        return Err(PlanError::NoInterpretations);
    }
    Ok(goals
        .iter()
        .map(|goal| plan(initial, goal, catalog, policy, heuristic))
        .collect())
}

/// Cheapest plan over all interpretations, with the index of the goal it
/// satisfies. Ties go to the earlier interpretation.
///
/// # Errors
///
/// [`PlanError::NoInterpretations`] when `goals` is empty; otherwise, if no
/// interpretation yields a plan, the first interpretation's error.
pub fn plan_any(
    initial: &WorldState,
    goals: &[Goal],
    catalog: &ObjectCatalog,
    policy: &SearchPolicy,
    heuristic: &dyn Heuristic,
) -> Result<(usize, Plan), PlanError> {
    let mut best: Option<(usize, Plan)> = None;
    let mut first_error = None;
    for (index, outcome) in plan_all(initial, goals, catalog, policy, heuristic)?
        .into_iter()
        .enumerate()
    {
        match outcome {
            Ok(p) => {
                if best.as_ref().map_or(true, |(_, b)| p.cost < b.cost) {
                    best = Some((index, p));
                }
            }
            Err(e) => {
                first_error.get_or_insert(e);
            }
        }
    }
    match (best, first_error) {
        (Some(found), _) => Ok(found),
        (None, Some(e)) => Err(e),
        (None, None) => Err(PlanError::NoInterpretations),
    }
}
