//! Harness runner: resolve a fixture, plan, replay, and report.
//!
//! # Pipeline
//!
//! ```text
//! PlanFixture::resolve() → search() → plan_from_result()
//!   → verify_plan() (goal reached only) → graph digest → PlanReport
//! ```
//!
//! The runner uses only kernel and search APIs; it adds no planning logic.

use std::path::Path;

use serde::Serialize;

use gripper_kernel::operators::action::to_tokens;
use gripper_kernel::proof::canon::{canonical_json_bytes, CanonError};
use gripper_kernel::proof::hash::{canonical_hash, ContentHash, DOMAIN_PLAN_REPORT};
use gripper_kernel::proof::replay::{verify_plan, ReplayError};
use gripper_search::error::SearchError;
use gripper_search::plan::plan_from_result;
use gripper_search::search::search;

use crate::fixture::{load_fixture, FixtureError, PlanFixture};

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Fixture(#[from] FixtureError),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error("canonical JSON failed: {0}")]
    Canon(#[from] CanonError),
    /// The search returned a plan that does not replay. Always a bug.
    #[error("plan failed replay verification: {0}")]
    Replay(#[from] ReplayError),
}

/// Outcome of one fixture run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanReport {
    pub world_id: String,
    /// Goal in textual syntax.
    pub goal: String,
    /// Plan tokens; empty when no plan was found.
    pub tokens: Vec<String>,
    pub cost: Option<u64>,
    /// `TerminationReason::as_str()`.
    pub termination: String,
    /// Display text of the plan failure, if any.
    pub failure: Option<String>,
    /// `sha256:<hex>` of the canonical search graph.
    pub graph_digest: String,
    pub expansions: u64,
    pub nodes_generated: u64,
}

impl PlanReport {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }

    /// # Errors
    ///
    /// Returns [`CanonError`] if the report contains a float (it never does).
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        let value = serde_json::json!({
            "cost": self.cost,
            "expansions": self.expansions,
            "failure": self.failure,
            "goal": self.goal,
            "graph_digest": self.graph_digest,
            "nodes_generated": self.nodes_generated,
            "termination": self.termination,
            "tokens": self.tokens,
            "world_id": self.world_id,
        });
        canonical_json_bytes(&value)
    }

    /// # Errors
    ///
    /// See [`PlanReport::to_canonical_json_bytes`].
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        Ok(canonical_hash(
            DOMAIN_PLAN_REPORT,
            &self.to_canonical_json_bytes()?,
        ))
    }
}

/// Run one fixture end to end.
///
/// A missing plan is not an error: it is reported through
/// [`PlanReport::failure`] and `termination`.
///
/// # Errors
///
/// Returns [`RunError`] for fixtures that cannot be resolved, pre-flight
/// search failures, or a plan that fails replay.
pub fn run_plan(fixture: &PlanFixture) -> Result<PlanReport, RunError> {
    let resolved = fixture.resolve()?;
    tracing::info!(
        world_id = %resolved.world_id,
        goal = %resolved.goal,
        heuristic = fixture.heuristic.heuristic().name(),
        "planning"
    );

    let result = search(
        &resolved.state,
        &resolved.goal,
        &resolved.catalog,
        &fixture.policy,
        fixture.heuristic.heuristic(),
    )?;
    let outcome = plan_from_result(&result);

    let (tokens, cost) = match &outcome {
        Ok(plan) => {
            verify_plan(&resolved.state, &plan.actions, &resolved.goal, &resolved.catalog)?;
            (to_tokens(&plan.actions), Some(plan.cost))
        }
        Err(_) => (Vec::new(), None),
    };

    let report = PlanReport {
        world_id: resolved.world_id,
        goal: resolved.goal.to_string(),
        tokens,
        cost,
        termination: result.termination.as_str().to_string(),
        failure: outcome.err().map(|e| e.to_string()),
        graph_digest: result.graph.digest()?.as_str().to_string(),
        expansions: result.expansions(),
        nodes_generated: result.graph.metadata.total_nodes_generated,
    };
    tracing::info!(
        termination = %report.termination,
        cost = ?report.cost,
        expansions = report.expansions,
        "planning finished"
    );
    Ok(report)
}

/// [`load_fixture`] then [`run_plan`].
///
/// # Errors
///
/// See [`load_fixture`] and [`run_plan`].
pub fn run_fixture_file(path: &Path) -> Result<PlanReport, RunError> {
    let fixture = load_fixture(path)?;
    run_plan(&fixture)
}
