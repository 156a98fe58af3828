//! Typed search errors.
//!
//! `SearchError` covers pre-flight failures only: nothing has been searched
//! yet and no graph exists. Runtime terminations, including budget
//! exhaustion, are [`crate::graph::TerminationReason`] values inside a
//! `SearchResult`.

use gripper_kernel::goal::formula::GoalError;
use gripper_kernel::world::state::StateError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("invalid goal: {0}")]
    InvalidGoal(#[from] GoalError),
    #[error("invalid initial state: {0}")]
    InvalidState(#[from] StateError),
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },
}
