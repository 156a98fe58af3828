//! Replay a plan against an initial state and check where it ends.
//!
//! Every step goes through [`apply`], so a plan that replays cleanly uses
//! only legal transitions.

use crate::goal::eval::satisfies;
use crate::goal::formula::Goal;
use crate::operators::action::Action;
use crate::operators::apply::{apply, ApplyFailure};
use crate::world::objects::ObjectCatalog;
use crate::world::state::WorldState;

/// Replay failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReplayError {
    /// Step `index` is not applicable in the state reached so far.
    #[error("step {index} ({action}) is illegal: {failure}")]
    IllegalStep {
        index: usize,
        action: Action,
        failure: ApplyFailure,
    },
    /// The plan replays but its final state does not satisfy the goal.
    #[error("plan ends in {final_state}, which does not satisfy {goal}")]
    GoalNotReached { final_state: String, goal: String },
}

/// Apply `actions` in order starting from `initial`.
///
/// # Errors
///
/// Returns [`ReplayError::IllegalStep`] at the first inapplicable action.
pub fn replay(
    initial: &WorldState,
    actions: &[Action],
    catalog: &ObjectCatalog,
) -> Result<WorldState, ReplayError> {
    let mut state = initial.clone();
    for (index, &action) in actions.iter().enumerate() {
        state = apply(&state, action, catalog).map_err(|failure| ReplayError::IllegalStep {
            index,
            action,
            failure,
        })?;
    }
    Ok(state)
}

/// Replay `actions` and require the final state to satisfy `goal`.
///
/// # Errors
///
/// Returns [`ReplayError`] on an illegal step or an unsatisfied goal.
pub fn verify_plan(
    initial: &WorldState,
    actions: &[Action],
    goal: &Goal,
    catalog: &ObjectCatalog,
) -> Result<WorldState, ReplayError> {
    let last = replay(initial, actions, catalog)?;
    if satisfies(&last, goal) {
        Ok(last)
    } else {
        Err(ReplayError::GoalNotReached {
            final_state: last.to_string(),
            goal: goal.to_string(),
        })
    }
}
