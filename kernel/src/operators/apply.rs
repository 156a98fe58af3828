//! Transition function: apply one action to a state.
//!
//! [`apply`] is the single place that moves the arm or an object. It never
//! mutates its input; each legal application returns a fresh `WorldState`.
//! [`successors`] is `apply` over [`Action::ALL`], keeping the legal ones.

use crate::operators::action::Action;
use crate::operators::physics::{can_support, PlacementRule};
use crate::world::objects::{ObjectCatalog, ObjectId};
use crate::world::state::WorldState;

/// Cost of every primitive action.
pub const TRANSITION_COST: u64 = 1;

/// Why an action is not applicable in a state. Not an error for search:
/// rejected actions are simply not successors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApplyFailure {
    #[error("arm is already over the leftmost stack")]
    ArmAtLeftEdge,
    #[error("arm is already over the rightmost stack")]
    ArmAtRightEdge,
    #[error("arm is already holding {held}")]
    HandOccupied { held: ObjectId },
    #[error("stack {stack} is empty")]
    StackEmpty { stack: usize },
    #[error("arm is not holding anything")]
    HandEmpty,
    #[error("cannot drop {object}: {rule}")]
    UnsupportedPlacement {
        object: ObjectId,
        rule: PlacementRule,
    },
    #[error("object {id} has no definition in the catalog")]
    UnknownObject { id: ObjectId },
}

/// A legal successor together with the action that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub action: Action,
    pub state: WorldState,
    pub cost: u64,
}

/// Apply `action` to `state`.
///
/// # Errors
///
/// Returns [`ApplyFailure`] when the action's precondition does not hold or
/// a drop would break a placement law.
pub fn apply(
    state: &WorldState,
    action: Action,
    catalog: &ObjectCatalog,
) -> Result<WorldState, ApplyFailure> {
    let arm = state.arm();
    match action {
        Action::Left => {
            if arm == 0 {
                return Err(ApplyFailure::ArmAtLeftEdge);
            }
            Ok(WorldState::from_parts_unchecked(
                state.stacks().to_vec(),
                state.holding().cloned(),
                arm - 1,
            ))
        }
        Action::Right => {
            if arm + 1 >= state.stack_count() {
                return Err(ApplyFailure::ArmAtRightEdge);
            }
            Ok(WorldState::from_parts_unchecked(
                state.stacks().to_vec(),
                state.holding().cloned(),
                arm + 1,
            ))
        }
        Action::Pickup => {
            if let Some(held) = state.holding() {
                return Err(ApplyFailure::HandOccupied { held: held.clone() });
            }
            let mut stacks = state.stacks().to_vec();
            let top = stacks[arm]
                .pop()
                .ok_or(ApplyFailure::StackEmpty { stack: arm })?;
            Ok(WorldState::from_parts_unchecked(stacks, Some(top), arm))
        }
        Action::Drop => {
            let held = state.holding().ok_or(ApplyFailure::HandEmpty)?;
            let top_def = catalog
                .get(held)
                .ok_or_else(|| ApplyFailure::UnknownObject { id: held.clone() })?;
            let base_def = match state.top(arm) {
                Some(base) => Some(
                    catalog
                        .get(base)
                        .ok_or_else(|| ApplyFailure::UnknownObject { id: base.clone() })?,
                ),
                None => None,
            };
            can_support(top_def, base_def).map_err(|rule| ApplyFailure::UnsupportedPlacement {
                object: held.clone(),
                rule,
            })?;
            let mut stacks = state.stacks().to_vec();
            stacks[arm].push(held.clone());
            Ok(WorldState::from_parts_unchecked(stacks, None, arm))
        }
    }
}

/// All legal successors of `state`, in [`Action::ALL`] order.
///
/// An empty result is a dead end, not an error.
#[must_use]
pub fn successors(state: &WorldState, catalog: &ObjectCatalog) -> Vec<Transition> {
    Action::ALL
        .iter()
        .filter_map(|&action| {
            apply(state, action, catalog).ok().map(|next| Transition {
                action,
                state: next,
                cost: TRANSITION_COST,
            })
        })
        .collect()
}
