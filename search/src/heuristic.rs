//! Cost-to-goal estimates.
//!
//! Every estimate here is consistent: a single action changes it by at
//! most one, and it is zero in goal states. Consistency implies
//! admissibility, and it is what keeps A* optimal when closed states are
//! never reopened.
//!
//! Conjunctions take the maximum of their literal estimates (every literal
//! has to be achieved); the goal takes the minimum over its alternatives
//! (any one suffices). Both preserve consistency.

use gripper_kernel::goal::eval::literal_holds;
use gripper_kernel::goal::formula::{Goal, Literal, Relation};
use gripper_kernel::world::objects::ObjectId;
use gripper_kernel::world::state::WorldState;

/// Lower bound on the cost of reaching `goal` from `state`.
///
/// Implementations must be pure and admissible. The search catches a
/// panicking implementation and stops with
/// [`crate::graph::TerminationReason::HeuristicPanicked`]. The search is
/// single-threaded, so no `Send`/`Sync` bound is required.
pub trait Heuristic {
    /// Stable name recorded in the search graph.
    fn name(&self) -> &str;

    fn estimate(&self, state: &WorldState, goal: &Goal) -> u64;
}

/// Always zero; turns A* into uniform-cost search.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    fn name(&self) -> &str {
        "zero"
    }

    fn estimate(&self, _state: &WorldState, _goal: &Goal) -> u64 {
        0
    }
}

/// Per-literal move counting. See [`literal_estimate`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RelationHeuristic;

impl Heuristic for RelationHeuristic {
    fn name(&self) -> &str {
        "relation"
    }

    fn estimate(&self, state: &WorldState, goal: &Goal) -> u64 {
        goal.alternatives()
            .iter()
            .map(|conj| {
                conj.iter()
                    .map(|lit| literal_estimate(state, lit))
                    .max()
                    .unwrap_or(0)
            })
            .min()
            .unwrap_or(0)
    }
}

/// Clearing one object off a stack you need: pick it, step away, drop it,
/// step back.
const CLEAR_ONE: u64 = 4;

/// Moving one object out of the way without counting travel: pick, drop.
const PICK_DROP: u64 = 2;

/// Estimate for one literal.
///
/// - satisfied: 0
/// - unsatisfied negative literal: 1
/// - `holding(x)`: see [`holding_estimate`]
/// - `ontop`/`inside(x,y)`: the larger of "get hold of `x`, then drop it"
///   and "move every object stacked on `y` (besides `x`) plus `x` itself"
/// - `above(x,y)`: get hold of `x`, then drop it
/// - `under(x,y)`: as `above(y,x)`
/// - `beside`/`leftof`/`rightof`: get hold of whichever object is cheaper,
///   then drop it
///
/// Anything unsatisfied costs at least 1.
#[must_use]
pub fn literal_estimate(state: &WorldState, literal: &Literal) -> u64 {
    if literal_holds(state, literal) {
        return 0;
    }
    if !literal.polarity || literal.args.len() != literal.relation.arity() {
        return 1;
    }
    let x = &literal.args[0];
    let estimate = match literal.relation {
        Relation::Holding => holding_estimate(state, x),
        Relation::Ontop | Relation::Inside => ontop_estimate(state, x, &literal.args[1]),
        Relation::Above => above_estimate(state, x, &literal.args[1]),
        Relation::Under => above_estimate(state, &literal.args[1], x),
        Relation::Beside | Relation::Leftof | Relation::Rightof => {
            let y = &literal.args[1];
            holding_estimate(state, x)
                .into_iter()
                .chain(holding_estimate(state, y))
                .min()
                .map(|cheaper| cheaper + 1)
        }
    };
    estimate.unwrap_or(1).max(1)
}

/// Actions needed before the arm holds `x`; `None` if `x` is absent.
///
/// Travel to `x`'s stack, one pickup, and [`CLEAR_ONE`] per object on top
/// of `x`. Holding some other object adds its drop, plus a step away and
/// back when the arm is already over `x` (dropping it there would bury
/// `x` deeper).
#[must_use]
pub fn holding_estimate(state: &WorldState, x: &ObjectId) -> Option<u64> {
    if state.is_holding(x) {
        return Some(0);
    }
    let px = state.locate(x)?;
    let arm = state.arm();
    let buried = state.objects_above(x).len() as u64;
    let hand = match state.holding() {
        None => 0,
        Some(_) if arm == px.stack => 3,
        Some(_) => 1,
    };
    Some(arm.abs_diff(px.stack) as u64 + 1 + CLEAR_ONE * buried + hand)
}

fn ontop_estimate(state: &WorldState, x: &ObjectId, y: &ObjectId) -> Option<u64> {
    let carry = holding_estimate(state, x)? + 1;
    if y.is_floor() {
        return Some(carry);
    }
    if !state.contains(y) {
        return None;
    }
    let on_y = state
        .objects_above(y)
        .iter()
        .filter(|o| *o != x)
        .count() as u64;
    let move_x = if state.is_holding(x) { 1 } else { PICK_DROP };
    let other_in_hand = u64::from(state.holding().is_some_and(|h| h != x));
    Some(carry.max(PICK_DROP * on_y + move_x + other_in_hand))
}

fn above_estimate(state: &WorldState, x: &ObjectId, y: &ObjectId) -> Option<u64> {
    if y.is_floor() {
        // Unsatisfied means x is held: one drop.
        return state.is_holding(x).then_some(1);
    }
    if !state.contains(y) {
        return None;
    }
    Some(holding_estimate(state, x)? + 1)
}
