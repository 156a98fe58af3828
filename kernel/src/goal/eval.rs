//! Evaluate goal formulas against a world state.
//!
//! Pure functions of their arguments. An object that is neither stacked nor
//! held makes every relation on it false; evaluation never panics.

use crate::goal::formula::{Goal, Literal, Relation};
use crate::world::objects::ObjectId;
use crate::world::state::WorldState;

/// Whether `relation(args)` currently holds, ignoring polarity.
///
/// Floor semantics: `ontop(x,floor)` and `inside(x,floor)` hold when `x` is
/// the bottom of some stack; `above(x,floor)` holds when `x` is stacked;
/// `under(floor,x)` mirrors it. Any other use of the floor is false, as is
/// a wrong argument count.
#[must_use]
pub fn relation_holds(state: &WorldState, relation: Relation, args: &[ObjectId]) -> bool {
    if args.len() != relation.arity() {
        return false;
    }
    let x = &args[0];
    match relation {
        Relation::Holding => state.is_holding(x),
        Relation::Ontop | Relation::Inside => directly_on(state, x, &args[1]),
        Relation::Above => above(state, x, &args[1]),
        Relation::Under => above(state, &args[1], x),
        Relation::Beside => column_pair(state, x, &args[1]).is_some_and(|(a, b)| a.abs_diff(b) == 1),
        Relation::Leftof => column_pair(state, x, &args[1]).is_some_and(|(a, b)| a < b),
        Relation::Rightof => column_pair(state, x, &args[1]).is_some_and(|(a, b)| a > b),
    }
}

fn directly_on(state: &WorldState, x: &ObjectId, y: &ObjectId) -> bool {
    let Some(px) = state.locate(x) else {
        return false;
    };
    if y.is_floor() {
        return px.height == 0;
    }
    state
        .locate(y)
        .is_some_and(|py| py.stack == px.stack && px.height == py.height + 1)
}

fn above(state: &WorldState, x: &ObjectId, y: &ObjectId) -> bool {
    let Some(px) = state.locate(x) else {
        return false;
    };
    if y.is_floor() {
        return true;
    }
    state
        .locate(y)
        .is_some_and(|py| py.stack == px.stack && px.height > py.height)
}

/// Stack indices of two stacked, non-floor objects.
fn column_pair(state: &WorldState, x: &ObjectId, y: &ObjectId) -> Option<(usize, usize)> {
    if x.is_floor() || y.is_floor() {
        return None;
    }
    Some((state.locate(x)?.stack, state.locate(y)?.stack))
}

/// Whether the literal holds, taking polarity into account.
#[must_use]
pub fn literal_holds(state: &WorldState, literal: &Literal) -> bool {
    relation_holds(state, literal.relation, &literal.args) == literal.polarity
}

/// Whether every literal of the conjunction holds.
#[must_use]
pub fn conjunction_holds(state: &WorldState, conjunction: &[Literal]) -> bool {
    conjunction.iter().all(|l| literal_holds(state, l))
}

/// Whether any alternative of the goal holds.
#[must_use]
pub fn satisfies(state: &WorldState, goal: &Goal) -> bool {
    goal.alternatives()
        .iter()
        .any(|conj| conjunction_holds(state, conj))
}
