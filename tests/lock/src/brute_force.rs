//! Exhaustive breadth-first reference planner.
//!
//! Slow and obviously correct. Lock tests compare A* costs and heuristic
//! values against these distances.
//!
//! Starting from a physically valid state, every transition can be undone
//! (`l`/`r` and `p`/`d` are inverse pairs), so the state graph is
//! undirected and the distance *to* a goal is a multi-source BFS *from*
//! the goal states. `tests/brute_force_oracle.rs` checks that symmetry on
//! the lock worlds.

use std::collections::{HashMap, VecDeque};

use gripper_kernel::goal::eval::satisfies;
use gripper_kernel::goal::formula::Goal;
use gripper_kernel::operators::apply::successors;
use gripper_kernel::world::objects::ObjectCatalog;
use gripper_kernel::world::state::WorldState;

fn bfs(
    sources: Vec<WorldState>,
    catalog: &ObjectCatalog,
    limit: usize,
) -> Vec<(WorldState, u64)> {
    let mut seen: HashMap<WorldState, u64> = HashMap::new();
    let mut queue = VecDeque::new();
    for s in sources {
        if !seen.contains_key(&s) {
            seen.insert(s.clone(), 0);
            queue.push_back(s);
        }
    }
    let mut order = Vec::new();
    while let Some(state) = queue.pop_front() {
        let d = seen[&state];
        for t in successors(&state, catalog) {
            if !seen.contains_key(&t.state) {
                seen.insert(t.state.clone(), d + t.cost);
                queue.push_back(t.state);
            }
        }
        order.push((state, d));
        assert!(order.len() <= limit, "more than {limit} reachable states");
    }
    order
}

/// Distance (in actions) from `start` to every reachable state, in BFS
/// order.
///
/// # Panics
///
/// Panics if more than `limit` states are reachable.
#[must_use]
pub fn distances_from(
    start: &WorldState,
    catalog: &ObjectCatalog,
    limit: usize,
) -> Vec<(WorldState, u64)> {
    bfs(vec![start.clone()], catalog, limit)
}

/// Every state reachable from `start`.
///
/// # Panics
///
/// Panics if more than `limit` states are reachable.
#[must_use]
pub fn reachable_states(
    start: &WorldState,
    catalog: &ObjectCatalog,
    limit: usize,
) -> Vec<WorldState> {
    distances_from(start, catalog, limit)
        .into_iter()
        .map(|(s, _)| s)
        .collect()
}

/// True cost-to-goal for every state of `component` that can reach the
/// goal. States missing from the map cannot reach it.
///
/// `component` must be closed under transitions (e.g. the output of
/// [`reachable_states`]).
///
/// # Panics
///
/// Panics if more than `limit` states are visited.
#[must_use]
pub fn distances_to_goal(
    component: &[WorldState],
    goal: &Goal,
    catalog: &ObjectCatalog,
    limit: usize,
) -> HashMap<WorldState, u64> {
    let goal_states = component
        .iter()
        .filter(|s| satisfies(s, goal))
        .cloned()
        .collect();
    bfs(goal_states, catalog, limit).into_iter().collect()
}

/// Optimal plan cost from `start` by forward BFS, or `None` if the goal is
/// unreachable.
///
/// # Panics
///
/// Panics if more than `limit` states are reachable.
#[must_use]
pub fn optimal_cost(
    start: &WorldState,
    goal: &Goal,
    catalog: &ObjectCatalog,
    limit: usize,
) -> Option<u64> {
    distances_from(start, catalog, limit)
        .into_iter()
        .find(|(s, _)| satisfies(s, goal))
        .map(|(_, d)| d)
}
