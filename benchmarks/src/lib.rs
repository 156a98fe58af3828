//! Shared helpers for gripper benchmark suites.

use gripper_harness::worlds::builtin;
use gripper_kernel::goal::formula::Goal;
use gripper_kernel::world::objects::ObjectCatalog;
use gripper_kernel::world::state::WorldState;
use gripper_search::heuristic::Heuristic;
use gripper_search::policy::SearchPolicy;
use gripper_search::search::{search, SearchResult};

/// Resolved inputs for calling `search()` directly, bypassing fixture
/// loading and report building.
pub struct SearchSetup {
    pub state: WorldState,
    pub catalog: ObjectCatalog,
    pub goal: Goal,
}

/// Resolve a built-in world and goal text once.
///
/// # Panics
///
/// Panics if the world id is unknown or the goal does not parse.
/// Benchmark setup failures are fatal.
#[must_use]
pub fn prepare_search_setup(world_id: &str, goal: &str) -> SearchSetup {
    let world = builtin(world_id).expect("built-in world");
    SearchSetup {
        state: world.initial_state().expect("initial state"),
        catalog: world.catalog(),
        goal: goal.parse().expect("goal text"),
    }
}

/// Run `search()` with a prepared setup.
///
/// # Panics
///
/// Panics if `search()` fails pre-flight. Benchmark inputs are expected to
/// be valid.
pub fn run_search_only(
    setup: &SearchSetup,
    policy: &SearchPolicy,
    heuristic: &dyn Heuristic,
) -> SearchResult {
    search(&setup.state, &setup.goal, &setup.catalog, policy, heuristic)
        .expect("search should pass pre-flight in benchmarks")
}

/// Planning problems on the small world, from one step to a long haul.
pub const SMALL_WORLD_GOALS: &[(&str, &str)] = &[
    ("drop_held", "ontop(a,floor)"),
    ("uncover", "holding(m)"),
    ("ball_in_box", "inside(e,k)"),
    ("either", "inside(f,l) | leftof(m,e)"),
];
