//! A* plans are legal, reach the goal, and cost exactly the BFS optimum.
//! Unreachable goals are reported as `NoPlanFound`.

use gripper_kernel::proof::replay::verify_plan;
use gripper_search::heuristic::{Heuristic, RelationHeuristic, ZeroHeuristic};
use gripper_search::plan::{plan, PlanError};
use gripper_search::policy::{SearchPolicy, SearchStrategy};
use lock_tests::brute_force::{distances_from, optimal_cost};
use lock_tests::worlds::{all_literal_goals, compound_goals, exhaustive_starts, STATE_LIMIT};

fn check_against_bfs(policy: &SearchPolicy, heuristic: &dyn Heuristic, optimal: bool) {
    for (start, catalog) in exhaustive_starts() {
        let mut goals = all_literal_goals(&["a", "b", "c"]);
        goals.extend(compound_goals());
        for goal in goals {
            let expected = optimal_cost(&start, &goal, &catalog, STATE_LIMIT);
            match (plan(&start, &goal, &catalog, policy, heuristic), expected) {
                (Ok(p), Some(cost)) => {
                    verify_plan(&start, &p.actions, &goal, &catalog)
                        .unwrap_or_else(|e| panic!("{goal}: {e}"));
                    assert_eq!(p.cost, p.actions.len() as u64);
                    if optimal {
                        assert_eq!(p.cost, cost, "{goal} from {start}");
                    } else {
                        assert!(p.cost >= cost, "{goal} from {start}");
                    }
                }
                (Err(PlanError::NoPlanFound { .. }), None) => {}
                (outcome, expected) => {
                    panic!("{goal} from {start}: got {outcome:?}, BFS says {expected:?}")
                }
            }
        }
    }
}

#[test]
fn a_star_matches_bfs_optimum() {
    check_against_bfs(&SearchPolicy::default(), &RelationHeuristic, true);
}

#[test]
fn uniform_cost_matches_bfs_optimum() {
    let policy = SearchPolicy {
        strategy: SearchStrategy::UniformCost,
        ..SearchPolicy::default()
    };
    check_against_bfs(&policy, &ZeroHeuristic, true);
}

#[test]
fn greedy_plans_are_valid_but_may_be_longer() {
    let policy = SearchPolicy {
        strategy: SearchStrategy::Greedy,
        ..SearchPolicy::default()
    };
    check_against_bfs(&policy, &RelationHeuristic, false);
}

#[test]
fn tree_search_is_still_optimal_on_short_plans() {
    let policy = SearchPolicy {
        multi_path_pruning: false,
        max_iterations: 200_000,
        ..SearchPolicy::default()
    };
    let (start, catalog) = exhaustive_starts().swap_remove(1);
    for text in ["holding(c)", "ontop(c,floor)", "leftof(c,a)"] {
        let goal = text.parse().unwrap();
        let p = plan(&start, &goal, &catalog, &policy, &RelationHeuristic).unwrap();
        assert_eq!(
            Some(p.cost),
            optimal_cost(&start, &goal, &catalog, STATE_LIMIT),
            "{text}"
        );
    }
}

#[test]
fn no_plan_found_means_goal_unreachable_everywhere() {
    let (start, catalog) = exhaustive_starts().swap_remove(0);
    // The ball can never support the box.
    let goal = "ontop(b,c)".parse().unwrap();
    let err = plan(
        &start,
        &goal,
        &catalog,
        &SearchPolicy::default(),
        &RelationHeuristic,
    )
    .unwrap_err();
    let PlanError::NoPlanFound { expansions } = err else {
        panic!("expected NoPlanFound, got {err:?}");
    };
    let reachable = distances_from(&start, &catalog, STATE_LIMIT).len() as u64;
    assert_eq!(expansions, reachable, "every reachable state is expanded once");
}
