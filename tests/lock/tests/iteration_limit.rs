//! The iteration cap stops a search with `SearchAborted`, never a wrong
//! answer. Only expansions count against it.

use std::collections::HashSet;

use gripper_harness::contract::BlocksWorld;
use gripper_harness::worlds::small::SmallWorld;
use gripper_kernel::goal::formula::Goal;
use gripper_search::graph::TerminationReason;
use gripper_search::heuristic::{RelationHeuristic, ZeroHeuristic};
use gripper_search::plan::{plan, PlanError};
use gripper_search::policy::SearchPolicy;
use gripper_search::search::search;
use lock_tests::worlds::{exhaustive_starts, world};

fn capped(max_iterations: u64) -> SearchPolicy {
    SearchPolicy {
        max_iterations,
        ..SearchPolicy::default()
    }
}

#[test]
fn cap_hit_is_search_aborted() {
    let state = SmallWorld.initial_state().unwrap();
    let goal: Goal = "ontop(m,floor) & ontop(f,floor)".parse().unwrap();
    let err = plan(&state, &goal, &SmallWorld.catalog(), &capped(5), &ZeroHeuristic).unwrap_err();
    assert_eq!(err, PlanError::SearchAborted { iterations: 6 });
}

#[test]
fn cap_of_exactly_the_needed_expansions_succeeds() {
    let (start, catalog) = exhaustive_starts().swap_remove(1);
    let goal: Goal = "holding(c)".parse().unwrap();
    let free = search(&start, &goal, &catalog, &SearchPolicy::default(), &RelationHeuristic).unwrap();
    let needed = free.expansions();
    assert!(needed > 0);

    let tight = search(&start, &goal, &catalog, &capped(needed), &RelationHeuristic).unwrap();
    assert!(tight.is_goal_reached());
    assert_eq!(tight.actions(), free.actions());

    if needed > 1 {
        let short = search(&start, &goal, &catalog, &capped(needed - 1), &RelationHeuristic)
            .unwrap();
        assert_eq!(
            short.termination,
            TerminationReason::IterationLimitExceeded { limit: needed - 1 }
        );
    }
}

#[test]
fn exhaustion_beats_a_generous_cap() {
    let (start, catalog) = exhaustive_starts().swap_remove(0);
    let goal: Goal = "ontop(b,c)".parse().unwrap();
    let err = plan(&start, &goal, &catalog, &capped(1_000_000), &RelationHeuristic).unwrap_err();
    assert!(matches!(err, PlanError::NoPlanFound { .. }));
}

#[test]
fn every_expansion_is_a_distinct_state() {
    let (start, catalog) = exhaustive_starts().swap_remove(2);
    let goal: Goal = "ontop(a,b) & ontop(b,c)".parse().unwrap();
    let result = search(&start, &goal, &catalog, &SearchPolicy::default(), &ZeroHeuristic).unwrap();
    let meta = &result.graph.metadata;
    assert_eq!(meta.total_expansions, result.graph.expansions.len() as u64);
    let distinct: HashSet<&str> = result
        .graph
        .expansions
        .iter()
        .map(|e| e.state_fingerprint.as_str())
        .collect();
    assert_eq!(distinct.len() as u64, meta.total_expansions);
}

#[test]
fn tree_search_hits_the_cap_on_unreachable_goals() {
    let start = world(&[&["a"], &["b"], &[]], None, 0);
    let catalog = lock_tests::worlds::bricks_catalog();
    let goal: Goal = "ontop(a,c)".parse().unwrap();
    let err = plan(&start, &goal, &catalog, &SearchPolicy::default(), &RelationHeuristic)
        .unwrap_err();
    assert!(matches!(err, PlanError::InvalidGoal(_)), "c is not in the world");

    let goal: Goal = "ontop(a,a)".parse().unwrap();
    let policy = SearchPolicy {
        max_iterations: 300,
        multi_path_pruning: false,
        ..SearchPolicy::default()
    };
    let err = plan(&start, &goal, &catalog, &policy, &RelationHeuristic).unwrap_err();
    assert_eq!(err, PlanError::SearchAborted { iterations: 301 });
}
