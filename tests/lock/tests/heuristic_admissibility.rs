//! The relation heuristic never overestimates and is consistent, checked
//! against exhaustive BFS over every reachable state of the lock worlds.

use gripper_kernel::goal::formula::Goal;
use gripper_kernel::operators::apply::successors;
use gripper_kernel::world::state::WorldState;
use gripper_search::heuristic::{Heuristic, RelationHeuristic, ZeroHeuristic};
use lock_tests::brute_force::{distances_to_goal, reachable_states};
use lock_tests::worlds::{all_literal_goals, compound_goals, exhaustive_starts, STATE_LIMIT};

fn goals() -> Vec<Goal> {
    let mut goals = all_literal_goals(&["a", "b", "c"]);
    goals.extend(compound_goals());
    goals
}

fn check_admissible(heuristic: &dyn Heuristic) -> usize {
    let mut checked = 0;
    for (start, catalog) in exhaustive_starts() {
        let component = reachable_states(&start, &catalog, STATE_LIMIT);
        for goal in goals() {
            let truth = distances_to_goal(&component, &goal, &catalog, STATE_LIMIT);
            for state in &component {
                let estimate = heuristic.estimate(state, &goal);
                match truth.get(state) {
                    Some(&cost) => {
                        assert!(
                            estimate <= cost,
                            "{} overestimates {goal} in {state}: h={estimate} > {cost}",
                            heuristic.name()
                        );
                        if cost == 0 {
                            assert_eq!(estimate, 0, "goal {goal} holds in {state}");
                        }
                        checked += 1;
                    }
                    None => {
                        // Unreachable goals: any finite estimate is fine.
                    }
                }
            }
        }
    }
    checked
}

#[test]
fn relation_heuristic_is_admissible() {
    let checked = check_admissible(&RelationHeuristic);
    assert!(checked > 10_000, "only {checked} (state, goal) pairs checked");
}

#[test]
fn relation_heuristic_is_consistent() {
    for (start, catalog) in exhaustive_starts() {
        let component = reachable_states(&start, &catalog, STATE_LIMIT);
        for goal in goals() {
            for state in &component {
                let h = RelationHeuristic.estimate(state, &goal);
                for t in successors(state, &catalog) {
                    let next = RelationHeuristic.estimate(&t.state, &goal);
                    assert!(
                        h <= t.cost + next,
                        "{goal}: h={h} in {state}, but {} leads to h={next}",
                        t.action
                    );
                }
            }
        }
    }
}

#[test]
fn zero_heuristic_is_trivially_admissible() {
    assert!(check_admissible(&ZeroHeuristic) > 0);
}

#[test]
fn relation_heuristic_is_informative() {
    // Somewhere in the lock worlds the estimate exceeds 1.
    let (start, catalog) = exhaustive_starts().swap_remove(1);
    let component: Vec<WorldState> = reachable_states(&start, &catalog, STATE_LIMIT);
    let goal: Goal = "holding(a)".parse().unwrap();
    let best = component
        .iter()
        .map(|s| RelationHeuristic.estimate(s, &goal))
        .max()
        .unwrap();
    assert!(best >= 5, "max estimate {best}");
}

#[test]
fn estimates_are_idempotent() {
    for (start, catalog) in exhaustive_starts() {
        for state in reachable_states(&start, &catalog, STATE_LIMIT).iter().take(50) {
            for goal in compound_goals() {
                assert_eq!(
                    RelationHeuristic.estimate(state, &goal),
                    RelationHeuristic.estimate(state, &goal)
                );
            }
        }
    }
}
