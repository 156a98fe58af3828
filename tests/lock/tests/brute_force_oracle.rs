//! Sanity checks on the BFS reference itself.

use std::collections::HashSet;

use gripper_kernel::operators::apply::successors;
use lock_tests::brute_force::{distances_from, optimal_cost, reachable_states};
use lock_tests::worlds::{bricks_catalog, exhaustive_starts, world, STATE_LIMIT};

#[test]
fn transitions_are_reversible_on_lock_worlds() {
    for (start, catalog) in exhaustive_starts() {
        for state in reachable_states(&start, &catalog, STATE_LIMIT) {
            for t in successors(&state, &catalog) {
                let back: HashSet<_> = successors(&t.state, &catalog)
                    .into_iter()
                    .map(|u| u.state)
                    .collect();
                assert!(back.contains(&state), "{} does not undo", t.action);
            }
        }
    }
}

#[test]
fn bfs_distances_are_monotone() {
    let start = world(&[&["a", "b", "c"], &[], &[]], None, 2);
    let distances = distances_from(&start, &bricks_catalog(), STATE_LIMIT);
    assert_eq!(distances[0].1, 0);
    assert!(distances.windows(2).all(|w| w[0].1 <= w[1].1));
}

#[test]
fn known_optimal_costs() {
    let start = world(&[&["a", "b", "c"], &[], &[]], None, 2);
    let catalog = bricks_catalog();
    let cost = |g: &str| optimal_cost(&start, &g.parse().unwrap(), &catalog, STATE_LIMIT);
    assert_eq!(cost("ontop(c,b)"), Some(0));
    assert_eq!(cost("holding(c)"), Some(3));
    // l l p r d l p: clear c, come back, pick b.
    assert_eq!(cost("holding(b)"), Some(7));
}
