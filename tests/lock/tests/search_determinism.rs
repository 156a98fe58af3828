//! Same inputs, same plan, same audit graph: in one process and across
//! processes with different environments.

use std::process::Command;

use gripper_harness::contract::BlocksWorld;
use gripper_harness::worlds::small::SmallWorld;
use gripper_kernel::goal::formula::Goal;
use gripper_search::heuristic::RelationHeuristic;
use gripper_search::policy::SearchPolicy;
use gripper_search::search::search;

fn small_world_digest(goal: &Goal) -> (Vec<String>, String) {
    let state = SmallWorld.initial_state().unwrap();
    let result = search(
        &state,
        goal,
        &SmallWorld.catalog(),
        &SearchPolicy::default(),
        &RelationHeuristic,
    )
    .unwrap();
    let tokens = result
        .actions()
        .unwrap()
        .iter()
        .map(|a| a.token().to_string())
        .collect();
    (tokens, result.graph.digest().unwrap().as_str().to_string())
}

#[test]
fn search_determinism_inproc_n10() {
    let goal: Goal = "inside(a,l) & ontop(f,floor)".parse().unwrap();
    let first = small_world_digest(&goal);
    for _ in 1..10 {
        assert_eq!(small_world_digest(&goal), first);
    }
}

#[test]
fn graph_json_is_canonical() {
    let state = SmallWorld.initial_state().unwrap();
    let goal: Goal = "holding(m)".parse().unwrap();
    let result = search(
        &state,
        &goal,
        &SmallWorld.catalog(),
        &SearchPolicy::default(),
        &RelationHeuristic,
    )
    .unwrap();
    let bytes = result.graph.to_canonical_json_bytes().unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(parsed["metadata"]["termination_reason"]["type"], "goal_reached");
    assert_eq!(parsed["metadata"]["heuristic"], "relation");
    assert_eq!(
        parsed["expansions"].as_array().unwrap().len() as u64,
        result.expansions()
    );
    // Re-canonicalising the parsed value is a fixed point.
    let again = gripper_kernel::proof::canon::canonical_json_bytes(&parsed).unwrap();
    assert_eq!(again, bytes);
}

fn run_variant(env_overrides: &[(&str, &str)]) -> String {
    let bin = env!("CARGO_BIN_EXE_plan_fixture");
    let mut command = Command::new(bin);
    command
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("LANGUAGE");
    for &(key, val) in env_overrides {
        command.env(key, val);
    }
    let output = command
        .output()
        .unwrap_or_else(|e| panic!("failed to spawn {bin} ({env_overrides:?}): {e}"));
    assert!(
        output.status.success(),
        "plan_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn search_determinism_crossproc() {
    let baseline = run_variant(&[]);
    assert!(baseline.contains("termination=goal_reached"), "{baseline}");
    for overrides in [
        &[("LC_ALL", "C")][..],
        &[("LANG", "en_US.UTF-8")][..],
        &[("TZ", "Asia/Tokyo"), ("LC_ALL", "C.UTF-8")][..],
    ] {
        assert_eq!(run_variant(overrides), baseline, "{overrides:?}");
    }
}

#[test]
fn crossproc_matches_inproc() {
    let goal: Goal = "inside(a,l) & ontop(f,floor)".parse().unwrap();
    let (tokens, graph_digest) = small_world_digest(&goal);
    let out = run_variant(&[]);
    assert!(out.contains(&format!("graph_digest={graph_digest}\n")), "{out}");
    assert!(out.contains(&format!("tokens={}\n", tokens.join(","))), "{out}");
}
