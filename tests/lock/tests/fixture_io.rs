//! JSON fixtures on disk run end to end and produce stable reports.

use std::fs;

use gripper_harness::fixture::{load_fixture, save_fixture, FixtureError, PlanFixture};
use gripper_harness::runner::{run_fixture_file, run_plan, RunError};
use gripper_harness::worlds::BUILTIN_WORLD_IDS;
use gripper_kernel::world::state::StateError;

const TWO_TOWERS_JSON: &str = r#"{
    "world": {
        "stacks": [["a"], ["b", "c"], [], []],
        "holding": null,
        "arm": 0,
        "objects": {
            "a": {"form": "brick", "size": "large", "color": "red"},
            "b": {"form": "table", "size": "large", "color": "blue"},
            "c": {"form": "box", "size": "large", "color": "yellow"}
        }
    },
    "goal": "ontop(a,c)"
}"#;

#[test]
fn inline_fixture_file_runs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("two_towers.json");
    fs::write(&path, TWO_TOWERS_JSON).unwrap();

    let report = run_fixture_file(&path).unwrap();
    assert_eq!(report.world_id, "inline");
    assert_eq!(report.tokens, vec!["p", "r", "d"]);
    assert_eq!(report.cost, Some(3));
}

#[test]
fn inline_and_builtin_worlds_plan_alike() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("two_towers.json");
    fs::write(&path, TWO_TOWERS_JSON).unwrap();
    let inline = run_fixture_file(&path).unwrap();
    let builtin = run_plan(&PlanFixture::builtin("two_towers", "ontop(a,c)")).unwrap();
    assert_eq!(inline.tokens, builtin.tokens);
    assert_eq!(inline.graph_digest, builtin.graph_digest);
    // The world id is part of the report, so report digests differ.
    assert_ne!(inline.digest().unwrap(), builtin.digest().unwrap());
}

#[test]
fn report_canonical_json_round_trips() {
    let report = run_plan(&PlanFixture::builtin("two_towers", "holding(a)")).unwrap();
    let bytes = report.to_canonical_json_bytes().unwrap();
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(value["tokens"], serde_json::json!(["p"]));
    assert_eq!(value["termination"], "goal_reached");
    assert_eq!(value["failure"], serde_json::Value::Null);
    assert_eq!(value, serde_json::to_value(&report).unwrap());
}

#[test]
fn every_builtin_world_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    for id in BUILTIN_WORLD_IDS {
        let path = dir.path().join(format!("{id}.json"));
        let fixture = PlanFixture::builtin(id, "holding(a) | -holding(a)");
        save_fixture(&fixture, &path).unwrap();
        assert_eq!(load_fixture(&path).unwrap(), fixture);
    }
}

#[test]
fn malformed_file_is_a_fixture_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{\"world\": ").unwrap();
    let err = run_fixture_file(&path).unwrap_err();
    assert!(matches!(err, RunError::Fixture(FixtureError::Parse { .. })), "{err}");
}

#[test]
fn failed_plan_still_yields_report() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pyramid.json");
    save_fixture(&PlanFixture::builtin("box_and_pyramid", "ontop(k,p)"), &path).unwrap();
    let report = run_fixture_file(&path).unwrap();
    assert_eq!(report.termination, "frontier_exhausted");
    assert!(!report.is_success());
    assert!(report.expansions > 0);
}

#[test]
fn inline_world_ids_must_be_goal_expressible() {
    let json = TWO_TOWERS_JSON.replace("[\"a\"]", "[\"a b\"]").replace(
        "\"a\": {",
        "\"a b\": {",
    );
    let fixture = PlanFixture::from_json_str(&json, std::path::Path::new("spaced.json")).unwrap();
    let err = run_plan(&fixture).unwrap_err();
    assert!(
        matches!(
            err,
            RunError::Fixture(FixtureError::InvalidWorld(StateError::MalformedId { .. }))
        ),
        "{err}"
    );
}

#[test]
fn floor_form_objects_are_rejected_before_search() {
    let json = TWO_TOWERS_JSON.replace(
        "{\"form\": \"table\", \"size\": \"large\"",
        "{\"form\": \"floor\", \"size\": \"small\"",
    );
    let fixture = PlanFixture::from_json_str(&json, std::path::Path::new("slab.json")).unwrap();
    let err = run_plan(&fixture).unwrap_err();
    assert!(
        matches!(
            err,
            RunError::Fixture(FixtureError::InvalidWorld(StateError::FloorFormObject { .. }))
        ),
        "{err}"
    );
}
