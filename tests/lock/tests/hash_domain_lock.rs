//! Hash domain prefixes and digest formats are locked: changing them
//! silently changes every stored digest.

use gripper_kernel::proof::hash::{
    canonical_hash, ContentHash, DOMAIN_PLAN_REPORT, DOMAIN_SEARCH_GRAPH, DOMAIN_WORLD_STATE,
};
use lock_tests::worlds::world;

#[test]
fn domain_prefixes_are_locked() {
    assert_eq!(DOMAIN_WORLD_STATE, b"GRIPPER::WORLD_STATE::V1\0");
    assert_eq!(DOMAIN_SEARCH_GRAPH, b"GRIPPER::SEARCH_GRAPH::V1\0");
    assert_eq!(DOMAIN_PLAN_REPORT, b"GRIPPER::PLAN_REPORT::V1\0");
}

#[test]
fn domains_separate_identical_payloads() {
    let payload = b"same bytes";
    let digests = [
        canonical_hash(DOMAIN_WORLD_STATE, payload),
        canonical_hash(DOMAIN_SEARCH_GRAPH, payload),
        canonical_hash(DOMAIN_PLAN_REPORT, payload),
    ];
    assert_ne!(digests[0], digests[1]);
    assert_ne!(digests[1], digests[2]);
    assert_ne!(digests[0], digests[2]);
}

#[test]
fn digest_format_is_sha256_hex() {
    let fp = world(&[&["a"], &[]], None, 0).fingerprint();
    assert_eq!(fp.algorithm(), "sha256");
    assert_eq!(fp.hex_digest().len(), 64);
    assert!(fp.hex_digest().chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(ContentHash::parse(fp.as_str()), Some(fp));
}

#[test]
fn fingerprint_tracks_identity() {
    let a = world(&[&["a"], &["b"]], None, 0);
    let same = world(&[&["a"], &["b"]], None, 0);
    let arm_moved = world(&[&["a"], &["b"]], None, 1);
    let swapped = world(&[&["b"], &["a"]], None, 0);
    let merged = world(&[&["a", "b"], &[]], None, 0);
    assert_eq!(a.fingerprint(), same.fingerprint());
    assert_ne!(a.fingerprint(), arm_moved.fingerprint());
    assert_ne!(a.fingerprint(), swapped.fingerprint());
    assert_ne!(a.identity_bytes(), merged.identity_bytes());
}
