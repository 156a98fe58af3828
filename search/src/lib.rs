//! Gripper Search: deterministic A* planning over blocks-world states.
//!
//! Depends only on `gripper_kernel`; it does NOT depend on
//! `gripper_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! gripper_kernel  ←  gripper_search  ←  gripper_harness
//! (world, rules)     (A*, plans)        (fixtures, runner)
//! ```
//!
//! # Key types
//!
//! - [`Heuristic`] -- admissible cost-to-goal estimate
//! - [`SearchPolicy`] -- iteration budget, pruning, frontier ordering
//! - [`SearchResult`] / [`SearchGraph`] -- node arena and audit log
//! - [`Plan`] / [`PlanError`] -- the planning facade

#![forbid(unsafe_code)]

pub mod error;
pub mod frontier;
pub mod graph;
pub mod heuristic;
pub mod node;
pub mod plan;
pub mod policy;
pub mod search;

pub use error::SearchError;
pub use graph::{SearchGraph, TerminationReason};
pub use heuristic::{Heuristic, RelationHeuristic, ZeroHeuristic};
pub use plan::{plan, plan_all, plan_any, plan_with_defaults, Plan, PlanError, PlanStats};
pub use policy::{SearchPolicy, SearchStrategy};
pub use search::{reconstruct_actions, reconstruct_path, search, SearchResult};
