//! Gripper Harness: fixture-level orchestration for the planner.
//!
//! The harness loads a planning problem (a built-in world or a JSON
//! fixture), runs it through `gripper_search`, replays the plan with the
//! kernel, and packages the outcome as a digestible [`runner::PlanReport`].
//!
//! The harness does NOT implement planning logic; it delegates to the
//! search crate. Worlds provide domain data only.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod contract;
pub mod fixture;
pub mod runner;
pub mod worlds;
