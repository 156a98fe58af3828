//! Gripper kernel: the blocks-world model the planner searches over.
//!
//! # API surface
//!
//! - [`operators::apply::successors`] -- legal successor states of a state
//! - [`goal::eval::satisfies`] -- evaluate a DNF goal against a state
//! - [`proof::replay::verify_plan`] -- replay a plan and check its goal
//!
//! # Module dependency direction
//!
//! `world` ← `operators`, `goal` ← `proof::replay`
//!
//! `operators` and `goal` are independent of each other. `world` uses
//! `proof::hash` for state fingerprints and nothing else.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod goal;
pub mod operators;
pub mod proof;
pub mod world;
