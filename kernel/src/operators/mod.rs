//! Operators: actions, placement laws, and the transition function.

pub mod action;
pub mod apply;
pub mod physics;
