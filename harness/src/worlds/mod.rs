//! Built-in worlds for the harness runner.

pub mod scenario;
pub mod small;

use crate::contract::BlocksWorld;

/// Look up a built-in world by id.
#[must_use]
pub fn builtin(world_id: &str) -> Option<Box<dyn BlocksWorld>> {
    let world: Box<dyn BlocksWorld> = match world_id {
        "two_towers" => Box::new(scenario::TwoTowers),
        "lone_ball" => Box::new(scenario::LoneBall),
        "box_and_pyramid" => Box::new(scenario::BoxAndPyramid),
        "ball_and_brick" => Box::new(scenario::BallAndBrick),
        "small" => Box::new(small::SmallWorld),
        _ => return None,
    };
    Some(world)
}

/// Ids accepted by [`builtin`].
pub const BUILTIN_WORLD_IDS: &[&str] = &[
    "two_towers",
    "lone_ball",
    "box_and_pyramid",
    "ball_and_brick",
    "small",
];
