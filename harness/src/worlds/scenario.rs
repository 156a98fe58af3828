//! Small hand-built worlds with known answers.

use gripper_kernel::world::objects::{Form, ObjectCatalog, ObjectDefinition, Size};

use crate::contract::{BlocksWorld, WorldLayout};

/// `[a] [b c] [] []`: a large brick alone, a large box on a large table.
///
/// `holding(a)` is a single pickup; `ontop(a,c)` is pickup, one step
/// right, drop.
pub struct TwoTowers;

impl BlocksWorld for TwoTowers {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "two_towers"
    }

    fn catalog(&self) -> ObjectCatalog {
        ObjectCatalog::new()
            .with("a", ObjectDefinition::new(Form::Brick, Size::Large, "red"))
            .with("b", ObjectDefinition::new(Form::Table, Size::Large, "blue"))
            .with("c", ObjectDefinition::new(Form::Box, Size::Large, "yellow"))
    }

    fn layout(&self) -> WorldLayout {
        WorldLayout {
            stacks: vec![vec!["a"], vec!["b", "c"], vec![], vec![]],
            holding: None,
            arm: 0,
        }
    }
}

/// `[] [d]`: a small ball already on the floor.
pub struct LoneBall;

impl BlocksWorld for LoneBall {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "lone_ball"
    }

    fn catalog(&self) -> ObjectCatalog {
        ObjectCatalog::new().with("d", ObjectDefinition::new(Form::Ball, Size::Small, "white"))
    }

    fn layout(&self) -> WorldLayout {
        WorldLayout {
            stacks: vec![vec![], vec!["d"]],
            holding: None,
            arm: 0,
        }
    }
}

/// `[k] [p] []`: a large box and a large pyramid. The box can never rest
/// on the pyramid.
pub struct BoxAndPyramid;

impl BlocksWorld for BoxAndPyramid {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "box_and_pyramid"
    }

    fn catalog(&self) -> ObjectCatalog {
        ObjectCatalog::new()
            .with("k", ObjectDefinition::new(Form::Box, Size::Large, "yellow"))
            .with("p", ObjectDefinition::new(Form::Pyramid, Size::Large, "green"))
    }

    fn layout(&self) -> WorldLayout {
        WorldLayout {
            stacks: vec![vec!["k"], vec!["p"], vec![]],
            holding: None,
            arm: 0,
        }
    }
}

/// `[f] [b] []`: a small ball and a small brick. Nothing can rest on the
/// ball and the ball can only rest on the floor.
pub struct BallAndBrick;

impl BlocksWorld for BallAndBrick {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "ball_and_brick"
    }

    fn catalog(&self) -> ObjectCatalog {
        ObjectCatalog::new()
            .with("f", ObjectDefinition::new(Form::Ball, Size::Small, "black"))
            .with("b", ObjectDefinition::new(Form::Brick, Size::Small, "white"))
    }

    fn layout(&self) -> WorldLayout {
        WorldLayout {
            stacks: vec![vec!["f"], vec!["b"], vec![]],
            holding: None,
            arm: 0,
        }
    }
}
