//! The 13-object "small" world: five stacks, the arm holding a brick.

use gripper_kernel::world::objects::{Form, ObjectCatalog, ObjectDefinition, ObjectId, Size};

use crate::contract::{BlocksWorld, WorldLayout};

pub struct SmallWorld;

impl BlocksWorld for SmallWorld {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "small"
    }

    fn catalog(&self) -> ObjectCatalog {
        [
            ("a", Form::Brick, Size::Large, "green"),
            ("b", Form::Brick, Size::Small, "white"),
            ("c", Form::Plank, Size::Large, "red"),
            ("d", Form::Plank, Size::Small, "green"),
            ("e", Form::Ball, Size::Large, "white"),
            ("f", Form::Ball, Size::Small, "black"),
            ("g", Form::Table, Size::Large, "blue"),
            ("h", Form::Table, Size::Small, "red"),
            ("i", Form::Pyramid, Size::Large, "yellow"),
            ("j", Form::Pyramid, Size::Small, "red"),
            ("k", Form::Box, Size::Large, "yellow"),
            ("l", Form::Box, Size::Large, "red"),
            ("m", Form::Box, Size::Small, "blue"),
        ]
        .into_iter()
        .map(|(id, form, size, color)| (ObjectId::new(id), ObjectDefinition::new(form, size, color)))
        .collect()
    }

    fn layout(&self) -> WorldLayout {
        WorldLayout {
            stacks: vec![vec!["e"], vec!["g", "l"], vec![], vec!["k", "m", "f"], vec![]],
            holding: Some("a"),
            arm: 0,
        }
    }
}
