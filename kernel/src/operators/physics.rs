//! Physical placement laws between a placed object and what supports it.

use std::fmt;

use crate::world::objects::{Form, ObjectDefinition, Size};

/// The placement law a drop would violate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlacementRule {
    /// Balls cannot support anything.
    BallSupportsNothing,
    /// Balls rest only in boxes or on the floor.
    BallOutsideBox,
    /// Small objects cannot support large objects.
    LargeOnSmall,
    /// Boxes cannot contain pyramids, planks or boxes of the same size.
    SameSizeInBox,
    /// Small boxes cannot rest on small bricks or pyramids.
    SmallBoxOnSmallBrickOrPyramid,
    /// Large boxes cannot rest on large pyramids.
    LargeBoxOnLargePyramid,
}

impl PlacementRule {
    /// Stable snake-case name used in audit records.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BallSupportsNothing => "ball_supports_nothing",
            Self::BallOutsideBox => "ball_outside_box",
            Self::LargeOnSmall => "large_on_small",
            Self::SameSizeInBox => "same_size_in_box",
            Self::SmallBoxOnSmallBrickOrPyramid => "small_box_on_small_brick_or_pyramid",
            Self::LargeBoxOnLargePyramid => "large_box_on_large_pyramid",
        }
    }
}

impl fmt::Display for PlacementRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::BallSupportsNothing => "balls cannot support anything",
            Self::BallOutsideBox => "balls must be in boxes or on the floor",
            Self::LargeOnSmall => "small objects cannot support large objects",
            Self::SameSizeInBox => {
                "boxes cannot contain pyramids, planks or boxes of the same size"
            }
            Self::SmallBoxOnSmallBrickOrPyramid => {
                "small boxes cannot be supported by small bricks or pyramids"
            }
            Self::LargeBoxOnLargePyramid => "large boxes cannot be supported by large pyramids",
        })
    }
}

/// Check whether `top` may rest directly on `base`.
///
/// `base == None`, or a base whose form is `Floor`, means the floor, which
/// supports everything.
///
/// # Errors
///
/// Returns the first violated [`PlacementRule`].
pub fn can_support(
    top: &ObjectDefinition,
    base: Option<&ObjectDefinition>,
) -> Result<(), PlacementRule> {
    let Some(base) = base.filter(|b| b.form != Form::Floor) else {
        return Ok(());
    };

    if base.form == Form::Ball {
        return Err(PlacementRule::BallSupportsNothing);
    }
    if top.form == Form::Ball && base.form != Form::Box {
        return Err(PlacementRule::BallOutsideBox);
    }
    if top.size == Size::Large && base.size == Size::Small {
        return Err(PlacementRule::LargeOnSmall);
    }
    if base.form == Form::Box
        && matches!(top.form, Form::Pyramid | Form::Plank | Form::Box)
        && top.size == base.size
    {
        return Err(PlacementRule::SameSizeInBox);
    }
    if top.form == Form::Box
        && top.size == Size::Small
        && base.size == Size::Small
        && matches!(base.form, Form::Brick | Form::Pyramid)
    {
        return Err(PlacementRule::SmallBoxOnSmallBrickOrPyramid);
    }
    if top.form == Form::Box
        && top.size == Size::Large
        && base.form == Form::Pyramid
        && base.size == Size::Large
    {
        return Err(PlacementRule::LargeBoxOnLargePyramid);
    }
    Ok(())
}
