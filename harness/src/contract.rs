//! World contract: the minimal trait a built-in world implements.
//!
//! Worlds provide domain data only: an object catalog and an initial
//! arrangement. Validation, search and replay are the runner's job.

use gripper_kernel::world::objects::{ObjectCatalog, ObjectId};
use gripper_kernel::world::state::{StateError, WorldState};

/// A named initial world.
pub trait BlocksWorld {
    /// Unique world identifier (e.g., `"small"`).
    fn world_id(&self) -> &str;

    /// Definitions for every object the world mentions.
    fn catalog(&self) -> ObjectCatalog;

    /// Stacks bottom-first, the held object, and the arm column.
    fn layout(&self) -> WorldLayout;

    /// Build and validate the initial state.
    ///
    /// # Errors
    ///
    /// Returns [`StateError`] if the layout is structurally invalid or
    /// mentions an object missing from the catalog.
    fn initial_state(&self) -> Result<WorldState, StateError> {
        let layout = self.layout();
        let state = WorldState::new(
            layout
                .stacks
                .iter()
                .map(|s| s.iter().map(|id| ObjectId::new(*id)).collect())
                .collect(),
            layout.holding.map(ObjectId::new),
            layout.arm,
        )?;
        state.validate(&self.catalog())?;
        Ok(state)
    }
}

/// Static description of a world arrangement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldLayout {
    pub stacks: Vec<Vec<&'static str>>,
    pub holding: Option<&'static str>,
    pub arm: usize,
}
