//! JSON plan fixtures: a world, a goal and optional search settings.
//!
//! ```json
//! {
//!   "world": {"stacks": [["a"], ["b", "c"]], "holding": null, "arm": 0,
//!             "objects": {"a": {"form": "brick", "size": "large", "color": "red"}}},
//!   "goal": "ontop(a,c)",
//!   "policy": {"max_iterations": 1000}
//! }
//! ```
//!
//! `world` may also be the id of a built-in world (`"small"`), and `goal`
//! may be the structured form (an array of conjunctions).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use gripper_kernel::goal::formula::Goal;
use gripper_kernel::goal::parse::ParseError;
use gripper_kernel::world::objects::{ObjectCatalog, ObjectId};
use gripper_kernel::world::state::{StateError, WorldState};
use gripper_search::heuristic::{Heuristic, RelationHeuristic, ZeroHeuristic};
use gripper_search::policy::SearchPolicy;

use crate::contract::BlocksWorld;
use crate::worlds::builtin;

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("cannot read or write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed fixture {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("fixture serialization failed: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("unknown built-in world '{world_id}'")]
    UnknownWorld { world_id: String },
    #[error("invalid world: {0}")]
    InvalidWorld(#[from] StateError),
    #[error("invalid goal text: {0}")]
    InvalidGoal(#[from] ParseError),
}

/// One planning problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanFixture {
    pub world: WorldSource,
    pub goal: GoalSpec,
    #[serde(default)]
    pub policy: SearchPolicy,
    #[serde(default)]
    pub heuristic: HeuristicChoice,
}

/// A built-in world id or an inline world.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WorldSource {
    Builtin(String),
    Inline(WorldSpec),
}

/// Inline world description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorldSpec {
    /// Stacks, bottom object first.
    pub stacks: Vec<Vec<ObjectId>>,
    #[serde(default)]
    pub holding: Option<ObjectId>,
    #[serde(default)]
    pub arm: usize,
    pub objects: ObjectCatalog,
}

impl WorldSpec {
    /// Snapshot a built-in world.
    ///
    /// # Errors
    ///
    /// Returns [`StateError`] if the world's layout is invalid.
    pub fn from_world(world: &dyn BlocksWorld) -> Result<Self, StateError> {
        let state = world.initial_state()?;
        Ok(Self {
            stacks: state.stacks().to_vec(),
            holding: state.holding().cloned(),
            arm: state.arm(),
            objects: world.catalog(),
        })
    }
}

/// Goal text (`"holding(a) | ontop(a,floor)"`) or the structured form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GoalSpec {
    Text(String),
    Structured(Goal),
}

impl GoalSpec {
    /// # Errors
    ///
    /// Returns [`ParseError`] for malformed goal text.
    pub fn resolve(&self) -> Result<Goal, ParseError> {
        match self {
            Self::Text(text) => text.parse(),
            Self::Structured(goal) => Ok(goal.clone()),
        }
    }
}

/// Which heuristic the runner uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeuristicChoice {
    #[default]
    Relation,
    Zero,
}

impl HeuristicChoice {
    #[must_use]
    pub fn heuristic(self) -> &'static dyn Heuristic {
        match self {
            Self::Relation => &RelationHeuristic,
            Self::Zero => &ZeroHeuristic,
        }
    }
}

/// A fixture resolved into kernel values.
#[derive(Debug, Clone)]
pub struct ResolvedFixture {
    pub world_id: String,
    pub state: WorldState,
    pub catalog: ObjectCatalog,
    pub goal: Goal,
}

impl PlanFixture {
    /// Fixture for a built-in world with the default policy.
    #[must_use]
    pub fn builtin(world_id: &str, goal: &str) -> Self {
        Self {
            world: WorldSource::Builtin(world_id.to_string()),
            goal: GoalSpec::Text(goal.to_string()),
            policy: SearchPolicy::default(),
            heuristic: HeuristicChoice::default(),
        }
    }

    /// Parse a fixture from JSON text. `origin` is used in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Parse`] for malformed JSON or unknown fields.
    pub fn from_json_str(json: &str, origin: &Path) -> Result<Self, FixtureError> {
        serde_json::from_str(json).map_err(|source| FixtureError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Build the initial state, catalog and goal.
    ///
    /// Structural state checks happen here; goal validation against the
    /// state is left to the search pre-flight.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError`] for an unknown built-in world, an invalid
    /// state, or malformed goal text.
    pub fn resolve(&self) -> Result<ResolvedFixture, FixtureError> {
        let (world_id, state, catalog) = match &self.world {
            WorldSource::Builtin(id) => {
                let world = builtin(id).ok_or_else(|| FixtureError::UnknownWorld {
                    world_id: id.clone(),
                })?;
                (id.clone(), world.initial_state()?, world.catalog())
            }
            WorldSource::Inline(spec) => {
                let state = WorldState::new(spec.stacks.clone(), spec.holding.clone(), spec.arm)?;
                state.validate(&spec.objects)?;
                ("inline".to_string(), state, spec.objects.clone())
            }
        };
        Ok(ResolvedFixture {
            world_id,
            state,
            catalog,
            goal: self.goal.resolve()?,
        })
    }
}

/// Read a fixture file.
///
/// # Errors
///
/// Returns [`FixtureError::Io`] or [`FixtureError::Parse`].
pub fn load_fixture(path: &Path) -> Result<PlanFixture, FixtureError> {
    let json = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    PlanFixture::from_json_str(&json, path)
}

/// Write a fixture as pretty JSON.
///
/// # Errors
///
/// Returns [`FixtureError::Serialize`] or [`FixtureError::Io`].
pub fn save_fixture(fixture: &PlanFixture, path: &Path) -> Result<(), FixtureError> {
    let json = serde_json::to_string_pretty(fixture).map_err(FixtureError::Serialize)?;
    std::fs::write(path, json).map_err(|source| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    })
}
