//! `WorldState`: immutable snapshot of stacks, held object, and arm position.
//!
//! States are values. Every transition builds a fresh `WorldState`; nothing
//! mutates a state after construction.
//!
//! # Identity bytes
//!
//! [`WorldState::identity_bytes`] is the canonical key for closed-set
//! membership. Layout (all integers `u64` LE, strings length-prefixed):
//!
//! ```text
//! stack_count
//! for each stack: len, then for each id: byte_len, utf8 bytes
//! holding tag (0 = empty, 1 = held) [, byte_len, utf8 bytes]
//! arm
//! ```
//!
//! The encoding is total and order-sensitive: two states produce equal bytes
//! iff their stacks, held object and arm position are equal.

use std::collections::BTreeSet;
use std::fmt;

use crate::proof::hash::{canonical_hash, ContentHash, DOMAIN_WORLD_STATE};
use crate::world::objects::{Form, ObjectCatalog, ObjectId};

/// Structural violation found when constructing or validating a state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("world has no stacks")]
    NoStacks,
    #[error("arm position {arm} out of range for {stacks} stacks")]
    ArmOutOfRange { arm: usize, stacks: usize },
    #[error("object {id} appears more than once")]
    DuplicateObject { id: ObjectId },
    #[error("reserved id 'floor' cannot be placed or held")]
    FloorAsObject,
    #[error("object id '{id}' is empty or contains whitespace or ( ) , | &")]
    MalformedId { id: ObjectId },
    #[error("object {id} has no definition in the catalog")]
    UnknownObject { id: ObjectId },
    #[error("object {id} has form 'floor' and cannot be placed or held")]
    FloorFormObject { id: ObjectId },
}

/// Location of an object inside the stacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Stack index (0 = leftmost).
    pub stack: usize,
    /// Height within the stack (0 = resting on the floor).
    pub height: usize,
}

/// Immutable blocks-world snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WorldState {
    stacks: Vec<Vec<ObjectId>>,
    holding: Option<ObjectId>,
    arm: usize,
}

impl WorldState {
    /// Build a state, checking its structural invariants.
    ///
    /// # Errors
    ///
    /// Returns [`StateError`] if there are no stacks, the arm is out of
    /// range, an id occurs twice or is malformed, or the floor id is used
    /// as an object.
    pub fn new(
        stacks: Vec<Vec<ObjectId>>,
        holding: Option<ObjectId>,
        arm: usize,
    ) -> Result<Self, StateError> {
        let state = Self {
            stacks,
            holding,
            arm,
        };
        state.check_structure()?;
        Ok(state)
    }

    /// Build without checks. Callers must preserve the invariants.
    pub(crate) fn from_parts_unchecked(
        stacks: Vec<Vec<ObjectId>>,
        holding: Option<ObjectId>,
        arm: usize,
    ) -> Self {
        Self {
            stacks,
            holding,
            arm,
        }
    }

    fn check_structure(&self) -> Result<(), StateError> {
        if self.stacks.is_empty() {
            return Err(StateError::NoStacks);
        }
        if self.arm >= self.stacks.len() {
            return Err(StateError::ArmOutOfRange {
                arm: self.arm,
                stacks: self.stacks.len(),
            });
        }
        let mut seen = BTreeSet::new();
        for id in self.objects() {
            if id.is_floor() {
                return Err(StateError::FloorAsObject);
            }
            if !id.is_well_formed() {
                return Err(StateError::MalformedId { id: id.clone() });
            }
            if !seen.insert(id) {
                return Err(StateError::DuplicateObject { id: id.clone() });
            }
        }
        Ok(())
    }

    /// Check structure and that every object is defined in `catalog` with
    /// a placeable form.
    ///
    /// # Errors
    ///
    /// Returns the first [`StateError`] found.
    pub fn validate(&self, catalog: &ObjectCatalog) -> Result<(), StateError> {
        self.check_structure()?;
        for id in self.objects() {
            match catalog.get(id) {
                None => return Err(StateError::UnknownObject { id: id.clone() }),
                Some(def) if def.form == Form::Floor => {
                    return Err(StateError::FloorFormObject { id: id.clone() })
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn stacks(&self) -> &[Vec<ObjectId>] {
        &self.stacks
    }

    #[must_use]
    pub fn holding(&self) -> Option<&ObjectId> {
        self.holding.as_ref()
    }

    #[must_use]
    pub fn arm(&self) -> usize {
        self.arm
    }

    #[must_use]
    pub fn stack_count(&self) -> usize {
        self.stacks.len()
    }

    /// Topmost object of stack `index`, `None` if empty or out of range.
    #[must_use]
    pub fn top(&self, index: usize) -> Option<&ObjectId> {
        self.stacks.get(index).and_then(|s| s.last())
    }

    /// All objects in the world: stacked bottom-up left to right, then held.
    pub fn objects(&self) -> impl Iterator<Item = &ObjectId> {
        self.stacks.iter().flatten().chain(self.holding.iter())
    }

    /// Whether `id` is stacked or held.
    #[must_use]
    pub fn contains(&self, id: &ObjectId) -> bool {
        self.is_holding(id) || self.locate(id).is_some()
    }

    #[must_use]
    pub fn is_holding(&self, id: &ObjectId) -> bool {
        self.holding.as_ref() == Some(id)
    }

    /// Position of a stacked object. Held and unknown objects return `None`.
    #[must_use]
    pub fn locate(&self, id: &ObjectId) -> Option<Position> {
        self.stacks.iter().enumerate().find_map(|(stack, objs)| {
            objs.iter()
                .position(|o| o == id)
                .map(|height| Position { stack, height })
        })
    }

    /// Objects resting above `id` in its stack, bottom-up. Empty if `id`
    /// is held, absent, or on top.
    #[must_use]
    pub fn objects_above(&self, id: &ObjectId) -> &[ObjectId] {
        match self.locate(id) {
            Some(pos) => &self.stacks[pos.stack][pos.height + 1..],
            None => &[],
        }
    }

    /// Canonical closed-set key. See the module docs for the layout.
    #[must_use]
    pub fn identity_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(64);
        push_u64(&mut buf, self.stacks.len() as u64);
        for stack in &self.stacks {
            push_u64(&mut buf, stack.len() as u64);
            for id in stack {
                push_str(&mut buf, id.as_str());
            }
        }
        match &self.holding {
            None => buf.push(0),
            Some(id) => {
                buf.push(1);
                push_str(&mut buf, id.as_str());
            }
        }
        push_u64(&mut buf, self.arm as u64);
        buf
    }

    /// Content hash of [`Self::identity_bytes`].
    #[must_use]
    pub fn fingerprint(&self) -> ContentHash {
        canonical_hash(DOMAIN_WORLD_STATE, &self.identity_bytes())
    }
}

fn push_u64(buf: &mut Vec<u8>, v: u64) {
    buf.extend_from_slice(&v.to_le_bytes());
}

fn push_str(buf: &mut Vec<u8>, s: &str) {
    push_u64(buf, s.len() as u64);
    buf.extend_from_slice(s.as_bytes());
}

impl fmt::Display for WorldState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stack in &self.stacks {
            f.write_str("[")?;
            for (i, id) in stack.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{id}")?;
            }
            f.write_str("]")?;
        }
        write!(f, " arm={} holding=", self.arm)?;
        match &self.holding {
            Some(id) => write!(f, "{id}"),
            None => f.write_str("-"),
        }
    }
}
