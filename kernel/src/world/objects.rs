//! Object identifiers, attributes, and the read-only object catalog.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Reserved identifier for the floor pseudo-object.
pub const FLOOR: &str = "floor";

/// Characters the goal syntax uses as delimiters; ids may not contain them.
pub const RESERVED_ID_CHARS: &[char] = &['(', ')', ',', '|', '&'];

/// Whether `text` can be written and read back in goal syntax: non-empty,
/// no whitespace, none of [`RESERVED_ID_CHARS`].
#[must_use]
pub fn is_well_formed_id(text: &str) -> bool {
    !text.is_empty()
        && !text
            .chars()
            .any(|c| c.is_whitespace() || RESERVED_ID_CHARS.contains(&c))
}

/// Opaque identifier for a world object, unique within a session.
///
/// Any string is representable; states only accept ids that pass
/// [`is_well_formed_id`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(String);

impl ObjectId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The floor pseudo-object.
    #[must_use]
    pub fn floor() -> Self {
        Self(FLOOR.to_string())
    }

    #[must_use]
    pub fn is_floor(&self) -> bool {
        self.0 == FLOOR
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        is_well_formed_id(&self.0)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ObjectId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Object shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Form {
    Brick,
    Plank,
    Ball,
    Pyramid,
    Box,
    Table,
    Floor,
}

/// Object size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    Large,
}

/// Immutable attributes of a world object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectDefinition {
    pub form: Form,
    pub size: Size,
    pub color: String,
}

impl ObjectDefinition {
    #[must_use]
    pub fn new(form: Form, size: Size, color: impl Into<String>) -> Self {
        Self {
            form,
            size,
            color: color.into(),
        }
    }
}

/// Read-only lookup from object id to its attributes.
///
/// Passed explicitly to every function that needs object properties; there
/// is no ambient object table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectCatalog {
    objects: BTreeMap<ObjectId, ObjectDefinition>,
}

impl ObjectCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, id: impl Into<ObjectId>, def: ObjectDefinition) -> Self {
        self.insert(id.into(), def);
        self
    }

    /// Insert or replace a definition. Returns the previous one, if any.
    pub fn insert(&mut self, id: ObjectId, def: ObjectDefinition) -> Option<ObjectDefinition> {
        self.objects.insert(id, def)
    }

    #[must_use]
    pub fn get(&self, id: &ObjectId) -> Option<&ObjectDefinition> {
        self.objects.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: &ObjectId) -> bool {
        self.objects.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Iterate definitions in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&ObjectId, &ObjectDefinition)> {
        self.objects.iter()
    }
}

impl FromIterator<(ObjectId, ObjectDefinition)> for ObjectCatalog {
    fn from_iter<I: IntoIterator<Item = (ObjectId, ObjectDefinition)>>(iter: I) -> Self {
        Self {
            objects: iter.into_iter().collect(),
        }
    }
}
