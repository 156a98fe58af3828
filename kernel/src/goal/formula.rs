//! Goal formulas in disjunctive normal form.
//!
//! A [`Goal`] is an ordered list of alternatives; each alternative is a
//! conjunction of signed [`Literal`]s over spatial relations.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::world::objects::ObjectId;
use crate::world::state::WorldState;

/// Spatial relation kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    Ontop,
    Inside,
    Above,
    Under,
    Beside,
    Leftof,
    Rightof,
    Holding,
}

impl Relation {
    pub const ALL: [Relation; 8] = [
        Relation::Ontop,
        Relation::Inside,
        Relation::Above,
        Relation::Under,
        Relation::Beside,
        Relation::Leftof,
        Relation::Rightof,
        Relation::Holding,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ontop => "ontop",
            Self::Inside => "inside",
            Self::Above => "above",
            Self::Under => "under",
            Self::Beside => "beside",
            Self::Leftof => "leftof",
            Self::Rightof => "rightof",
            Self::Holding => "holding",
        }
    }

    /// Number of object arguments the relation takes.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Holding => 1,
            _ => 2,
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.name() == name)
    }

    /// Argument position at which the floor may appear, if any.
    fn floor_slot(self) -> Option<usize> {
        match self {
            Self::Ontop | Self::Inside | Self::Above => Some(1),
            Self::Under => Some(0),
            _ => None,
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A signed relation over object arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Literal {
    #[serde(alias = "pol")]
    pub polarity: bool,
    #[serde(alias = "rel")]
    pub relation: Relation,
    pub args: Vec<ObjectId>,
}

impl Literal {
    #[must_use]
    pub fn positive(relation: Relation, args: Vec<ObjectId>) -> Self {
        Self {
            polarity: true,
            relation,
            args,
        }
    }

    #[must_use]
    pub fn negative(relation: Relation, args: Vec<ObjectId>) -> Self {
        Self {
            polarity: false,
            relation,
            args,
        }
    }

    #[must_use]
    pub fn holding(x: impl Into<ObjectId>) -> Self {
        Self::positive(Relation::Holding, vec![x.into()])
    }

    #[must_use]
    pub fn binary(relation: Relation, x: impl Into<ObjectId>, y: impl Into<ObjectId>) -> Self {
        Self::positive(relation, vec![x.into(), y.into()])
    }

    /// The same literal with flipped polarity.
    #[must_use]
    pub fn negated(mut self) -> Self {
        self.polarity = !self.polarity;
        self
    }

    /// First argument, if present.
    #[must_use]
    pub fn subject(&self) -> Option<&ObjectId> {
        self.args.first()
    }

    /// Second argument, if present.
    #[must_use]
    pub fn object(&self) -> Option<&ObjectId> {
        self.args.get(1)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.polarity {
            f.write_str("-")?;
        }
        write!(f, "{}(", self.relation)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{arg}")?;
        }
        f.write_str(")")
    }
}

/// Literals that must all hold together.
pub type Conjunction = Vec<Literal>;

/// Structural problem found before search starts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GoalError {
    #[error("goal has no alternatives")]
    NoAlternatives,
    #[error("{relation} takes {expected} argument(s), got {found}")]
    Arity {
        relation: Relation,
        expected: usize,
        found: usize,
    },
    #[error("floor cannot appear in {literal}")]
    FloorMisuse { literal: String },
    #[error("goal references {id}, which is not in the world")]
    UnknownObject { id: ObjectId },
}

/// A goal in disjunctive normal form: satisfied when any alternative holds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Goal {
    alternatives: Vec<Conjunction>,
}

impl Goal {
    #[must_use]
    pub fn new(alternatives: Vec<Conjunction>) -> Self {
        Self { alternatives }
    }

    /// A goal with one alternative made of one literal.
    #[must_use]
    pub fn literal(literal: Literal) -> Self {
        Self::new(vec![vec![literal]])
    }

    /// A goal with one alternative.
    #[must_use]
    pub fn all_of(literals: Conjunction) -> Self {
        Self::new(vec![literals])
    }

    #[must_use]
    pub fn alternatives(&self) -> &[Conjunction] {
        &self.alternatives
    }

    /// Every literal across all alternatives.
    pub fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.alternatives.iter().flatten()
    }

    /// Check the goal against the world it will be planned in.
    ///
    /// # Errors
    ///
    /// Returns the first [`GoalError`]: empty goal, wrong arity, the floor
    /// in a position no relation gives it meaning, or an object missing
    /// from `state`.
    pub fn validate(&self, state: &WorldState) -> Result<(), GoalError> {
        if self.alternatives.is_empty() {
            return Err(GoalError::NoAlternatives);
        }
        for literal in self.literals() {
            let expected = literal.relation.arity();
            if literal.args.len() != expected {
                return Err(GoalError::Arity {
                    relation: literal.relation,
                    expected,
                    found: literal.args.len(),
                });
            }
            for (slot, arg) in literal.args.iter().enumerate() {
                if arg.is_floor() {
                    if literal.relation.floor_slot() != Some(slot) {
                        return Err(GoalError::FloorMisuse {
                            literal: literal.to_string(),
                        });
                    }
                } else if !state.contains(arg) {
                    return Err(GoalError::UnknownObject { id: arg.clone() });
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, conj) in self.alternatives.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            for (j, lit) in conj.iter().enumerate() {
                if j > 0 {
                    f.write_str(" & ")?;
                }
                write!(f, "{lit}")?;
            }
        }
        Ok(())
    }
}
