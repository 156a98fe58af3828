//! Textual goal syntax.
//!
//! ```text
//! goal        := conjunction ( "|" conjunction )*
//! conjunction := literal ( "&" literal )*
//! literal     := [ "-" ] relation "(" id ( "," id )* ")"
//! ```
//!
//! Whitespace around tokens is ignored. An `id` must satisfy
//! [`is_well_formed_id`]: no inner whitespace and none of `( ) , | &`.
//! States reject other ids, so this is the same syntax `Display` produces
//! for [`Goal`] and [`Literal`].

use std::str::FromStr;

use crate::goal::formula::{Goal, Literal, Relation};
use crate::world::objects::{is_well_formed_id, ObjectId};

/// Malformed goal text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("empty literal")]
    EmptyLiteral,
    #[error("unknown relation '{0}'")]
    UnknownRelation(String),
    #[error("malformed literal '{0}': expected relation(args)")]
    Malformed(String),
    #[error("empty argument in '{0}'")]
    EmptyArgument(String),
    #[error("invalid object id '{0}'")]
    InvalidId(String),
}

impl FromStr for Literal {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.is_empty() {
            return Err(ParseError::EmptyLiteral);
        }
        let (polarity, body) = match text.strip_prefix('-') {
            Some(rest) => (false, rest.trim_start()),
            None => (true, text),
        };
        let open = body
            .find('(')
            .ok_or_else(|| ParseError::Malformed(text.to_string()))?;
        let inner = body[open + 1..]
            .strip_suffix(')')
            .ok_or_else(|| ParseError::Malformed(text.to_string()))?;
        if inner.contains(['(', ')']) {
            return Err(ParseError::Malformed(text.to_string()));
        }
        let name = body[..open].trim();
        let relation =
            Relation::from_name(name).ok_or_else(|| ParseError::UnknownRelation(name.to_string()))?;

        let mut args = Vec::new();
        for raw in inner.split(',') {
            let arg = raw.trim();
            if arg.is_empty() {
                return Err(ParseError::EmptyArgument(text.to_string()));
            }
            if !is_well_formed_id(arg) {
                return Err(ParseError::InvalidId(arg.to_string()));
            }
            args.push(ObjectId::new(arg));
        }
        Ok(Self {
            polarity,
            relation,
            args,
        })
    }
}

impl FromStr for Goal {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let alternatives = s
            .split('|')
            .map(|conj| conj.split('&').map(str::parse).collect::<Result<Vec<_>, _>>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Goal::new(alternatives))
    }
}
