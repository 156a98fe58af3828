//! The four primitive arm actions and their one-letter tokens.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A primitive arm action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Action {
    #[serde(rename = "l")]
    Left,
    #[serde(rename = "r")]
    Right,
    #[serde(rename = "p")]
    Pickup,
    #[serde(rename = "d")]
    Drop,
}

impl Action {
    /// Enumeration order used by the transition function.
    pub const ALL: [Action; 4] = [Action::Left, Action::Right, Action::Pickup, Action::Drop];

    /// One-letter token replayed by the executor.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Left => "l",
            Self::Right => "r",
            Self::Pickup => "p",
            Self::Drop => "d",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Unrecognised action token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown action token '{0}'")]
pub struct UnknownAction(pub String);

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "l" | "left" => Ok(Self::Left),
            "r" | "right" => Ok(Self::Right),
            "p" | "pickup" => Ok(Self::Pickup),
            "d" | "drop" => Ok(Self::Drop),
            other => Err(UnknownAction(other.to_string())),
        }
    }
}

/// Render a plan as executor tokens.
#[must_use]
pub fn to_tokens(actions: &[Action]) -> Vec<String> {
    actions.iter().map(|a| a.token().to_string()).collect()
}

/// Parse executor tokens back into actions.
///
/// # Errors
///
/// Returns [`UnknownAction`] for the first unrecognised token.
pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Action>, UnknownAction> {
    tokens.iter().map(|t| t.as_ref().parse()).collect()
}
