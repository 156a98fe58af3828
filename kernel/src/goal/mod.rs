//! Goal formulas: DNF types, evaluation, and text syntax.

pub mod eval;
pub mod formula;
pub mod parse;
