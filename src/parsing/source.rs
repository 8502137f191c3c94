
use std::fmt::{self, Display, Formatter};
use std::ops::AddAssign;

/// Thin wrapper around `usize` that represents a character position
/// (counted in `char`s, not bytes) in the user's input. Used for error
/// reporting.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SourceOffset(pub usize);

impl Display for SourceOffset {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl AddAssign<usize> for SourceOffset {
  fn add_assign(&mut self, rhs: usize) {
    self.0 += rhs
  }
}
