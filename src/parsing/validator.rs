
//! Structural checks on raw user input, run before any parsing.

use super::source::SourceOffset;
use crate::util::regexes::ADJACENT_NUMBERS_RE;

use thiserror::Error;
use log::debug;

use std::fmt::{self, Display, Formatter};

/// The characters, other than whitespace, which may appear in an
/// expression.
pub const ALLOWED_CHARS: &str = "0123456789.+-*/^()";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
  #[error("The expression is empty")]
  EmptyInput,
  #[error("The expression contains the invalid character '{ch}' at position {pos}")]
  IllegalCharacter { ch: char, pos: SourceOffset },
  #[error("Two numbers are separated only by whitespace at position {pos}")]
  AdjacentNumbers { pos: SourceOffset },
  #[error("The expression contains mismatched parentheses: {0}")]
  UnbalancedParentheses(ParenImbalance),
}

/// The way in which an expression's parentheses fail to balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParenImbalance {
  /// A `)` with no open `(` before it.
  UnexpectedClose(SourceOffset),
  /// The expression ended with this many `(` still open.
  Unclosed(usize),
}

impl Display for ParenImbalance {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      ParenImbalance::UnexpectedClose(pos) => write!(f, "unexpected ')' at position {pos}"),
      ParenImbalance::Unclosed(1) => write!(f, "1 '(' was never closed"),
      ParenImbalance::Unclosed(n) => write!(f, "{n} '(' were never closed"),
    }
  }
}

pub fn is_allowed_char(ch: char) -> bool {
  ch.is_whitespace() || ALLOWED_CHARS.contains(ch)
}

/// Checks that `expression` is fit for normalization and
/// tokenization, returning the first problem found.
///
/// The character check runs before the parenthesis check, which
/// assumes only known characters are present.
pub fn validate(expression: &str) -> Result<(), ValidationError> {
  if expression.trim().is_empty() {
    return Err(ValidationError::EmptyInput);
  }
  check_characters(expression)?;
  check_adjacent_numbers(expression)?;
  check_parentheses(expression)?;
  debug!("validated expression {expression:?}");
  Ok(())
}

fn check_characters(expression: &str) -> Result<(), ValidationError> {
  match expression.chars().enumerate().find(|(_, ch)| !is_allowed_char(*ch)) {
    Some((pos, ch)) => Err(ValidationError::IllegalCharacter { ch, pos: SourceOffset(pos) }),
    None => Ok(()),
  }
}

fn check_adjacent_numbers(expression: &str) -> Result<(), ValidationError> {
  match ADJACENT_NUMBERS_RE.find(expression) {
    Some(m) => {
      // Report the first whitespace character, as a character offset.
      let pos = expression[..m.start()].chars().count() + 1;
      Err(ValidationError::AdjacentNumbers { pos: SourceOffset(pos) })
    }
    None => Ok(()),
  }
}

fn check_parentheses(expression: &str) -> Result<(), ValidationError> {
  let mut depth: usize = 0;
  for (pos, ch) in expression.chars().enumerate() {
    match ch {
      '(' => {
        depth += 1;
      }
      ')' => {
        depth = depth.checked_sub(1).ok_or(
          ValidationError::UnbalancedParentheses(ParenImbalance::UnexpectedClose(SourceOffset(pos))),
        )?;
      }
      _ => {}
    }
  }
  if depth > 0 {
    Err(ValidationError::UnbalancedParentheses(ParenImbalance::Unclosed(depth)))
  } else {
    Ok(())
  }
}
