
//! Module containing the regular expressions used to check and
//! rewrite expression text.

use regex::Regex;
use once_cell::sync::Lazy;

pub static WHITESPACE_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Two numeric runs with nothing but whitespace between them.
pub static ADJACENT_NUMBERS_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"[0-9.]\s+[0-9.]").unwrap());

/// Maximal run of digits and decimal points, anchored at the start.
pub static NUMBER_RUN_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^[0-9.]+").unwrap());

/// A digit immediately followed by an open paren: `2(`.
pub static DIGIT_THEN_OPEN_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"([0-9])\(").unwrap());

/// A close paren immediately followed by a digit: `)2`.
pub static CLOSE_THEN_DIGIT_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"\)([0-9])").unwrap());

/// A close paren immediately followed by an open paren: `)(`.
pub static CLOSE_THEN_OPEN_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"\)\(").unwrap());
