
//! Rewrites validated input into the compact form the tokenizer
//! expects.

use crate::util::regexes::{
  WHITESPACE_RE, DIGIT_THEN_OPEN_RE, CLOSE_THEN_DIGIT_RE, CLOSE_THEN_OPEN_RE,
};

use log::debug;

/// Strips whitespace and makes implicit multiplication explicit, so
/// that `2 (3)(4) 5` becomes `2*(3)*(4)*5`.
///
/// Each rewrite rule is applied once across the whole string, over
/// non-overlapping matches.
pub fn normalize(expression: &str) -> String {
  let compact = WHITESPACE_RE.replace_all(expression, "");
  let compact = DIGIT_THEN_OPEN_RE.replace_all(&compact, "${1}*(");
  let compact = CLOSE_THEN_DIGIT_RE.replace_all(&compact, ")*${1}");
  let compact = CLOSE_THEN_OPEN_RE.replace_all(&compact, ")*(");
  let normalized = compact.into_owned();
  debug!("normalized {expression:?} to {normalized:?}");
  normalized
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_strips_whitespace() {
    assert_eq!(normalize(" 3 +\t4 * 2 "), "3+4*2");
  }

  #[test]
  fn test_digit_then_paren() {
    assert_eq!(normalize("2(3+1)"), "2*(3+1)");
    assert_eq!(normalize("12 (3)"), "12*(3)");
  }

  #[test]
  fn test_paren_then_digit() {
    assert_eq!(normalize("(3+1)2"), "(3+1)*2");
  }

  #[test]
  fn test_paren_then_paren() {
    assert_eq!(normalize("(1)(2)(3)"), "(1)*(2)*(3)");
    assert_eq!(normalize("(1) (2)"), "(1)*(2)");
  }

  #[test]
  fn test_all_rules_together() {
    assert_eq!(normalize("2(3)(4)5"), "2*(3)*(4)*5");
  }

  #[test]
  fn test_explicit_operators_untouched() {
    assert_eq!(normalize("2*(3)-(4)/5"), "2*(3)-(4)/5");
    assert_eq!(normalize("-(2)"), "-(2)");
  }

  #[test]
  fn test_decimal_point_is_not_a_digit() {
    assert_eq!(normalize("1.(2)"), "1.(2)");
  }

  #[test]
  fn test_idempotent() {
    for input in ["2(3+1)", "(1)(2)3", " 4 ( 5 ) ", "((1))((2))", "1+2", ""] {
      let once = normalize(input);
      assert_eq!(normalize(&once), once, "normalize not idempotent on {input:?}");
    }
  }
}
