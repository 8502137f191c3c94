
//! Various utility functions.

pub mod regexes;

/// Formats a result for display. Finite values use the shortest
/// representation that round-trips, so whole numbers print without a
/// trailing `.0`.
pub fn format_number(value: f64) -> String {
  if value == 0.0 {
    // Avoid printing "-0".
    "0".to_owned()
  } else {
    value.to_string()
  }
}
