
use crate::parsing::token::BinaryOperator;

use thiserror::Error;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ArithmeticError {
  #[error("Can't divide by 0")]
  DivisionByZero,
}

/// Applies a binary operator in double-precision floating point.
///
/// Division fails when the divisor is zero (of either sign). Every
/// other operation follows IEEE 754, so `(-8)^(1/3)` is NaN and large
/// powers overflow to infinity.
pub fn apply_binary(op: BinaryOperator, left: f64, right: f64) -> Result<f64, ArithmeticError> {
  match op {
    BinaryOperator::Add => Ok(left + right),
    BinaryOperator::Sub => Ok(left - right),
    BinaryOperator::Mul => Ok(left * right),
    BinaryOperator::Div => {
      if right == 0.0 {
        Err(ArithmeticError::DivisionByZero)
      } else {
        Ok(left / right)
      }
    }
    BinaryOperator::Pow => Ok(left.powf(right)),
  }
}
