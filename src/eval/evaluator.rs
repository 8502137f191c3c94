
use super::arithmetic::{apply_binary, ArithmeticError};
use crate::parsing::token::Token;
use crate::parsing::operator::UNARY_NEGATE_SYMBOL;
use crate::stack::{Stack, StackError};

use thiserror::Error;
use log::{debug, trace};

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
  #[error("'{0}' is not a valid number")]
  MalformedNumber(String),
  #[error("Operator '{operator}' needs {expected} operand(s) but only {actual} available")]
  StackUnderflow {
    operator: char,
    expected: usize,
    actual: usize,
  },
  #[error("Can't divide by 0")]
  DivisionByZero,
  #[error("Malformed expression: {0}")]
  MalformedExpression(Malformation),
}

/// The way in which a postfix sequence failed to reduce to a single
/// value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Malformation {
  /// Nothing was left on the stack.
  NoValue,
  /// More than one value was left on the stack.
  ExtraValues(usize),
  /// A parenthesis appeared in the postfix sequence.
  StrayParenthesis,
}

impl Display for Malformation {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Malformation::NoValue => write!(f, "no value was produced"),
      Malformation::ExtraValues(n) => write!(f, "{n} values were left without an operator"),
      Malformation::StrayParenthesis => write!(f, "unexpected parenthesis"),
    }
  }
}

impl From<ArithmeticError> for EvalError {
  fn from(err: ArithmeticError) -> Self {
    match err {
      ArithmeticError::DivisionByZero => EvalError::DivisionByZero,
    }
  }
}

fn underflow(operator: char) -> impl FnOnce(StackError) -> EvalError {
  move |err| match err {
    StackError::NotEnoughElements { expected, actual } => EvalError::StackUnderflow { operator, expected, actual },
  }
}

/// Reduces a postfix token sequence to a single number.
pub fn evaluate<I>(postfix: I) -> Result<f64, EvalError>
where I : IntoIterator<Item = Token> {
  let mut stack: Stack<f64> = Stack::new();
  for token in postfix {
    match token {
      Token::Number(text) => {
        let value = f64::from_str(&text).map_err(|_| EvalError::MalformedNumber(text))?;
        stack.push(value);
      }
      Token::UnaryNegate => {
        let value = stack.pop().map_err(underflow(UNARY_NEGATE_SYMBOL))?;
        stack.push(-value);
      }
      Token::Operator(op) => {
        let (left, right) = stack.pop_pair().map_err(underflow(op.symbol()))?;
        let value = apply_binary(op, left, right)?;
        trace!("{left} {op} {right} = {value}");
        stack.push(value);
      }
      Token::LeftParen | Token::RightParen => {
        return Err(EvalError::MalformedExpression(Malformation::StrayParenthesis));
      }
    }
  }
  match stack.into_single() {
    Ok(value) => {
      debug!("evaluated to {value}");
      Ok(value)
    }
    Err(stack) if stack.is_empty() => Err(EvalError::MalformedExpression(Malformation::NoValue)),
    Err(stack) => Err(EvalError::MalformedExpression(Malformation::ExtraValues(stack.len()))),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::parsing::token::BinaryOperator;
  use crate::parsing::tokenizer::tokenize;
  use crate::parsing::shunting_yard::convert;
  use crate::parsing::operator::COMMON_OPERATORS;

  use approx::assert_abs_diff_eq;

  fn num(s: &str) -> Token {
    Token::number(s)
  }

  fn op(sym: char) -> Token {
    Token::Operator(BinaryOperator::from_symbol(sym).unwrap())
  }

  fn eval_infix(s: &str) -> Result<f64, EvalError> {
    evaluate(convert(tokenize(s), &COMMON_OPERATORS).unwrap())
  }

  #[test]
  fn test_simple_postfix() {
    // 3 4 2 * +
    let postfix = vec![num("3"), num("4"), num("2"), op('*'), op('+')];
    assert_eq!(evaluate(postfix), Ok(11.0));
  }

  #[test]
  fn test_operand_order() {
    assert_eq!(evaluate(vec![num("10"), num("4"), op('-')]), Ok(6.0));
    assert_eq!(evaluate(vec![num("1"), num("4"), op('/')]), Ok(0.25));
    assert_eq!(evaluate(vec![num("2"), num("3"), op('^')]), Ok(8.0));
  }

  #[test]
  fn test_unary_negate() {
    assert_eq!(evaluate(vec![num("3"), Token::UnaryNegate]), Ok(-3.0));
    assert_eq!(evaluate(vec![num("3"), Token::UnaryNegate, Token::UnaryNegate]), Ok(3.0));
  }

  #[test]
  fn test_decimals() {
    let value = eval_infix("0.1+0.2").unwrap();
    assert_abs_diff_eq!(value, 0.3, epsilon = 1e-12);
    assert_eq!(eval_infix(".5*4"), Ok(2.0));
    assert_eq!(eval_infix("3.*2"), Ok(6.0));
  }

  #[test]
  fn test_fractional_and_negative_exponents() {
    assert_abs_diff_eq!(eval_infix("9^.5").unwrap(), 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(eval_infix("2^-2").unwrap(), 0.25, epsilon = 1e-12);
    assert_abs_diff_eq!(eval_infix("8^(1/3)").unwrap(), 2.0, epsilon = 1e-12);
  }

  #[test]
  fn test_negation_binds_looser_than_power() {
    assert_eq!(eval_infix("-2^2"), Ok(-4.0));
    assert_eq!(eval_infix("(-2)^2"), Ok(4.0));
  }

  #[test]
  fn test_malformed_number() {
    assert_eq!(eval_infix("1.2.3+1"), Err(EvalError::MalformedNumber("1.2.3".to_owned())));
    assert_eq!(evaluate(vec![num(".")]), Err(EvalError::MalformedNumber(".".to_owned())));
  }

  #[test]
  fn test_division_by_zero() {
    assert_eq!(eval_infix("1/0"), Err(EvalError::DivisionByZero));
    assert_eq!(eval_infix("1/(2-2)"), Err(EvalError::DivisionByZero));
    assert_eq!(eval_infix("0/-0"), Err(EvalError::DivisionByZero));
  }

  #[test]
  fn test_stack_underflow_binary() {
    assert_eq!(
      evaluate(vec![num("1"), op('+')]),
      Err(EvalError::StackUnderflow { operator: '+', expected: 2, actual: 1 }),
    );
    // A leading `+` is an infix operator with nothing on its left.
    assert_eq!(
      eval_infix("+3"),
      Err(EvalError::StackUnderflow { operator: '+', expected: 2, actual: 1 }),
    );
  }

  #[test]
  fn test_stack_underflow_unary() {
    assert_eq!(
      evaluate(vec![Token::UnaryNegate]),
      Err(EvalError::StackUnderflow { operator: '~', expected: 1, actual: 0 }),
    );
    assert_eq!(
      eval_infix("3-"),
      Err(EvalError::StackUnderflow { operator: '-', expected: 2, actual: 1 }),
    );
  }

  #[test]
  fn test_malformed_expression() {
    assert_eq!(evaluate(vec![]), Err(EvalError::MalformedExpression(Malformation::NoValue)));
    assert_eq!(
      evaluate(vec![num("1"), num("2")]),
      Err(EvalError::MalformedExpression(Malformation::ExtraValues(2))),
    );
    assert_eq!(
      evaluate(vec![num("1"), Token::LeftParen]),
      Err(EvalError::MalformedExpression(Malformation::StrayParenthesis)),
    );
  }

  #[test]
  fn test_error_messages() {
    assert_eq!(EvalError::DivisionByZero.to_string(), "Can't divide by 0");
    assert_eq!(
      EvalError::MalformedExpression(Malformation::ExtraValues(3)).to_string(),
      "Malformed expression: 3 values were left without an operator",
    );
  }
}
