
//! Tokens shared by the tokenizer, the shunting yard converter, and
//! the postfix evaluator.

use super::operator::UNARY_NEGATE_SYMBOL;

use serde::{Serialize, Serializer};

use std::fmt::{self, Display, Formatter};

/// An atomic unit of an expression. Tokens carry no position
/// information, since they are produced from normalized input whose
/// offsets no longer match what the user typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
  /// A numeric literal, kept as text. Malformed literals such as
  /// `1.2.3` are rejected when the number is evaluated, not when it
  /// is tokenized.
  Number(String),
  Operator(BinaryOperator),
  UnaryNegate,
  LeftParen,
  RightParen,
}

/// The five binary operators of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
  Add,
  Sub,
  Mul,
  Div,
  Pow,
}

impl Token {
  pub fn number(text: impl Into<String>) -> Self {
    Token::Number(text.into())
  }

  /// The operator-table symbol for this token, if it is an operator.
  /// Unary negation uses [`UNARY_NEGATE_SYMBOL`].
  pub fn operator_symbol(&self) -> Option<char> {
    match self {
      Token::Operator(op) => Some(op.symbol()),
      Token::UnaryNegate => Some(UNARY_NEGATE_SYMBOL),
      Token::Number(_) | Token::LeftParen | Token::RightParen => None,
    }
  }
}

impl BinaryOperator {
  pub fn symbol(self) -> char {
    match self {
      BinaryOperator::Add => '+',
      BinaryOperator::Sub => '-',
      BinaryOperator::Mul => '*',
      BinaryOperator::Div => '/',
      BinaryOperator::Pow => '^',
    }
  }

  pub fn from_symbol(symbol: char) -> Option<Self> {
    match symbol {
      '+' => Some(BinaryOperator::Add),
      '-' => Some(BinaryOperator::Sub),
      '*' => Some(BinaryOperator::Mul),
      '/' => Some(BinaryOperator::Div),
      '^' => Some(BinaryOperator::Pow),
      _ => None,
    }
  }
}

impl Display for BinaryOperator {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.symbol())
  }
}

impl Display for Token {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Token::Number(n) => write!(f, "{n}"),
      Token::Operator(op) => write!(f, "{op}"),
      Token::UnaryNegate => write!(f, "{UNARY_NEGATE_SYMBOL}"),
      Token::LeftParen => write!(f, "("),
      Token::RightParen => write!(f, ")"),
    }
  }
}

/// Tokens serialize as their display text.
impl Serialize for Token {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(self)
  }
}
