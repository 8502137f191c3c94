
//! Infix to postfix conversion with the shunting yard algorithm.

use super::operator::{Operator, OperatorTable};
use super::token::Token;

use itertools::Itertools;
use serde::Serialize;
use thiserror::Error;
use log::{debug, trace};

use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConversionError {
  #[error("Mismatched parenthesis: no '(' matches a ')'")]
  MissingOpenParen,
  #[error("Mismatched parenthesis: a '(' was never closed")]
  MissingCloseParen,
  #[error("Operator '{0}' is not in the operator table")]
  UnknownOperator(char),
}

/// A sequence of tokens in postfix (Reverse Polish) order. Never
/// contains parentheses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Postfix {
  tokens: Vec<Token>,
}

/// The state of one infix to postfix conversion. Tokens are fed in
/// with [`ShuntingYard::push`], and [`ShuntingYard::finish`] flushes
/// the remaining operators.
#[derive(Debug, Clone)]
pub struct ShuntingYard<'a> {
  table: &'a OperatorTable,
  // Holds operators and `LeftParen`, never `RightParen`.
  operator_stack: Vec<Token>,
  output: Vec<Token>,
}

impl<'a> ShuntingYard<'a> {
  pub fn new(table: &'a OperatorTable) -> Self {
    Self {
      table,
      operator_stack: Vec::new(),
      output: Vec::new(),
    }
  }

  /// The number of operators and open parens waiting on the stack.
  pub fn pending_operators(&self) -> usize {
    self.operator_stack.len()
  }

  pub fn push(&mut self, token: Token) -> Result<(), ConversionError> {
    match token {
      Token::Number(_) => {
        self.output.push(token);
      }
      Token::Operator(_) | Token::UnaryNegate => {
        let current_op = self.lookup(&token)?;
        // Pop operators which bind at least as tightly as this one.
        while let Some(top) = self.operator_stack.last() {
          if *top == Token::LeftParen {
            break;
          }
          let stack_op = self.lookup(top)?;
          if !compare_precedence(stack_op, current_op) {
            break;
          }
          // unwrap: `last` returned a value above.
          let top = self.operator_stack.pop().unwrap();
          self.output.push(top);
        }
        self.operator_stack.push(token);
      }
      Token::LeftParen => {
        self.operator_stack.push(token);
      }
      Token::RightParen => {
        loop {
          match self.operator_stack.pop() {
            None => return Err(ConversionError::MissingOpenParen),
            Some(Token::LeftParen) => break,
            Some(op) => self.output.push(op),
          }
        }
      }
    }
    trace!("stack [{}], output [{}]", self.operator_stack.iter().join(" "), self.output.iter().join(" "));
    Ok(())
  }

  pub fn finish(mut self) -> Result<Postfix, ConversionError> {
    while let Some(token) = self.operator_stack.pop() {
      if token == Token::LeftParen {
        return Err(ConversionError::MissingCloseParen);
      }
      self.output.push(token);
    }
    Ok(Postfix { tokens: self.output })
  }

  fn lookup(&self, token: &Token) -> Result<&'a Operator, ConversionError> {
    let table: &'a OperatorTable = self.table;
    // Only called on operator tokens, which always have a symbol.
    let symbol = token.operator_symbol().unwrap_or_default();
    table.get(symbol).ok_or(ConversionError::UnknownOperator(symbol))
  }
}

/// Whether the operator on top of the stack should be output before
/// `current_op` is pushed. Right-associative operators never pop an
/// operator of equal precedence.
fn compare_precedence(stack_op: &Operator, current_op: &Operator) -> bool {
  stack_op.precedence() > current_op.precedence() ||
    (stack_op.precedence() == current_op.precedence() && current_op.associativity().is_left_assoc())
}

/// Converts an infix token sequence to postfix order.
pub fn convert<I>(tokens: I, table: &OperatorTable) -> Result<Postfix, ConversionError>
where I : IntoIterator<Item = Token> {
  let mut shunting_yard = ShuntingYard::new(table);
  for token in tokens {
    shunting_yard.push(token)?;
  }
  let postfix = shunting_yard.finish()?;
  debug!("postfix form: {postfix}");
  Ok(postfix)
}

impl Postfix {
  pub fn len(&self) -> usize {
    self.tokens.len()
  }

  pub fn is_empty(&self) -> bool {
    self.tokens.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = &Token> {
    self.tokens.iter()
  }
}

impl IntoIterator for Postfix {
  type Item = Token;
  type IntoIter = std::vec::IntoIter<Token>;

  fn into_iter(self) -> Self::IntoIter {
    self.tokens.into_iter()
  }
}

impl Display for Postfix {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.tokens.iter().join(" "))
  }
}
