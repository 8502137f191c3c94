
use crate::parsing::validator::ValidationError;
use crate::parsing::shunting_yard::ConversionError;
use crate::eval::EvalError;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Any failure of the expression pipeline.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
  #[error("{0}")]
  Validation(#[from] ValidationError),
  #[error("{0}")]
  Conversion(#[from] ConversionError),
  #[error("{0}")]
  Eval(#[from] EvalError),
}

/// The pipeline stage at which an [`Error`] occurred. Normalization
/// and tokenization never fail, so they have no stage here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
  Validation,
  Conversion,
  Evaluation,
}

/// Stage-independent classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
  EmptyInput,
  IllegalCharacter,
  AdjacentNumbers,
  UnbalancedParentheses,
  MismatchedParenthesis,
  UnknownOperator,
  MalformedNumber,
  StackUnderflow,
  DivisionByZero,
  MalformedExpression,
}

#[derive(Serialize)]
struct ErrorReport {
  stage: Stage,
  kind: ErrorKind,
  message: String,
}

impl Error {
  pub fn stage(&self) -> Stage {
    match self {
      Error::Validation(_) => Stage::Validation,
      Error::Conversion(_) => Stage::Conversion,
      Error::Eval(_) => Stage::Evaluation,
    }
  }

  pub fn kind(&self) -> ErrorKind {
    match self {
      Error::Validation(err) => match err {
        ValidationError::EmptyInput => ErrorKind::EmptyInput,
        ValidationError::IllegalCharacter { .. } => ErrorKind::IllegalCharacter,
        ValidationError::AdjacentNumbers { .. } => ErrorKind::AdjacentNumbers,
        ValidationError::UnbalancedParentheses(_) => ErrorKind::UnbalancedParentheses,
      },
      Error::Conversion(err) => match err {
        ConversionError::MissingOpenParen | ConversionError::MissingCloseParen => ErrorKind::MismatchedParenthesis,
        ConversionError::UnknownOperator(_) => ErrorKind::UnknownOperator,
      },
      Error::Eval(err) => match err {
        EvalError::MalformedNumber(_) => ErrorKind::MalformedNumber,
        EvalError::StackUnderflow { .. } => ErrorKind::StackUnderflow,
        EvalError::DivisionByZero => ErrorKind::DivisionByZero,
        EvalError::MalformedExpression(_) => ErrorKind::MalformedExpression,
      },
    }
  }
}

impl Serialize for Error {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let report = ErrorReport {
      stage: self.stage(),
      kind: self.kind(),
      message: self.to_string(),
    };
    report.serialize(serializer)
  }
}
