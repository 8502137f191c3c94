
//! Runs an expression through every stage of the pipeline.

use crate::error::Error;
use crate::eval::evaluate;
use crate::parsing::normalizer::normalize;
use crate::parsing::operator::{OperatorTable, COMMON_OPERATORS};
use crate::parsing::shunting_yard::{convert, Postfix};
use crate::parsing::token::Token;
use crate::parsing::tokenizer::tokenize;
use crate::parsing::validator::validate;
use crate::util::format_number;

use serde::{Serialize, Serializer};

/// Every intermediate form produced while evaluating one expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
  pub expression: String,
  pub normalized: String,
  pub tokens: Vec<Token>,
  pub postfix: Postfix,
  #[serde(serialize_with = "serialize_result")]
  pub result: f64,
}

/// JSON has no representation for infinities or NaN, so those results
/// are written as strings (`"inf"`, `"-inf"`, `"NaN"`).
fn serialize_result<S>(result: &f64, serializer: S) -> Result<S::Ok, S::Error>
where S : Serializer {
  if result.is_finite() {
    serializer.serialize_f64(*result)
  } else {
    serializer.serialize_str(&format_number(*result))
  }
}

/// Evaluates `expression` with the standard operator table.
pub fn run(expression: &str) -> Result<Evaluation, Error> {
  run_with_table(expression, &COMMON_OPERATORS)
}

pub fn run_with_table(expression: &str, table: &OperatorTable) -> Result<Evaluation, Error> {
  validate(expression)?;
  let normalized = normalize(expression);
  let tokens: Vec<Token> = tokenize(&normalized).collect();
  let postfix = convert(tokens.iter().cloned(), table)?;
  let result = evaluate(postfix.iter().cloned())?;
  Ok(Evaluation {
    expression: expression.to_owned(),
    normalized,
    tokens,
    postfix,
    result,
  })
}

/// Evaluates `expression` and returns only the result.
pub fn eval_str(expression: &str) -> Result<f64, Error> {
  run(expression).map(|evaluation| evaluation.result)
}
