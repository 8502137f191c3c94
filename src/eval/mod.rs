
//! The back half of the expression pipeline: reducing a postfix token
//! sequence to a number.

pub mod arithmetic;
pub mod evaluator;

pub use evaluator::{evaluate, EvalError, Malformation};
