
//! An evaluator for infix arithmetic expressions.
//!
//! An expression passes through five stages: it is
//! [validated](parsing::validator), [normalized](parsing::normalizer),
//! [tokenized](parsing::tokenizer), reordered into postfix by the
//! [shunting yard algorithm](parsing::shunting_yard), and finally
//! [evaluated](eval::evaluator). [`runner::run`] drives all five.

pub mod error;
pub mod eval;
pub mod parsing;
pub mod runner;
pub mod stack;
pub mod util;

pub use error::{Error, ErrorKind, Stage};
pub use runner::{run, eval_str, Evaluation};
