
//! Last-in-first-out storage used by the postfix evaluator.

mod error;
mod structure;

pub use error::StackError;
pub use structure::Stack;
