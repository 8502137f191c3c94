
//! The front half of the expression pipeline: checking, rewriting,
//! tokenizing, and reordering expression text into postfix form.

pub mod normalizer;
pub mod operator;
pub mod shunting_yard;
pub mod source;
pub mod token;
pub mod tokenizer;
pub mod validator;
