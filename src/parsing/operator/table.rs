
use super::{Operator, UNARY_NEGATE_SYMBOL};
use super::precedence::Precedence;
use super::associativity::Associativity;

use once_cell::sync::Lazy;

use std::collections::{hash_map, HashMap};

/// The operator table used by the evaluator. Built on first use and
/// never mutated afterward, so it can be read from any thread.
pub static COMMON_OPERATORS: Lazy<OperatorTable> = Lazy::new(OperatorTable::common_operators);

/// A table of operators, indexed by their symbol.
#[derive(Debug, Clone, Default)]
pub struct OperatorTable {
  by_symbol: HashMap<char, Operator>,
}

impl OperatorTable {
  pub fn new() -> OperatorTable {
    OperatorTable::default()
  }

  pub fn with_capacity(capacity: usize) -> OperatorTable {
    OperatorTable {
      by_symbol: HashMap::with_capacity(capacity),
    }
  }

  pub fn get(&self, symbol: char) -> Option<&Operator> {
    self.by_symbol.get(&symbol)
  }

  pub fn insert(&mut self, op: Operator) -> Option<Operator> {
    self.by_symbol.insert(op.symbol(), op)
  }

  /// The standard arithmetic operators. Exponentiation and unary
  /// negation share the tightest stratum and both associate to the
  /// right, so `2^3^2` is `2^(3^2)` and `--3` is `-(-3)`.
  pub fn common_operators() -> OperatorTable {
    vec![
      Operator::new('^', Associativity::Right, Precedence::new(30)),
      Operator::new(UNARY_NEGATE_SYMBOL, Associativity::Right, Precedence::new(30)),
      Operator::new('*', Associativity::Left, Precedence::new(20)),
      Operator::new('/', Associativity::Left, Precedence::new(20)),
      Operator::new('+', Associativity::Left, Precedence::new(10)),
      Operator::new('-', Associativity::Left, Precedence::new(10)),
    ].into_iter().collect()
  }

  pub fn len(&self) -> usize {
    self.by_symbol.len()
  }

  pub fn is_empty(&self) -> bool {
    self.by_symbol.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = &Operator> {
    self.by_symbol.values()
  }
}

impl IntoIterator for OperatorTable {
  type Item = Operator;
  type IntoIter = hash_map::IntoValues<char, Operator>;

  fn into_iter(self) -> Self::IntoIter {
    self.by_symbol.into_values()
  }
}

impl FromIterator<Operator> for OperatorTable {
  fn from_iter<I>(iter: I) -> Self
  where I : IntoIterator<Item = Operator> {
    let iter = iter.into_iter();
    let (len_bound, _) = iter.size_hint();
    let mut table = OperatorTable::with_capacity(len_bound);
    for op in iter {
      table.insert(op);
    }
    table
  }
}
