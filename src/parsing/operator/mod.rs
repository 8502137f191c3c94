
mod precedence;
mod associativity;
mod table;

pub use precedence::Precedence;
pub use associativity::Associativity;
pub use table::{OperatorTable, COMMON_OPERATORS};

/// The symbol used to display the unary negation operator. This
/// never appears in user input; the tokenizer produces it from a `-`
/// in operand position.
pub const UNARY_NEGATE_SYMBOL: char = '~';

/// An operator has a precedence and an associativity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operator {
  symbol: char,
  assoc: Associativity,
  prec: Precedence,
}

impl Operator {
  pub fn new(symbol: char, assoc: Associativity, prec: Precedence) -> Self {
    Operator { symbol, assoc, prec }
  }

  /// The symbol of the operator, as displayed to the user.
  pub fn symbol(&self) -> char {
    self.symbol
  }

  pub fn associativity(&self) -> Associativity {
    self.assoc
  }

  pub fn precedence(&self) -> Precedence {
    self.prec
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_operator_accessors() {
    let op = Operator::new('#', Associativity::Right, Precedence::new(7));
    assert_eq!(op.symbol(), '#');
    assert_eq!(op.associativity(), Associativity::Right);
    assert_eq!(op.precedence(), Precedence::new(7));
    assert!(!op.associativity().is_left_assoc());
  }
}
