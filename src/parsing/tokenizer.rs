
//! Lazy tokenizer over normalized expression text.

use super::source::SourceOffset;
use super::token::{Token, BinaryOperator};
use crate::util::regexes::NUMBER_RUN_RE;

use regex::Regex;
use log::trace;

/// A forward-only cursor over a string.
#[derive(Debug, Clone)]
pub struct TokenizerState<'a> {
  input: &'a str,
  position: SourceOffset,
}

/// Whether the tokenizer is looking for an operand (a number, an
/// open paren, or a prefix operator) or for an infix operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expecting {
  Operand,
  Operator,
}

/// Produces [`Token`] values from a normalized expression, one at a
/// time. A `-` is read as [`Token::UnaryNegate`] whenever an operand
/// is expected and as a subtraction otherwise.
///
/// The iterator is finite and cannot be restarted. Characters the
/// tokenizer does not recognize are skipped, which never happens for
/// input that passed validation.
#[derive(Debug)]
pub struct Tokenizer<'a> {
  state: TokenizerState<'a>,
  expecting: Expecting,
}

impl<'a> TokenizerState<'a> {
  pub fn new(input: &'a str) -> Self {
    Self {
      input,
      position: SourceOffset(0),
    }
  }

  pub fn peek(&self) -> Option<char> {
    self.input.chars().next()
  }

  /// Advances past `amount` bytes and returns the skipped portion.
  /// Never advances beyond the end of the input. The position moves by
  /// the number of characters skipped, not bytes.
  pub fn advance(&mut self, mut amount: usize) -> &'a str {
    amount = amount.min(self.input.len());
    let (prefix, suffix) = self.input.split_at(amount);
    self.position += prefix.chars().count();
    self.input = suffix;
    prefix
  }

  /// Advances past the next character, if any, and returns it.
  pub fn next_char(&mut self) -> Option<char> {
    let ch = self.peek()?;
    self.advance(ch.len_utf8());
    Some(ch)
  }

  pub fn current_pos(&self) -> SourceOffset {
    self.position
  }

  /// If the current position of the string matches the given regex,
  /// returns the matched string and advances the tokenizer state. If
  /// not, returns `None`.
  ///
  /// The regex MUST be anchored at the start of the input. This
  /// function may panic if that precondition is not satisfied.
  pub fn read_regex(&mut self, regex: &Regex) -> Option<&'a str> {
    let m = regex.find(self.input)?;
    assert_eq!(m.start(), 0, "Regex must be anchored at the start of the input");

    Some(self.advance(m.len()))
  }
}

impl<'a> Tokenizer<'a> {
  pub fn new(input: &'a str) -> Self {
    Self {
      state: TokenizerState::new(input),
      expecting: Expecting::Operand,
    }
  }

  pub fn expecting(&self) -> Expecting {
    self.expecting
  }

  fn read_one_token(&mut self) -> Option<Token> {
    loop {
      let ch = self.state.peek()?;
      if ch == '-' && self.expecting == Expecting::Operand {
        self.state.advance(1);
        return Some(Token::UnaryNegate);
      } else if let Some(token) = char_token(ch) {
        self.state.advance(1);
        self.expecting = if token == Token::RightParen { Expecting::Operator } else { Expecting::Operand };
        return Some(token);
      } else if let Some(number) = self.state.read_regex(&NUMBER_RUN_RE) {
        self.expecting = Expecting::Operator;
        return Some(Token::number(number));
      } else {
        trace!("skipping unrecognized character {ch:?} at {}", self.state.current_pos());
        self.state.next_char();
        self.expecting = Expecting::Operand;
      }
    }
  }
}

fn char_token(ch: char) -> Option<Token> {
  match ch {
    '(' => Some(Token::LeftParen),
    ')' => Some(Token::RightParen),
    _ => BinaryOperator::from_symbol(ch).map(Token::Operator),
  }
}

impl<'a> Iterator for Tokenizer<'a> {
  type Item = Token;

  fn next(&mut self) -> Option<Token> {
    let token = self.read_one_token()?;
    trace!("token {token}");
    Some(token)
  }
}

/// Tokenizes a normalized expression.
pub fn tokenize(expression: &str) -> Tokenizer<'_> {
  Tokenizer::new(expression)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn num(s: &str) -> Token {
    Token::number(s)
  }

  fn op(sym: char) -> Token {
    Token::Operator(BinaryOperator::from_symbol(sym).unwrap())
  }

  #[test]
  fn test_state_advance() {
    let mut state = TokenizerState::new("abcdefg");
    assert_eq!(state.advance(3), "abc");
    assert_eq!(state.current_pos(), SourceOffset(3));
    assert_eq!(state.advance(99), "defg");
    assert_eq!(state.current_pos(), SourceOffset(7));
    assert_eq!(state.advance(99), "");
    assert_eq!(state.peek(), None);
  }

  #[test]
  fn test_state_next_char_multibyte() {
    let mut state = TokenizerState::new("éa1");
    assert_eq!(state.next_char(), Some('é'));
    assert_eq!(state.current_pos(), SourceOffset(1));
    assert_eq!(state.next_char(), Some('a'));
    assert_eq!(state.current_pos(), SourceOffset(2));
    assert_eq!(state.read_regex(&NUMBER_RUN_RE), Some("1"));
    assert_eq!(state.current_pos(), SourceOffset(3));
    assert_eq!(state.next_char(), None);
  }

  #[test]
  fn test_state_read_regex() {
    let mut state = TokenizerState::new("12.5+3");
    assert_eq!(state.read_regex(&NUMBER_RUN_RE), Some("12.5"));
    assert_eq!(state.current_pos(), SourceOffset(4));
    assert_eq!(state.read_regex(&NUMBER_RUN_RE), None);
    assert_eq!(state.current_pos(), SourceOffset(4));
  }

  #[test]
  fn test_simple_expression() {
    let tokens: Vec<_> = tokenize("3+4*2").collect();
    assert_eq!(tokens, vec![num("3"), op('+'), num("4"), op('*'), num("2")]);
  }

  #[test]
  fn test_parens() {
    let tokens: Vec<_> = tokenize("(3+4)*2").collect();
    assert_eq!(
      tokens,
      vec![Token::LeftParen, num("3"), op('+'), num("4"), Token::RightParen, op('*'), num("2")],
    );
  }

  #[test]
  fn test_leading_minus_is_unary() {
    let tokens: Vec<_> = tokenize("-3+5").collect();
    assert_eq!(tokens, vec![Token::UnaryNegate, num("3"), op('+'), num("5")]);
  }

  #[test]
  fn test_minus_after_operator_is_unary() {
    let tokens: Vec<_> = tokenize("2*-3").collect();
    assert_eq!(tokens, vec![num("2"), op('*'), Token::UnaryNegate, num("3")]);
    let tokens: Vec<_> = tokenize("2--3").collect();
    assert_eq!(tokens, vec![num("2"), op('-'), Token::UnaryNegate, num("3")]);
  }

  #[test]
  fn test_minus_after_open_paren_is_unary() {
    let tokens: Vec<_> = tokenize("(-1)").collect();
    assert_eq!(tokens, vec![Token::LeftParen, Token::UnaryNegate, num("1"), Token::RightParen]);
  }

  #[test]
  fn test_minus_after_close_paren_is_binary() {
    let tokens: Vec<_> = tokenize("(1)-2").collect();
    assert_eq!(tokens, vec![Token::LeftParen, num("1"), Token::RightParen, op('-'), num("2")]);
  }

  #[test]
  fn test_stacked_unary_minus() {
    let tokens: Vec<_> = tokenize("--3").collect();
    assert_eq!(tokens, vec![Token::UnaryNegate, Token::UnaryNegate, num("3")]);
  }

  #[test]
  fn test_decimal_numbers() {
    let tokens: Vec<_> = tokenize("3.25^.5").collect();
    assert_eq!(tokens, vec![num("3.25"), op('^'), num(".5")]);
  }

  #[test]
  fn test_malformed_number_passes_through() {
    let tokens: Vec<_> = tokenize("1.2.3+1").collect();
    assert_eq!(tokens, vec![num("1.2.3"), op('+'), num("1")]);
  }

  #[test]
  fn test_unrecognized_character_resets_state() {
    // After the skipped character, an operand is expected again, so
    // the `-` is unary.
    let mut tokenizer = tokenize("2x-3");
    assert_eq!(tokenizer.next(), Some(num("2")));
    assert_eq!(tokenizer.expecting(), Expecting::Operator);
    assert_eq!(tokenizer.next(), Some(Token::UnaryNegate));
    assert_eq!(tokenizer.next(), Some(num("3")));
    assert_eq!(tokenizer.next(), None);
  }

  #[test]
  fn test_exhausted_tokenizer_stays_exhausted() {
    let mut tokenizer = tokenize("1");
    assert_eq!(tokenizer.next(), Some(num("1")));
    assert_eq!(tokenizer.next(), None);
    assert_eq!(tokenizer.next(), None);
  }

  #[test]
  fn test_empty_input() {
    assert_eq!(tokenize("").count(), 0);
  }
}
