
use super::error::StackError;

/// LIFO stack. Implemented internally as a vector whose "top" is at
/// the end, allowing for constant-time pushes and pops.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Stack<T> {
  elements: Vec<T>,
}

impl<T> Stack<T> {

  pub fn new() -> Self {
    Self::default()
  }

  /// Asserts that the stack has size at least `expected` but does not
  /// pop anything.
  pub fn check_stack_size(&self, expected: usize) -> Result<(), StackError> {
    if self.len() < expected {
      Err(StackError::NotEnoughElements { expected, actual: self.len() })
    } else {
      Ok(())
    }
  }

  pub fn push(&mut self, element: T) {
    self.elements.push(element);
  }

  pub fn pop(&mut self) -> Result<T, StackError> {
    self.elements.pop().ok_or(StackError::NotEnoughElements { expected: 1, actual: 0 })
  }

  /// Pops the top two elements and returns them as `(below, top)`, so
  /// that a binary operator sees its operands in the order they were
  /// pushed. In case of a [`StackError`], `self` will NOT be
  /// modified.
  pub fn pop_pair(&mut self) -> Result<(T, T), StackError> {
    self.check_stack_size(2)?;
    // unwrap: We checked the stack size already
    let top = self.elements.pop().unwrap();
    let below = self.elements.pop().unwrap();
    Ok((below, top))
  }

  /// Consumes the stack, returning its only element, or `self` back
  /// if the stack does not hold exactly one element.
  pub fn into_single(mut self) -> Result<T, Self> {
    if self.len() == 1 {
      // unwrap: The stack has exactly one element
      Ok(self.elements.pop().unwrap())
    } else {
      Err(self)
    }
  }

  pub fn len(&self) -> usize {
    self.elements.len()
  }

  pub fn is_empty(&self) -> bool {
    self.elements.is_empty()
  }

  pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> {
    self.elements.iter()
  }
}

impl<T> From<Vec<T>> for Stack<T> {
  fn from(elements: Vec<T>) -> Self {
    Self { elements }
  }
}

impl<T> Default for Stack<T> {
  fn default() -> Self {
    Self { elements: Vec::new() }
  }
}
