use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Underflow checked vector
///
/// Every fallible method checks its arity before touching the
/// vector, so an `Err` always leaves the stack as it was.

#[derive(Clone, PartialEq)]
pub struct Stack<T> {
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Stack { vec: vec![] }
    }
}

impl<T> Stack<T> {
    pub fn new() -> Stack<T> {
        Stack::default()
    }
    fn underflow_error(&self, len: usize) -> Error {
        if len <= 1 {
            error!(StackUnderflow; "stack is empty")
        } else {
            error!(StackUnderflow; "need at least {} values", len)
        }
    }
    pub fn clear(&mut self) {
        self.vec.clear()
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn as_slice(&self) -> &[T] {
        &self.vec
    }
    pub fn push(&mut self, val: T) {
        self.vec.push(val);
    }
    pub fn pop(&mut self) -> Result<T> {
        match self.vec.pop() {
            Some(v) => Ok(v),
            None => Err(self.underflow_error(1)),
        }
    }
    pub fn last(&self) -> Result<&T> {
        match self.vec.last() {
            Some(v) => Ok(v),
            None => Err(self.underflow_error(1)),
        }
    }
    /// The top `len` values, bottom first.
    pub fn last_n(&self, len: usize) -> Result<&[T]> {
        if len > self.vec.len() {
            Err(self.underflow_error(len))
        } else {
            Ok(&self.vec[self.vec.len() - len..])
        }
    }
    pub fn pop_n(&mut self, len: usize) -> Result<Vec<T>> {
        if len > self.vec.len() {
            Err(self.underflow_error(len))
        } else {
            let range = (self.vec.len() - len)..;
            Ok(self.vec.drain(range).collect())
        }
    }
    /// Replace the top `len` values with `val`.
    pub fn replace(&mut self, len: usize, val: T) -> Result<()> {
        self.pop_n(len)?;
        self.push(val);
        Ok(())
    }
    pub fn swap(&mut self) -> Result<()> {
        let len = self.vec.len();
        if len < 2 {
            return Err(error!(StackUnderflow; "need at least two values to swap"));
        }
        self.vec.swap(len - 1, len - 2);
        Ok(())
    }
}

impl<T: Clone> Stack<T> {
    pub fn dup(&mut self) -> Result<()> {
        let top = self.last()?.clone();
        self.push(top);
        Ok(())
    }
}
