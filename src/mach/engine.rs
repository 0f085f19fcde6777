use super::{Opcode, Stack};
use crate::error;
use crate::lang::Error;
use log::trace;

type Result<T> = std::result::Result<T, Error>;

/// ## Stack engine
///
/// Owns the operand stack. Operations check arity and domain against
/// the current operands first and only then mutate, so a failed call
/// leaves the stack untouched.

#[derive(Debug, Default, Clone)]
pub struct Engine {
    stack: Stack<f64>,
}

impl Engine {
    pub fn new() -> Engine {
        Engine::default()
    }

    /// Stack contents, bottom first.
    pub fn values(&self) -> &[f64] {
        self.stack.as_slice()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn push(&mut self, value: f64) {
        self.stack.push(value)
    }

    pub fn pop(&mut self) -> Result<f64> {
        self.stack.pop()
    }

    pub fn peek(&self) -> Result<f64> {
        self.stack.last().copied()
    }

    pub fn clear(&mut self) {
        self.stack.clear()
    }

    pub fn swap(&mut self) -> Result<()> {
        self.stack.swap()
    }

    pub fn dup(&mut self) -> Result<()> {
        self.stack.dup()
    }

    pub fn drop(&mut self) -> Result<f64> {
        self.stack.pop()
    }

    /// Apply `opcode` to the top of the stack and push its result.
    pub fn execute(&mut self, opcode: Opcode) -> Result<f64> {
        let arity = opcode.arity();
        if arity == 2 && self.stack.len() < arity {
            return Err(error!(StackUnderflow; "need at least two values for '{}'", opcode));
        }
        let operands = self.stack.last_n(arity)?;
        let result = opcode.eval(operands)?;
        trace!("{} {:?} => {}", opcode, operands, result);
        self.stack.replace(arity, result)?;
        Ok(result)
    }

    pub fn add(&mut self) -> Result<f64> {
        self.execute(Opcode::Add)
    }

    pub fn subtract(&mut self) -> Result<f64> {
        self.execute(Opcode::Sub)
    }

    pub fn multiply(&mut self) -> Result<f64> {
        self.execute(Opcode::Mul)
    }

    pub fn divide(&mut self) -> Result<f64> {
        self.execute(Opcode::Div)
    }

    pub fn power(&mut self) -> Result<f64> {
        self.execute(Opcode::Pow)
    }

    pub fn sine(&mut self) -> Result<f64> {
        self.execute(Opcode::Sin)
    }

    pub fn cosine(&mut self) -> Result<f64> {
        self.execute(Opcode::Cos)
    }

    pub fn tangent(&mut self) -> Result<f64> {
        self.execute(Opcode::Tan)
    }

    pub fn negate(&mut self) -> Result<f64> {
        self.execute(Opcode::Neg)
    }

    pub fn square(&mut self) -> Result<f64> {
        self.execute(Opcode::Sq)
    }

    pub fn invert(&mut self) -> Result<f64> {
        self.execute(Opcode::Inv)
    }

    pub fn square_root(&mut self) -> Result<f64> {
        self.execute(Opcode::Sqrt)
    }

    pub fn log10(&mut self) -> Result<f64> {
        self.execute(Opcode::Log)
    }

    pub fn natural_log(&mut self) -> Result<f64> {
        self.execute(Opcode::Ln)
    }

    pub fn push_pi(&mut self) -> Result<f64> {
        self.execute(Opcode::Pi)
    }

    pub fn push_e(&mut self) -> Result<f64> {
        self.execute(Opcode::E)
    }
}
