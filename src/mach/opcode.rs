use super::{Function, Operation};
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Calculator instruction set
///
/// The calculator has no registers.
/// Every operation is performed on the stack.
///
/// For example: `3 4 +` pushes `3` and `4` then `Add` replaces
/// both with `7`.
///
/// See <https://en.wikipedia.org/wiki/Reverse_Polish_notation>

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Opcode {
    // *** Constants
    Pi,
    E,

    // *** Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Neg,
    Sq,

    // *** Built-in functions
    Sin,
    Cos,
    Tan,
    Inv,
    Sqrt,
    Log,
    Ln,
}

impl Opcode {
    pub const ALL: [Opcode; 16] = [
        Opcode::Pi,
        Opcode::E,
        Opcode::Add,
        Opcode::Sub,
        Opcode::Mul,
        Opcode::Div,
        Opcode::Pow,
        Opcode::Neg,
        Opcode::Sq,
        Opcode::Sin,
        Opcode::Cos,
        Opcode::Tan,
        Opcode::Inv,
        Opcode::Sqrt,
        Opcode::Log,
        Opcode::Ln,
    ];

    /// The token that selects this operation.
    pub fn name(&self) -> &'static str {
        use Opcode::*;
        match self {
            Pi => "pi",
            E => "e",
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Pow => "pow",
            Neg => "neg",
            Sq => "sq",
            Sin => "sin",
            Cos => "cos",
            Tan => "tan",
            Inv => "inv",
            Sqrt => "sqrt",
            Log => "log",
            Ln => "ln",
        }
    }

    /// Number of operands consumed from the stack.
    pub fn arity(&self) -> usize {
        use Opcode::*;
        match self {
            Pi | E => 0,
            Neg | Sq | Sin | Cos | Tan | Inv | Sqrt | Log | Ln => 1,
            Add | Sub | Mul | Div | Pow => 2,
        }
    }

    /// Evaluate with exactly `arity()` operands, bottom first.
    pub fn eval(&self, operands: &[f64]) -> Result<f64> {
        use Opcode::*;
        debug_assert_eq!(operands.len(), self.arity());
        match (self, operands) {
            (Pi, []) => Ok(std::f64::consts::PI),
            (E, []) => Ok(std::f64::consts::E),
            (Add, [a, b]) => Ok(Operation::sum(*a, *b)),
            (Sub, [a, b]) => Ok(Operation::subtract(*a, *b)),
            (Mul, [a, b]) => Ok(Operation::multiply(*a, *b)),
            (Div, [a, b]) => Operation::divide(*a, *b),
            (Pow, [a, b]) => Ok(Operation::power(*a, *b)),
            (Neg, [n]) => Ok(Operation::negate(*n)),
            (Sq, [n]) => Ok(Operation::square(*n)),
            (Sin, [n]) => Ok(Function::sin(*n)),
            (Cos, [n]) => Ok(Function::cos(*n)),
            (Tan, [n]) => Ok(Function::tan(*n)),
            (Inv, [n]) => Function::inv(*n),
            (Sqrt, [n]) => Function::sqrt(*n),
            (Log, [n]) => Function::log(*n),
            (Ln, [n]) => Function::ln(*n),
            _ => unreachable!("{} given {} operands", self, operands.len()),
        }
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
