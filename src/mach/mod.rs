/*!
## Rust Machine Module

This Rust module is the stack engine of the calculator and the
dispatcher that drives it one token at a time.

*/

mod engine;
mod function;
mod number;
mod opcode;
mod operation;
mod runtime;
mod stack;

pub use engine::Engine;
pub use function::Function;
pub use number::Number;
pub use opcode::Opcode;
pub use operation::Operation;
pub use runtime::Event;
pub use runtime::Runtime;
pub use runtime::State;
pub use runtime::HELP;
pub use stack::Stack;

#[cfg(test)]
mod tests;
