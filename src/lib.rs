//! # RPN
//!
//! A Reverse Polish Notation calculator for the terminal.
//!
//! Numbers go on a stack; operators take their operands off the top
//! of the stack and push the result back.
//! ```text
//! >> 3
//! >> 4
//! >> +
//! Result: 7
//! ```
//!
//! Run `rpn --help` for the command line options. Set `RUST_LOG=debug`
//! to trace every token on stderr.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

pub mod lang;
pub mod mach;
pub mod term;
