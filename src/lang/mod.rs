/*!
# Rust Language Module

This Rust module classifies calculator input into tokens and defines
the errors every layer reports.

*/

#[macro_use]
mod error;
mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use token::Token;
pub use token::Word;

#[cfg(test)]
mod tests;
