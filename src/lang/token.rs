use super::Error;
use crate::mach::Opcode;
use std::collections::HashMap;

thread_local!(
    static STRING_TO_TOKEN: HashMap<&'static str, Token> = Word::ALL
        .iter()
        .map(|w| (w.name(), Token::Word(*w)))
        .chain(Word::ALIASES.iter().map(|(s, w)| (*s, Token::Word(*w))))
        .chain(Opcode::ALL.iter().map(|op| (op.name(), Token::Opcode(*op))))
        .collect();
);

/// A single unit of user input, already classified.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Token {
    Number(f64),
    Word(Word),
    Opcode(Opcode),
}

impl Token {
    /// Numbers win over commands; anything else is matched without
    /// regard to case. The raw token is kept in the error.
    pub fn from_string(s: &str) -> Result<Token, Error> {
        if let Ok(number) = s.parse::<f64>() {
            return Ok(Token::Number(number));
        }
        let lower = s.to_ascii_lowercase();
        STRING_TO_TOKEN.with(|stt| match stt.get(lower.as_str()) {
            Some(t) => Ok(*t),
            None => Err(error!(UnknownToken; "{}", s)),
        })
    }
}

/// Stack management and session commands.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Word {
    Clear,
    Drop,
    Dup,
    Help,
    Quit,
    Swap,
}

impl Word {
    pub const ALL: [Word; 6] = [
        Word::Clear,
        Word::Drop,
        Word::Dup,
        Word::Help,
        Word::Quit,
        Word::Swap,
    ];

    const ALIASES: [(&'static str, Word); 2] = [("clr", Word::Clear), ("q", Word::Quit)];

    pub fn name(&self) -> &'static str {
        use Word::*;
        match self {
            Clear => "clear",
            Drop => "drop",
            Dup => "dup",
            Help => "help",
            Quit => "quit",
            Swap => "swap",
        }
    }
}
