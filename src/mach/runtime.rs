use super::{Engine, Number, Opcode};
use crate::lang::{Error, Token, Word};
use log::debug;

pub const HELP: &str = "\
Arithmetic:      +  -  *  /  pow  sq
Transcendental:  sin  cos  tan  inv  sqrt  log  ln
Stack:           dup  swap  drop  clear (clr)
Constants:       pi  e
Other:           neg  help  quit (q)";

/// ## Outcome of one token
///
/// Everything but `Quit` asks for the stack to be shown again.
#[derive(Debug, PartialEq, Clone)]
pub enum Event {
    /// Blank input; nothing changed.
    Redisplay,
    Pushed(f64),
    Constant(Opcode, f64),
    Result(f64),
    Cleared,
    Swapped,
    Dropped(f64),
    Duplicated(f64),
    Help,
    Quit,
    Error(Error),
}

impl Event {
    pub fn is_quit(&self) -> bool {
        matches!(self, Event::Quit)
    }

    /// Status line for the renderer, if the outcome has one.
    pub fn message(&self) -> Option<String> {
        match self {
            Event::Redisplay | Event::Quit => None,
            Event::Pushed(n) => Some(format!("Pushed {}", Number(*n))),
            Event::Constant(op, n) => Some(format!("Pushed {} ({})", op, Number(*n))),
            Event::Result(n) => Some(format!("Result: {}", Number(*n))),
            Event::Cleared => Some("Stack cleared".to_string()),
            Event::Swapped => Some("Swapped top two values".to_string()),
            Event::Dropped(n) => Some(format!("Dropped {}", Number(*n))),
            Event::Duplicated(n) => Some(format!("Duplicated {}", Number(*n))),
            Event::Help => Some(HELP.to_string()),
            Event::Error(e) => Some(format!("Error: {}", e)),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum State {
    Running,
    Terminating,
}

impl Default for State {
    fn default() -> Self {
        State::Running
    }
}

/// ## Token dispatcher
///
/// Feeds tokens to the engine one at a time. Once a quit command has
/// been seen every later token is ignored.
#[derive(Debug, Default)]
pub struct Runtime {
    engine: Engine,
    state: State,
}

impl Runtime {
    pub fn new() -> Runtime {
        Runtime::default()
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == State::Running
    }

    /// Stack contents, bottom first.
    pub fn stack(&self) -> &[f64] {
        self.engine.values()
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn enter(&mut self, token: &str) -> Event {
        if !self.is_running() {
            return Event::Quit;
        }
        let token = token.trim();
        let event = if token.is_empty() {
            Event::Redisplay
        } else {
            match self.dispatch(token) {
                Ok(event) => event,
                Err(error) => Event::Error(error),
            }
        };
        debug!("{:?} => {:?} {:?}", token, event, self.engine.values());
        if event.is_quit() {
            self.state = State::Terminating;
        }
        event
    }

    fn dispatch(&mut self, token: &str) -> Result<Event, Error> {
        let event = match Token::from_string(token)? {
            Token::Number(n) => {
                self.engine.push(n);
                Event::Pushed(n)
            }
            Token::Word(word) => self.word(word)?,
            Token::Opcode(op @ Opcode::Pi) | Token::Opcode(op @ Opcode::E) => {
                Event::Constant(op, self.engine.execute(op)?)
            }
            Token::Opcode(op) => Event::Result(self.engine.execute(op)?),
        };
        Ok(event)
    }

    fn word(&mut self, word: Word) -> Result<Event, Error> {
        let event = match word {
            Word::Quit => Event::Quit,
            Word::Help => Event::Help,
            Word::Clear => {
                self.engine.clear();
                Event::Cleared
            }
            Word::Swap => {
                self.engine.swap()?;
                Event::Swapped
            }
            Word::Drop => Event::Dropped(self.engine.drop()?),
            Word::Dup => {
                let value = self.engine.peek()?;
                self.engine.dup()?;
                Event::Duplicated(value)
            }
        };
        Ok(event)
    }
}
