extern crate linefeed;
use super::{Screen, BANNER, COMMANDS, FAREWELL, INTERRUPTED, PROMPT};
use crate::mach::Runtime;
use linefeed::{Command, Function, Interface, Prompter, ReadResult, Signal, Terminal};
use log::info;
use std::sync::Arc;

/// Interactive session. The terminal is only in raw mode while
/// `read_line` runs, and linefeed restores it on every return path.
pub fn main_loop(runtime: &mut Runtime, screen: Screen) -> std::io::Result<()> {
    info!("reading tokens from the line editor");
    let interface = Interface::new("rpn")?;
    interface.set_prompt(PROMPT)?;
    interface.set_report_signal(Signal::Interrupt, true);
    OperatorFunction::install(&interface);
    interface.write_fmt(format_args!("{}\n{}\n", BANNER, COMMANDS))?;

    loop {
        let line = match interface.read_line()? {
            ReadResult::Input(line) => line,
            ReadResult::Signal(Signal::Interrupt) => {
                interface.set_buffer("")?;
                interface.lock_reader().cancel_read_line()?;
                interface.write_fmt(format_args!("{}\n", INTERRUPTED))?;
                continue;
            }
            ReadResult::Signal(_) | ReadResult::Eof => {
                interface.write_fmt(format_args!("\n"))?;
                break;
            }
        };
        let event = runtime.enter(&line);
        if event.is_quit() {
            break;
        }
        if !line.trim().is_empty() {
            interface.add_history_unique(line);
        }
        interface.write_fmt(format_args!("{}", screen.render(&event, runtime.stack())))?;
    }
    interface.write_fmt(format_args!("{}\n", FAREWELL))
}

/// `+ - * /` typed on an empty line are entered at once, without
/// waiting for Enter. Anywhere else they are ordinary characters so
/// `1e-5` can still be typed.
struct OperatorFunction;

impl OperatorFunction {
    const OPERATORS: &'static str = "+-*/";

    fn install<T: Terminal>(i: &Interface<T>) {
        i.define_function("operator-function", Arc::new(OperatorFunction));
        for ch in Self::OPERATORS.chars() {
            i.bind_sequence(ch.to_string(), Command::from_str("operator-function"));
        }
    }
}

impl<Term: Terminal> Function<Term> for OperatorFunction {
    fn execute(&self, prompter: &mut Prompter<Term>, count: i32, ch: char) -> std::io::Result<()> {
        if prompter.buffer().is_empty() {
            prompter.insert(1, ch)?;
            prompter.accept_input()
        } else {
            prompter.insert(count as usize, ch)
        }
    }
}
